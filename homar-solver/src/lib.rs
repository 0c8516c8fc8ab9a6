mod dp;
pub use dp::*;
