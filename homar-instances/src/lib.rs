mod instance;
pub use instance::*;
mod suite;
pub use suite::*;
