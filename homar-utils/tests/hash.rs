use homar_utils::u8s_from_str;

#[test]
fn test_u8s_from_str_is_deterministic() {
    assert_eq!(u8s_from_str("homar"), u8s_from_str("homar"));
}

#[test]
fn test_u8s_from_str_differs_per_input() {
    assert_ne!(u8s_from_str("homar_1"), u8s_from_str("homar_2"));
    assert_ne!(u8s_from_str(""), u8s_from_str(" "));
}
