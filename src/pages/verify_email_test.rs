use super::*;

#[test]
fn normalize_code_strips_whitespace() {
    assert_eq!(normalize_code(" 123 456 "), Ok("123456".to_owned()));
    assert_eq!(normalize_code("12\t34\n56"), Ok("123456".to_owned()));
}

#[test]
fn normalize_code_rejects_blank_input() {
    assert_eq!(normalize_code("   "), Err("Enter the verification code from your email."));
}
