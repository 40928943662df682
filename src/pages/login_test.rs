use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  priya@college.edu ", "secret"),
        Ok(LoginRequest { email: "priya@college.edu".to_owned(), password: "secret".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let request = validate_login_input("a@b.edu", " spaced ").unwrap();
    assert_eq!(request.password, " spaced ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter your email and password."));
    assert_eq!(validate_login_input("a@b.edu", ""), Err("Enter your email and password."));
}
