use super::*;

#[test]
fn validate_signup_input_builds_student_request() {
    let request = validate_signup_input(" Priya Patel ", " priya@college.edu ", "secret1").unwrap();
    assert_eq!(request.name, "Priya Patel");
    assert_eq!(request.email, "priya@college.edu");
    assert_eq!(request.role, Role::Student);
}

#[test]
fn validate_signup_input_requires_all_fields() {
    assert_eq!(validate_signup_input("", "a@b.edu", "secret1"), Err("Fill in your name, email and password."));
    assert_eq!(validate_signup_input("A", "  ", "secret1"), Err("Fill in your name, email and password."));
    assert_eq!(validate_signup_input("A", "a@b.edu", ""), Err("Fill in your name, email and password."));
}

#[test]
fn validate_signup_input_checks_email_and_password_length() {
    assert_eq!(validate_signup_input("A", "not-an-email", "secret1"), Err("Enter a valid email address."));
    assert_eq!(validate_signup_input("A", "a@b.edu", "12345"), Err("Password must be at least 6 characters."));
}
