use super::*;

#[test]
fn user_message_prefers_server_text() {
    let err = ApiError::Rejected { status: 400, message: Some("Invalid credentials".to_owned()) };
    assert_eq!(err.user_message("Login failed. Please try again."), "Invalid credentials");
}

#[test]
fn user_message_falls_back_when_server_silent() {
    let err = ApiError::Transport("connection reset".to_owned());
    assert_eq!(err.user_message("Login failed. Please try again."), "Login failed. Please try again.");

    let blank = ApiError::Refused { message: Some("  ".to_owned()) };
    assert_eq!(blank.user_message("fallback"), "fallback");
}

#[test]
fn unauthorized_is_detected() {
    assert!(ApiError::Unauthorized { message: None }.is_unauthorized());
    assert!(!ApiError::Rejected { status: 403, message: None }.is_unauthorized());
}

#[test]
fn display_includes_status() {
    let err = ApiError::Rejected { status: 503, message: None };
    assert_eq!(err.to_string(), "request failed: 503");
}
