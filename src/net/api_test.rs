use super::*;
use crate::net::types::Role;

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn event_endpoints_format_expected_paths() {
    assert_eq!(event_endpoint("e1"), "/events/e1");
    assert_eq!(event_status_endpoint("e1"), "/events/e1/status");
    assert_eq!(event_registrations_endpoint("e1"), "/registrations/event/e1");
    assert_eq!(registration_endpoint("r9"), "/registrations/r9");
}

#[test]
fn endpoint_ids_are_percent_encoded() {
    assert_eq!(event_endpoint("a/b c"), "/events/a%2Fb%20c");
}

#[test]
fn gateway_url_joins_base() {
    let gateway = HttpGateway::new("https://api.college.edu/api/");
    assert_eq!(gateway.url(CHECK_AUTH), "https://api.college.edu/api/user/check-auth");
    assert_eq!(HttpGateway::default().url(LOGIN), format!("{}/user/login", config::API_BASE.trim_end_matches('/')));
}

// =============================================================
// Status classification
// =============================================================

#[test]
fn decode_response_parses_success_body() {
    let env: AuthEnvelope = decode_response(
        200,
        r#"{"success":true,"user":{"_id":"u1","name":"A","email":"a@b.edu","role":"ADMIN","isVerified":true}}"#,
    )
    .unwrap();
    assert_eq!(env.user.map(|u| u.role), Some(Role::Admin));
}

#[test]
fn decode_response_maps_401_with_message() {
    let err = decode_response::<AuthEnvelope>(401, r#"{"success":false,"message":"Session expired"}"#).unwrap_err();
    assert_eq!(err, ApiError::Unauthorized { message: Some("Session expired".to_owned()) });
}

#[test]
fn decode_response_maps_other_failures_with_optional_message() {
    let err = decode_response::<AuthEnvelope>(400, r#"{"message":"Invalid credentials"}"#).unwrap_err();
    assert_eq!(err, ApiError::Rejected { status: 400, message: Some("Invalid credentials".to_owned()) });

    let err = decode_response::<AuthEnvelope>(502, "<html>Bad Gateway</html>").unwrap_err();
    assert_eq!(err, ApiError::Rejected { status: 502, message: None });
}

#[test]
fn decode_response_reports_shape_mismatch() {
    let err = decode_response::<EventList>(200, "not json").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn check_status_ignores_success_body() {
    assert_eq!(check_status(204, ""), Ok(()));
    assert!(check_status(500, "").is_err());
}

#[test]
fn accept_envelope_refuses_unsuccessful_reply() {
    let env = AuthEnvelope { success: false, message: Some("Invalid code".to_owned()), user: None };
    assert_eq!(accept_envelope(env), Err(ApiError::Refused { message: Some("Invalid code".to_owned()) }));

    let ok = AuthEnvelope { success: true, ..AuthEnvelope::default() };
    assert!(accept_envelope(ok).is_ok());
}

// =============================================================
// Server-side behaviour
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn gateway_is_unavailable_outside_browser() {
    let gateway = HttpGateway::default();
    let result = futures::executor::block_on(gateway.check_auth());
    assert_eq!(result, Err(ApiError::Unavailable));
    let result = futures::executor::block_on(gateway.logout());
    assert_eq!(result, Err(ApiError::Unavailable));
}
