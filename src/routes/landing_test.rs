use super::*;
use crate::net::types::Role;

fn identity(role: Role, verified: bool) -> Identity {
    Identity {
        id: "u1".to_owned(),
        name: "Test User".to_owned(),
        email: "test@college.edu".to_owned(),
        role,
        verified,
    }
}

// =============================================================
// landing_route
// =============================================================

#[test]
fn landing_route_by_role() {
    assert_eq!(landing_route(Some(&identity(Role::Admin, true))), "/admin/dashboard");
    assert_eq!(landing_route(Some(&identity(Role::Student, true))), "/student/dashboard");
    assert_eq!(landing_route(None), "/");
}

#[test]
fn landing_route_ignores_verification() {
    assert_eq!(landing_route(Some(&identity(Role::Admin, false))), "/admin/dashboard");
}

// =============================================================
// login_redirect / safe_return_path
// =============================================================

#[test]
fn login_redirect_encodes_requested_path() {
    assert_eq!(login_redirect("/student/my-bookings"), "/login?from=%2Fstudent%2Fmy-bookings");
    assert_eq!(login_redirect("/events?page=2"), "/login?from=%2Fevents%3Fpage%3D2");
}

#[test]
fn login_redirect_skips_home() {
    assert_eq!(login_redirect("/"), "/login");
    assert_eq!(login_redirect(""), "/login");
}

#[test]
fn safe_return_path_rejects_external_and_auth_targets() {
    assert_eq!(safe_return_path(Some("/student/profile")), Some("/student/profile"));
    assert_eq!(safe_return_path(Some("https://evil.example")), None);
    assert_eq!(safe_return_path(Some("//evil.example")), None);
    assert_eq!(safe_return_path(Some("/\\evil.example")), None);
    assert_eq!(safe_return_path(Some("/\t/evil.example/phish")), None);
    assert_eq!(safe_return_path(Some("/\n/evil.example")), None);
    assert_eq!(safe_return_path(Some("/\r/evil.example")), None);
    assert_eq!(safe_return_path(Some("/events/a b")), None);
    assert_eq!(safe_return_path(Some("/login?from=%2F")), None);
    assert_eq!(safe_return_path(Some("/verify-email/")), None);
    assert_eq!(safe_return_path(None), None);
}

// =============================================================
// post-auth routing
// =============================================================

#[test]
fn unverified_login_goes_to_verification() {
    let user = identity(Role::Student, false);
    assert_eq!(post_login_route(Some(&user), Some("/student/profile")), "/verify-email");
}

#[test]
fn verified_login_returns_to_requested_path() {
    let user = identity(Role::Student, true);
    assert_eq!(post_login_route(Some(&user), Some("/student/my-bookings")), "/student/my-bookings");
}

#[test]
fn student_is_not_returned_to_admin_path() {
    let user = identity(Role::Student, true);
    assert_eq!(post_login_route(Some(&user), Some("/admin/users")), "/student/dashboard");
    let admin = identity(Role::Admin, true);
    assert_eq!(post_login_route(Some(&admin), Some("/admin/users")), "/admin/users");
}

#[test]
fn login_without_return_path_lands_by_role() {
    assert_eq!(post_login_route(Some(&identity(Role::Admin, true)), None), "/admin/dashboard");
    assert_eq!(post_login_route(Some(&identity(Role::Student, true)), Some("//x")), "/student/dashboard");
}

#[test]
fn login_ignores_return_path_with_control_characters() {
    let user = identity(Role::Student, true);
    assert_eq!(post_login_route(Some(&user), Some("/\t/evil.example/phish")), "/student/dashboard");
    assert_eq!(post_login_route(Some(&user), Some("/\n/evil.example")), "/student/dashboard");
}

#[test]
fn login_returns_only_to_declared_routes() {
    let user = identity(Role::Student, true);
    assert_eq!(post_login_route(Some(&user), Some("/events/e1?tab=info")), "/events/e1?tab=info");
    assert_eq!(post_login_route(Some(&user), Some("/not/a/route")), "/student/dashboard");
}

#[test]
fn login_without_identity_stays_on_login() {
    assert_eq!(post_login_route(None, Some("/student/profile")), "/login");
}

#[test]
fn signup_and_verify_routes() {
    assert_eq!(post_signup_route(), "/verify-email");
    assert_eq!(post_verify_route(Some(&identity(Role::Admin, true))), "/admin/dashboard");
    assert_eq!(post_verify_route(Some(&identity(Role::Student, true))), "/student/dashboard");
    assert_eq!(post_verify_route(None), "/login");
}
