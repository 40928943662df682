//! Role-based landing and post-auth redirect policy.
//!
//! Every "where should this user go" decision lives here so the header logo,
//! the home view and the auth forms cannot drift apart.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use super::paths;
use super::table;
use crate::net::types::Identity;

/// Query key carrying the path a signed-out user originally asked for.
pub const FROM_PARAM: &str = "from";

/// Default view for an identity: admin dashboard, student dashboard, or home.
pub fn landing_route(identity: Option<&Identity>) -> &'static str {
    match identity {
        Some(i) if i.is_admin() => paths::ADMIN_DASHBOARD,
        Some(_) => paths::STUDENT_DASHBOARD,
        None => paths::HOME,
    }
}

/// Login URL that remembers where the user was headed.
pub fn login_redirect(from: &str) -> String {
    if from.is_empty() || from == paths::HOME {
        return paths::LOGIN.to_owned();
    }
    format!("{}?{FROM_PARAM}={}", paths::LOGIN, urlencoding::encode(from))
}

/// Accept a return path only if it stays inside the app and is not an auth view.
///
/// Whitespace and control characters are refused outright: URL parsers strip
/// tabs and newlines, which would turn `/\t/host` into `//host`.
pub fn safe_return_path(from: Option<&str>) -> Option<&str> {
    let from = from?.trim();
    if from.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return None;
    }
    if !from.starts_with('/') || from.starts_with("//") || from.contains('\\') {
        return None;
    }
    let pathname = from.split(['?', '#']).next().unwrap_or_default();
    if [paths::LOGIN, paths::REGISTER, paths::VERIFY_EMAIL].contains(&pathname.trim_end_matches('/')) {
        return None;
    }
    Some(from)
}

/// Where to go after a successful login.
///
/// Unverified users go to the verification view. Otherwise the remembered
/// path wins when it names a declared route the identity may open, else the
/// role landing.
pub fn post_login_route(identity: Option<&Identity>, from: Option<&str>) -> String {
    let Some(identity) = identity else {
        return paths::LOGIN.to_owned();
    };
    if !identity.verified {
        return paths::VERIFY_EMAIL.to_owned();
    }
    let declared = safe_return_path(from).and_then(|f| table::lookup(f).map(|e| (f, e.access)));
    if let Some((from, access)) = declared {
        if !access.requires_admin || identity.is_admin() {
            return from.to_owned();
        }
    }
    landing_route(Some(identity)).to_owned()
}

/// Where to go after signing up: always the verification view.
pub fn post_signup_route() -> &'static str {
    paths::VERIFY_EMAIL
}

/// Where to go after a successful email verification.
pub fn post_verify_route(identity: Option<&Identity>) -> &'static str {
    match identity {
        Some(_) => landing_route(identity),
        None => paths::LOGIN,
    }
}
