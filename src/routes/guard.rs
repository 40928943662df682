//! Route guard: decides per navigation whether a view may render.
//!
//! The decision is a pure function of the session snapshot, the route's
//! declared access and the requested location. The gate component
//! re-evaluates it on every location change.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::landing;
use super::paths;
use super::table::RouteAccess;
use crate::state::session::SessionState;

/// Outcome of one guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Identity check still in flight; show a neutral indicator.
    Loading,
    /// Signed out; go to login and come back to `from` afterwards.
    RedirectToLogin { from: String },
    /// Signed in but not allowed here.
    Redirect { to: &'static str },
    Render,
}

impl GuardDecision {
    /// The navigation target for redirect decisions.
    pub fn target(&self) -> Option<String> {
        match self {
            Self::RedirectToLogin { from } => Some(landing::login_redirect(from)),
            Self::Redirect { to } => Some((*to).to_owned()),
            Self::Loading | Self::Render => None,
        }
    }
}

/// Evaluate the guard for `requested` (path plus query) under `access`.
///
/// Public routes render straight away, even while the session is pending.
/// For gated routes: pending shows loading, signed out redirects to login,
/// non-admins on admin routes go to the student landing.
pub fn evaluate(session: &SessionState, access: RouteAccess, requested: &str) -> GuardDecision {
    if !access.is_gated() {
        return GuardDecision::Render;
    }
    if !session.is_ready() {
        return GuardDecision::Loading;
    }
    let Some(identity) = session.identity() else {
        return GuardDecision::RedirectToLogin { from: requested.to_owned() };
    };
    if access.requires_admin && !identity.is_admin() {
        return GuardDecision::Redirect { to: paths::STUDENT_DASHBOARD };
    }
    GuardDecision::Render
}

/// Home view decision: signed-in users are sent to their landing view.
pub fn evaluate_home(session: &SessionState) -> GuardDecision {
    if !session.is_ready() {
        return GuardDecision::Loading;
    }
    match session.identity() {
        Some(identity) => GuardDecision::Redirect { to: landing::landing_route(Some(identity)) },
        None => GuardDecision::Render,
    }
}
