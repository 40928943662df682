//! Compile-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no process environment, so values are baked in at
//! build time through `option_env!` and fall back to same-origin defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Display name used in the header and document title.
pub const APP_NAME: &str = "College Event Management";

/// Base URL prepended to every API path.
///
/// Set `CAMPUS_API_BASE` at build time to point the bundle at a different
/// origin. The default keeps API calls same-origin behind the host proxy.
pub const API_BASE: &str = match option_env!("CAMPUS_API_BASE") {
    Some(base) => base,
    None => "/api",
};

/// `localStorage` key for the dismissed verification reminder.
pub const BANNER_DISMISSED_KEY: &str = "verificationBannerDismissed";

/// Join an API base and an endpoint path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base.to_owned();
    }
    format!("{base}/{path}")
}
