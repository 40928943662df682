//! Dismissible email-verification reminder.
//!
//! The dismissed flag lives in `localStorage` under
//! [`config::BANNER_DISMISSED_KEY`] and is independent of the session; it
//! only decides whether the reminder is drawn.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use super::storage;
use crate::config;
use crate::net::types::Identity;

fn parse_flag(raw: Option<&str>) -> bool {
    raw.is_some_and(|v| v.trim() == "true")
}

/// Whether the reminder was dismissed in this browser.
pub fn is_dismissed() -> bool {
    parse_flag(storage::read_item(config::BANNER_DISMISSED_KEY).as_deref())
}

/// Persist the dismissal.
pub fn dismiss() {
    storage::write_item(config::BANNER_DISMISSED_KEY, "true");
}

/// Show the reminder to signed-in, unverified users who have not dismissed it.
pub fn should_show(identity: Option<&Identity>, dismissed: bool) -> bool {
    !dismissed && identity.is_some_and(|i| !i.verified)
}
