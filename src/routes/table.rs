//! Data-driven route declarations.
//!
//! DESIGN
//! ======
//! Every route states its access requirement once, here. The guard consumes
//! the requirement as an opaque pair of flags; nothing else in the crate
//! decides who may open a view.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use super::paths;

/// Access requirement declared by a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteAccess {
    pub requires_auth: bool,
    pub requires_admin: bool,
}

impl RouteAccess {
    pub const PUBLIC: Self = Self { requires_auth: false, requires_admin: false };
    pub const AUTHENTICATED: Self = Self { requires_auth: true, requires_admin: false };
    pub const ADMIN: Self = Self { requires_auth: true, requires_admin: true };

    /// Whether the guard has anything to check.
    pub fn is_gated(self) -> bool {
        self.requires_auth || self.requires_admin
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path pattern; `:name` segments match any single segment.
    pub pattern: &'static str,
    pub access: RouteAccess,
}

const fn entry(pattern: &'static str, access: RouteAccess) -> RouteEntry {
    RouteEntry { pattern, access }
}

pub const ROUTE_TABLE: &[RouteEntry] = &[
    entry(paths::HOME, RouteAccess::PUBLIC),
    entry(paths::EVENTS, RouteAccess::PUBLIC),
    entry(paths::EVENT_DETAIL, RouteAccess::PUBLIC),
    entry(paths::LOGIN, RouteAccess::PUBLIC),
    entry(paths::REGISTER, RouteAccess::PUBLIC),
    entry(paths::VERIFY_EMAIL, RouteAccess::PUBLIC),
    entry(paths::NOT_FOUND, RouteAccess::PUBLIC),
    entry(paths::STUDENT_DASHBOARD, RouteAccess::AUTHENTICATED),
    entry(paths::STUDENT_PROFILE, RouteAccess::AUTHENTICATED),
    entry(paths::STUDENT_MY_BOOKINGS, RouteAccess::AUTHENTICATED),
    entry(paths::ADMIN_DASHBOARD, RouteAccess::ADMIN),
    entry(paths::ADMIN_USERS, RouteAccess::ADMIN),
    entry(paths::ADMIN_EVENT_REGISTRATIONS, RouteAccess::ADMIN),
];

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Whether a concrete pathname matches a pattern.
pub fn matches(pattern: &str, pathname: &str) -> bool {
    let mut pat = segments(pattern);
    let mut path = segments(pathname);
    loop {
        match (pat.next(), path.next()) {
            (None, None) => return true,
            (Some(p), Some(s)) if p.starts_with(':') || p == s => {}
            _ => return false,
        }
    }
}

/// Table entry for a pathname (query and fragment ignored).
pub fn lookup(pathname: &str) -> Option<&'static RouteEntry> {
    let pathname = pathname.split(['?', '#']).next().unwrap_or_default();
    ROUTE_TABLE.iter().find(|e| matches(e.pattern, pathname))
}

/// Undeclared paths under a gated prefix inherit the prefix's access.
const NAMESPACES: &[(&str, RouteAccess)] = &[("admin", RouteAccess::ADMIN), ("student", RouteAccess::AUTHENTICATED)];

/// Access requirement for a pathname.
///
/// Declared routes use their table entry. Undeclared paths under `/admin`
/// or `/student` take that namespace's access; anything else is public so
/// the router's not-found view can render.
pub fn access_for(pathname: &str) -> RouteAccess {
    if let Some(entry) = lookup(pathname) {
        return entry.access;
    }
    let pathname = pathname.split(['?', '#']).next().unwrap_or_default();
    let first = segments(pathname).next().unwrap_or_default();
    NAMESPACES.iter().find(|(prefix, _)| *prefix == first).map_or(RouteAccess::PUBLIC, |(_, access)| *access)
}
