use super::*;

#[test]
fn static_paths_resolve_to_declared_access() {
    assert_eq!(access_for("/"), RouteAccess::PUBLIC);
    assert_eq!(access_for("/events"), RouteAccess::PUBLIC);
    assert_eq!(access_for("/student/dashboard"), RouteAccess::AUTHENTICATED);
    assert_eq!(access_for("/admin/users"), RouteAccess::ADMIN);
}

#[test]
fn param_segments_match_any_value() {
    assert_eq!(access_for("/events/65f1c2"), RouteAccess::PUBLIC);
    assert_eq!(access_for("/admin/events/65f1c2/registrations"), RouteAccess::ADMIN);
}

#[test]
fn trailing_slash_query_and_fragment_are_ignored() {
    assert_eq!(access_for("/student/profile/"), RouteAccess::AUTHENTICATED);
    assert_eq!(access_for("/student/my-bookings?page=2"), RouteAccess::AUTHENTICATED);
    assert_eq!(access_for("/admin/dashboard#stats"), RouteAccess::ADMIN);
}

#[test]
fn unknown_paths_outside_gated_namespaces_are_public() {
    assert!(lookup("/nope").is_none());
    assert_eq!(access_for("/nope"), RouteAccess::PUBLIC);
    assert_eq!(access_for("/events/1/extra"), RouteAccess::PUBLIC);
}

#[test]
fn unknown_paths_inside_gated_namespaces_fail_closed() {
    assert_eq!(access_for("/admin"), RouteAccess::ADMIN);
    assert_eq!(access_for("/admin/reports?year=2024"), RouteAccess::ADMIN);
    assert_eq!(access_for("/student/certificates"), RouteAccess::AUTHENTICATED);
    assert_eq!(access_for("/administrator"), RouteAccess::PUBLIC);
}

#[test]
fn declared_patterns_under_gated_namespaces_are_at_least_as_strict() {
    for entry in ROUTE_TABLE {
        let inherited = access_for(&format!("{}/__undeclared__", entry.pattern));
        if inherited.is_gated() {
            assert!(entry.access.is_gated(), "{} is public inside a gated namespace", entry.pattern);
        }
    }
}

#[test]
fn matches_requires_equal_segment_count() {
    assert!(matches("/events/:id", "/events/1"));
    assert!(!matches("/events/:id", "/events"));
    assert!(!matches("/events", "/events/1"));
}

#[test]
fn every_admin_route_also_requires_auth() {
    for entry in ROUTE_TABLE {
        if entry.access.requires_admin {
            assert!(entry.access.requires_auth, "{} requires admin but not auth", entry.pattern);
        }
    }
}

#[test]
fn patterns_are_unique() {
    for (i, a) in ROUTE_TABLE.iter().enumerate() {
        for b in &ROUTE_TABLE[i + 1..] {
            assert_ne!(a.pattern, b.pattern);
        }
    }
}
