use super::*;

#[test]
fn requested_location_without_query_is_pathname() {
    assert_eq!(requested_location("/student/profile", ""), "/student/profile");
    assert_eq!(requested_location("/student/profile", "?"), "/student/profile");
}

#[test]
fn requested_location_appends_query_once() {
    assert_eq!(requested_location("/events", "?page=2"), "/events?page=2");
    assert_eq!(requested_location("/events", "page=2"), "/events?page=2");
}
