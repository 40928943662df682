use super::*;

#[test]
fn join_url_inserts_single_separator() {
    assert_eq!(join_url("/api", "user/login"), "/api/user/login");
    assert_eq!(join_url("/api/", "/user/login"), "/api/user/login");
}

#[test]
fn join_url_keeps_absolute_origin() {
    assert_eq!(
        join_url("https://events.example.edu/api", "/events/42"),
        "https://events.example.edu/api/events/42"
    );
}

#[test]
fn join_url_empty_path_returns_base() {
    assert_eq!(join_url("/api/", ""), "/api");
}
