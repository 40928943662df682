use super::*;

fn event(id: &str, status: &str) -> Event {
    serde_json::from_value(serde_json::json!({ "_id": id, "title": id, "status": status })).unwrap()
}

#[test]
fn parse_status_matches_known_values() {
    assert_eq!(parse_status("PUBLISHED"), Some(EventStatus::Published));
    assert_eq!(parse_status(" cancelled "), Some(EventStatus::Cancelled));
    assert_eq!(parse_status("ARCHIVED"), None);
    assert_eq!(parse_status(""), None);
}

#[test]
fn status_counts_cover_every_status() {
    let events = [event("a", "DRAFT"), event("b", "PUBLISHED"), event("c", "PUBLISHED")];
    let counts = status_counts(&events);
    assert_eq!(
        counts,
        vec![
            (EventStatus::Draft, 1),
            (EventStatus::Published, 2),
            (EventStatus::Cancelled, 0),
            (EventStatus::Completed, 0),
        ]
    );
}
