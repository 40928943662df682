use super::*;

fn registration(id: &str, start: &str, status: &str) -> Registration {
    serde_json::from_value(serde_json::json!({
        "_id": id,
        "status": status,
        "event": { "_id": format!("e-{id}"), "title": format!("Event {id}"), "startDate": start }
    }))
    .unwrap()
}

#[test]
fn upcoming_events_sorted_by_start() {
    let list = vec![
        registration("b", "2025-03-10T10:00:00Z", "REGISTERED"),
        registration("a", "2025-02-01T09:00:00Z", "REGISTERED"),
    ];
    let titles: Vec<String> = upcoming_events(list, 3).into_iter().map(|e| e.title).collect();
    assert_eq!(titles, ["Event a", "Event b"]);
}

#[test]
fn upcoming_events_skip_cancelled_and_unpopulated() {
    let bare: Registration = serde_json::from_value(serde_json::json!({ "_id": "x", "event": "e-x" })).unwrap();
    let list = vec![registration("a", "2025-02-01T09:00:00Z", "CANCELLED"), bare];
    assert!(upcoming_events(list, 3).is_empty());
}

#[test]
fn upcoming_events_respects_limit() {
    let list = (0..5).map(|i| registration(&i.to_string(), &format!("2025-01-0{}T00:00:00Z", i + 1), "REGISTERED"));
    assert_eq!(upcoming_events(list.collect(), 3).len(), 3);
}
