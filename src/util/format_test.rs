use super::*;

#[test]
fn datetime_drops_seconds_and_zone() {
    assert_eq!(display_datetime(Some("2025-01-15T10:00:00.000Z")), "2025-01-15 10:00");
    assert_eq!(display_datetime(Some("2025-01-15")), "2025-01-15");
    assert_eq!(display_datetime(None), "—");
    assert_eq!(display_datetime(Some("  ")), "—");
}

#[test]
fn date_keeps_date_part() {
    assert_eq!(display_date(Some("2024-02-15T00:00:00")), "2024-02-15");
    assert_eq!(display_date(None), "—");
}

#[test]
fn price_label_treats_zero_as_free() {
    assert_eq!(price_label(None), "Free");
    assert_eq!(price_label(Some(0.0)), "Free");
    assert_eq!(price_label(Some(250.0)), "₹250");
}

#[test]
fn seats_label_variants() {
    assert_eq!(seats_label(Some(12), Some(100)), "12/100 seats left");
    assert_eq!(seats_label(Some(5), None), "5 seats available");
    assert_eq!(seats_label(None, Some(100)), "—");
}
