//! Display formatting for backend values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MISSING: &str = "—";

/// Render an ISO-8601 timestamp as `YYYY-MM-DD HH:MM`, dropping seconds and zone.
pub fn display_datetime(iso: Option<&str>) -> String {
    let Some(iso) = iso.map(str::trim).filter(|s| !s.is_empty()) else {
        return MISSING.to_owned();
    };
    match iso.split_once('T') {
        Some((date, time)) => {
            let hm: String = time.chars().take(5).collect();
            if hm.len() == 5 { format!("{date} {hm}") } else { date.to_owned() }
        }
        None => iso.to_owned(),
    }
}

/// Render only the date part of an ISO-8601 timestamp.
pub fn display_date(iso: Option<&str>) -> String {
    match iso.map(str::trim).filter(|s| !s.is_empty()) {
        Some(iso) => iso.split('T').next().unwrap_or(iso).to_owned(),
        None => MISSING.to_owned(),
    }
}

/// "Free" for zero or missing prices, else a rupee amount.
pub fn price_label(price: Option<f64>) -> String {
    match price {
        Some(p) if p > 0.0 => format!("₹{p:.0}"),
        _ => "Free".to_owned(),
    }
}

/// `available/total` seat summary.
pub fn seats_label(available: Option<u32>, total: Option<u32>) -> String {
    match (available, total) {
        (Some(a), Some(t)) => format!("{a}/{t} seats left"),
        (Some(a), None) => format!("{a} seats available"),
        _ => MISSING.to_owned(),
    }
}
