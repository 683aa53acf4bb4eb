use chrono::{DateTime, Datelike, Utc};

/// Format an item's creation date for list rows:
/// - "just now" / "3h ago" within the last day (fresh ingests)
/// - "Nov 2" for older dates in the current year
/// - "Nov 2, 2024" for earlier years
pub fn format_item_date(timestamp: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*timestamp);

    if duration.num_seconds() >= 0 && duration.num_hours() < 24 {
        let hours = duration.num_hours();
        if hours > 0 {
            return format!("{}h ago", hours);
        }
        let minutes = duration.num_minutes();
        if minutes > 0 {
            return format!("{}m ago", minutes);
        }
        return "just now".to_string();
    }

    if timestamp.year() == now.year() {
        timestamp.format("%b %-d").to_string()
    } else {
        timestamp.format("%b %-d, %Y").to_string()
    }
}
