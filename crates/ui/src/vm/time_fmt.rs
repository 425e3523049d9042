use chrono::{DateTime, Utc};

#[must_use]
pub fn format_fetched_at(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M UTC").to_string()
}
