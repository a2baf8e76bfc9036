use chrono::{DateTime, Utc};

/// `dd/MM/yyyy`, as shown next to each roadmap day.
#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%d/%m/%Y").to_string()
}
