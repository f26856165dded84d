/// Display formatting for gallery captions
use chrono::NaiveDate;

/// Format a date the way `es-ES` short dates read: day/month/year
/// with no zero padding (16/8/2025). The record itself is untouched.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}

/// One-based position counter shown under the enlarged image
pub fn position_label(index: usize, len: usize) -> String {
    format!("{} / {}", index + 1, len)
}
