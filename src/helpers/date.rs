//! Date and reading-time helpers

use chrono::NaiveDate;

/// Parse a display date such as "May 15, 2024"
pub fn parse_display_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%B %d, %Y").ok()
}

/// Machine-readable form of a display date, for `<time datetime="…">`.
/// Returns `None` when the date is free text.
///
/// # Examples
/// ```ignore
/// date_xml("May 15, 2024") // -> Some("2024-05-15")
/// ```
pub fn date_xml(date: &str) -> Option<String> {
    parse_display_date(date).map(|d| d.format("%Y-%m-%d").to_string())
}

/// Reading time label for a word count, at least one minute
///
/// # Examples
/// ```ignore
/// reading_time(1600, 200) // -> "8 min read"
/// ```
pub fn reading_time(word_count: usize, words_per_minute: usize) -> String {
    let wpm = words_per_minute.max(1);
    let minutes = word_count.div_ceil(wpm).max(1);
    format!("{} min read", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_xml() {
        assert_eq!(date_xml("May 15, 2024"), Some("2024-05-15".to_string()));
        assert_eq!(date_xml("May 5, 2024"), Some("2024-05-05".to_string()));
        assert_eq!(date_xml("yesterday"), None);
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time(1600, 200), "8 min read");
        assert_eq!(reading_time(1601, 200), "9 min read");
        assert_eq!(reading_time(0, 200), "1 min read");
        assert_eq!(reading_time(10, 0), "10 min read");
    }
}
