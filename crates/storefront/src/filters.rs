//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Formats an article date for display, e.g. "March 20, 2024".
///
/// Usage in templates: `{{ post.date|long_date }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn long_date(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_long_date(&value.to_string()))
}

fn format_long_date(raw: &str) -> String {
    use chrono::NaiveDate;
    raw.parse::<NaiveDate>()
        .map_or_else(|_| raw.to_string(), |d| d.format("%B %-d, %Y").to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_long_date_formats_iso_dates() {
        assert_eq!(format_long_date("2024-03-20"), "March 20, 2024");
    }

    #[test]
    fn test_long_date_passes_through_garbage() {
        assert_eq!(format_long_date("soon"), "soon");
    }
}
