use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Calendar rendering used in every response, e.g. `Mon Jan 01 2024`.
pub const CALENDAR_FORMAT: &str = "%a %b %d %Y";

pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(CALENDAR_FORMAT).to_string()
}

/// Parse a calendar date from any of the accepted input shapes:
///
/// - `2024-01-01`
/// - `Mon Jan 01 2024`, so dates from responses can be sent back as-is
/// - `2024-01-01T10:00:00`, a timestamp without offset (fractional seconds allowed)
/// - an RFC 3339 timestamp, normalized to UTC before the date is taken
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(input, CALENDAR_FORMAT))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })
}
