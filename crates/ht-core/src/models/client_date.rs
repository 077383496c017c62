use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses the date shapes the appointment and prescription APIs exchange.
///
/// Accepts RFC 3339 (converted to its naive UTC time), the HTML
/// `datetime-local` shape with or without seconds, and a bare date
/// (midnight). Returns `None` for anything else.
pub fn parse_client_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_utc());
    }

    for format in DATETIME_LOCAL_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
