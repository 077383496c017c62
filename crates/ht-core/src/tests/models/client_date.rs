use crate::parse_client_datetime;

use chrono::{NaiveDate, Timelike};

#[test]
fn given_datetime_local_without_seconds_when_parse_then_ok() {
    let parsed = parse_client_datetime("2024-07-15T09:30").unwrap();

    assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
    assert_eq!(parsed.hour(), 9);
    assert_eq!(parsed.minute(), 30);
}

#[test]
fn given_rfc3339_with_offset_when_parse_then_converted_to_utc() {
    let parsed = parse_client_datetime("2024-07-15T09:30:00+02:00").unwrap();

    assert_eq!(parsed.hour(), 7);
}

#[test]
fn given_bare_date_when_parse_then_midnight() {
    let parsed = parse_client_datetime("2024-12-31").unwrap();

    assert_eq!(parsed.hour(), 0);
    assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
}

#[test]
fn given_garbage_when_parse_then_none() {
    assert!(parse_client_datetime("next tuesday").is_none());
    assert!(parse_client_datetime("").is_none());
}
