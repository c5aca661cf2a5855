use super::*;

#[test]
fn parses_rfc3339_with_offset() {
    let ts = parse_timestamp("2025-03-01T14:05:09+03:00").unwrap();
    assert_eq!(ts.hour(), 14);
    assert_eq!(ts.offset().whole_hours(), 3);
}

#[test]
fn parses_naive_timestamp_as_utc() {
    let ts = parse_timestamp("2025-03-01T14:05:09.123456").unwrap();
    assert!(ts.offset().is_utc());
    assert_eq!(ts.minute(), 5);
}

#[test]
fn format_timestamp_renders_minutes() {
    assert_eq!(format_timestamp("2025-03-01T14:05:09Z"), "2025-03-01 14:05");
}

#[test]
fn format_date_renders_day() {
    assert_eq!(format_date("2025-03-01T14:05:09"), "2025-03-01");
}

#[test]
fn unparseable_values_pass_through() {
    assert_eq!(format_timestamp("yesterday"), "yesterday");
    assert_eq!(format_date(""), "");
    assert!(parse_timestamp("").is_none());
}
