use essayist::utils::datetime::{format_display_date, parse_timestamp, DISPLAY_DATE_FORMAT};

#[test]
fn test_format_rfc3339_timestamp() {
    assert_eq!(
        format_display_date("2024-03-03T12:00:00Z", DISPLAY_DATE_FORMAT),
        "March 3, 2024"
    );
}

#[test]
fn test_format_bare_date() {
    assert_eq!(
        format_display_date("2023-12-25", DISPLAY_DATE_FORMAT),
        "December 25, 2023"
    );
}

#[test]
fn test_format_bare_datetime_without_offset() {
    assert_eq!(
        format_display_date("2024-07-04T09:30:00", DISPLAY_DATE_FORMAT),
        "July 4, 2024"
    );
}

#[test]
fn test_day_is_not_zero_padded() {
    assert_eq!(
        format_display_date("2024-01-05T00:00:00Z", DISPLAY_DATE_FORMAT),
        "January 5, 2024"
    );
}

#[test]
fn test_offset_timestamps_normalize_to_utc() {
    // 23:30 on March 3rd at -05:00 is already March 4th in UTC
    assert_eq!(
        format_display_date("2024-03-03T23:30:00-05:00", DISPLAY_DATE_FORMAT),
        "March 4, 2024"
    );
}

#[test]
fn test_unparseable_input_falls_back_to_raw() {
    assert_eq!(format_display_date("whenever", DISPLAY_DATE_FORMAT), "whenever");
    assert_eq!(format_display_date("", DISPLAY_DATE_FORMAT), "");
}

#[test]
fn test_parse_timestamp_ordering() {
    let newer = parse_timestamp("2024-03-03T12:00:00Z").unwrap();
    let older = parse_timestamp("2024-03-03").unwrap();
    assert!(newer > older);
}

#[test]
fn test_parse_timestamp_rejects_garbage() {
    assert!(parse_timestamp("not a date").is_none());
    assert!(parse_timestamp("2024-13-45").is_none());
}
