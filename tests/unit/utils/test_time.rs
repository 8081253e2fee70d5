use chrono::{Datelike, TimeZone, Utc};
use v20_client::presentation::primitives::AcceptDatetimeFormat;
use v20_client::utils::time::{format_time, parse_time};

#[test]
fn test_parse_rfc3339_with_offset() {
    let t = parse_time("2024-01-02T03:04:05+01:00").unwrap();
    assert_eq!(t, Utc.with_ymd_and_hms(2024, 1, 2, 2, 4, 5).unwrap());
}

#[test]
fn test_parse_unix_without_fraction() {
    let t = parse_time("1704164645").unwrap();
    assert_eq!(t.year(), 2024);
}

#[test]
fn test_format_unix_pads_nanos() {
    let t = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(
        format_time(&t, AcceptDatetimeFormat::Unix),
        "1704164645.000000000"
    );
    assert_eq!(
        format_time(&t, AcceptDatetimeFormat::Rfc3339),
        "2024-01-02T03:04:05.000000000Z"
    );
}
