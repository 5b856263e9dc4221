use chrono::{DateTime, NaiveDate, NaiveDateTime};
use optionally::Maybe;

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Parses a date or date-time. Accepts RFC 3339, ISO `YYYY-MM-DD[THH:MM:SS]`
/// and US `MM/DD/YYYY[ HH:MM[:SS]]`. A bare date is taken as midnight.
pub fn to_date_time(input: &str) -> Maybe<NaiveDateTime> {
    let input = input.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Maybe::Some(parsed.naive_local());
    }
    let parsed = DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        });
    if parsed.is_none() {
        tracing::trace!(input, "not a date");
    }
    parsed.into()
}

#[cfg(test)]
fn ymd_hms(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(hh, mm, ss))
        .unwrap()
}

#[test]
fn test_to_date_time() {
    assert_eq!(to_date_time("12/12/2012"), Maybe::some(ymd_hms(2012, 12, 12, 0, 0, 0)));
    assert_eq!(to_date_time("2012-12-12"), Maybe::some(ymd_hms(2012, 12, 12, 0, 0, 0)));
    assert_eq!(
        to_date_time("2012-12-12T08:30:05"),
        Maybe::some(ymd_hms(2012, 12, 12, 8, 30, 5))
    );
    assert_eq!(
        to_date_time("2012-12-12T08:30:05+02:00"),
        Maybe::some(ymd_hms(2012, 12, 12, 8, 30, 5))
    );
    assert_eq!(to_date_time("1/2/2020 13:45"), Maybe::some(ymd_hms(2020, 1, 2, 13, 45, 0)));
}

#[test]
fn test_to_date_time_rejects() {
    assert_eq!(to_date_time("kumquats"), Maybe::none());
    assert_eq!(to_date_time("2012-13-40"), Maybe::none());
    assert_eq!(to_date_time(""), Maybe::none());
}
