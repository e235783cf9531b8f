// =============================================================================
// FloodWatch Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. Time Utilities
// 2. Format Utilities
// 3. Tests
// =============================================================================

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::reports::GeoPoint;

// -----------------------------------------------------------------------------
// 1. Time Utilities
// -----------------------------------------------------------------------------

const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parse a stored timestamp. Zone-less values are read in the browser's zone.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    parse_timestamp_in(raw, &Local)
}

/// Parse a stored timestamp, reading zone-less values in `zone`.
pub fn parse_timestamp_in<Tz: TimeZone>(raw: &str, zone: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()?
                .and_hms_opt(0, 0, 0)
        })?;
    // Skipped wall-clock times (DST gaps) have no reading; ambiguous ones take the earlier.
    zone.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// "5 minutes ago" / "in 2 days", rounding the way dashboards usually do.
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let millis = now.signed_duration_since(then).num_milliseconds();
    let phrase = relative_phrase(millis.unsigned_abs() as f64 / 1000.0);
    if millis < 0 {
        format!("in {}", phrase)
    } else {
        format!("{} ago", phrase)
    }
}

fn relative_phrase(secs: f64) -> String {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 60.0 * MINUTE;
    const DAY: f64 = 24.0 * HOUR;
    const MONTH: f64 = 30.4375 * DAY;
    const YEAR: f64 = 365.25 * DAY;

    let seconds = secs.round();
    if seconds <= 44.0 {
        return "a few seconds".to_string();
    }
    if seconds <= 89.0 {
        return "a minute".to_string();
    }
    let minutes = (secs / MINUTE).round();
    if minutes <= 44.0 {
        return format!("{} minutes", minutes as u64);
    }
    if minutes <= 89.0 {
        return "an hour".to_string();
    }
    let hours = (secs / HOUR).round();
    if hours <= 21.0 {
        return format!("{} hours", hours as u64);
    }
    if hours <= 35.0 {
        return "a day".to_string();
    }
    let days = (secs / DAY).round();
    if days <= 25.0 {
        return format!("{} days", days as u64);
    }
    if days <= 45.0 {
        return "a month".to_string();
    }
    let months = (secs / MONTH).round();
    if months <= 10.0 {
        return format!("{} months", months as u64);
    }
    if months <= 17.0 {
        return "a year".to_string();
    }
    format!("{} years", (secs / YEAR).round() as u64)
}

/// Relative time for a report's `createdAt`, or `-` when absent or unreadable.
pub fn format_created_at(created_at: Option<&str>, now: DateTime<Utc>) -> String {
    created_at
        .and_then(parse_timestamp)
        .map(|then| format_relative_time(then, now))
        .unwrap_or_else(|| "-".to_string())
}

// -----------------------------------------------------------------------------
// 2. Format Utilities
// -----------------------------------------------------------------------------

pub fn display_username(username: Option<&str>) -> &str {
    username.filter(|name| !name.is_empty()).unwrap_or("Anonymous")
}

pub fn display_text(text: Option<&str>) -> &str {
    text.filter(|value| !value.is_empty()).unwrap_or("-")
}

/// `lat, lng` to four decimals.
pub fn format_location(location: Option<GeoPoint>) -> String {
    match location {
        Some(point) => format!("{:.4}, {:.4}", point.latitude, point.longitude),
        None => "-".to_string(),
    }
}

// -----------------------------------------------------------------------------
// 3. Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn ago(delta: Duration) -> String {
        format_relative_time(now() - delta, now())
    }

    #[test]
    fn test_relative_time_thresholds() {
        assert_eq!(ago(Duration::seconds(10)), "a few seconds ago");
        assert_eq!(ago(Duration::seconds(60)), "a minute ago");
        assert_eq!(ago(Duration::seconds(90)), "2 minutes ago");
        assert_eq!(ago(Duration::minutes(5)), "5 minutes ago");
        assert_eq!(ago(Duration::minutes(60)), "an hour ago");
        assert_eq!(ago(Duration::hours(3)), "3 hours ago");
        assert_eq!(ago(Duration::hours(30)), "a day ago");
        assert_eq!(ago(Duration::days(3)), "3 days ago");
        assert_eq!(ago(Duration::days(30)), "a month ago");
        assert_eq!(ago(Duration::days(90)), "3 months ago");
        assert_eq!(ago(Duration::days(400)), "a year ago");
        assert_eq!(ago(Duration::days(800)), "2 years ago");
    }

    #[test]
    fn test_future_timestamps() {
        assert_eq!(format_relative_time(now() + Duration::minutes(5), now()), "in 5 minutes");
    }

    #[test]
    fn test_parse_timestamp_variants() {
        let expected = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-06-01T10:00:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-06-01T15:30:00+05:30"), Some(expected));
        assert_eq!(parse_timestamp("2024-06-01T10:00:00.000000Z"), Some(expected));
        assert_eq!(parse_timestamp_in("2024-06-01T10:00:00", &Utc), Some(expected));
        assert_eq!(parse_timestamp_in("2024-06-01 10:00:00", &Utc), Some(expected));
        assert_eq!(
            parse_timestamp_in("2024-06-01", &Utc),
            Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn test_zone_less_timestamps_use_local_zone() {
        let ist = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
        assert_eq!(parse_timestamp_in("2024-06-01T15:30:00", &ist), Some(expected));
        assert_eq!(parse_timestamp_in("2024-06-01 15:30:00", &ist), Some(expected));
        assert_eq!(
            parse_timestamp_in("2024-06-01", &ist),
            Some(Utc.with_ymd_and_hms(2024, 5, 31, 18, 30, 0).unwrap())
        );
        // An explicit offset wins over the reading zone.
        assert_eq!(parse_timestamp_in("2024-06-01T10:00:00Z", &ist), Some(expected));
    }

    #[test]
    fn test_format_created_at() {
        assert_eq!(format_created_at(Some("2024-06-01T10:00:00Z"), now()), "2 hours ago");
        assert_eq!(format_created_at(None, now()), "-");
        assert_eq!(format_created_at(Some("not a date"), now()), "-");
    }

    #[test]
    fn test_display_fallbacks() {
        assert_eq!(display_username(Some("alice")), "alice");
        assert_eq!(display_username(Some("")), "Anonymous");
        assert_eq!(display_username(None), "Anonymous");
        assert_eq!(display_text(Some("water rising")), "water rising");
        assert_eq!(display_text(None), "-");
    }

    #[test]
    fn test_format_location() {
        assert_eq!(format_location(Some(GeoPoint::new(8.52413, 76.93661))), "8.5241, 76.9366");
        assert_eq!(format_location(None), "-");
    }
}
