//! Time utilities

use chrono::{DateTime, Duration, Utc};
use contesthub_common::ContestPhase;

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Parse a datetime string in ISO 8601 format
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// Format a duration as a human-readable string
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.num_seconds();

    if total_seconds < 0 {
        return "0s".to_string();
    }

    let days = total_seconds / 86400;
    let hours = (total_seconds % 86400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::new();

    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{}s", seconds));
    }

    parts.join(" ")
}

/// Human-readable countdown for a contest card.
///
/// Upcoming contests count down to the start, live contests to the end,
/// ended contests report how long ago the window closed.
pub fn countdown_label(
    phase: ContestPhase,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> String {
    match phase {
        ContestPhase::Upcoming => format!("Starts in {}", format_duration(start - now)),
        ContestPhase::Live => format!("Ends in {}", format_duration(end - now)),
        ContestPhase::Ended => format!("Ended {} ago", format_duration(now - end)),
    }
}

/// Calculate time until a future datetime
pub fn time_until(target: DateTime<Utc>, now: DateTime<Utc>) -> Option<Duration> {
    if target > now {
        Some(target - now)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::seconds(30)), "30s");
        assert_eq!(format_duration(Duration::seconds(90)), "1m 30s");
        assert_eq!(format_duration(Duration::seconds(3661)), "1h 1m 1s");
        assert_eq!(format_duration(Duration::seconds(86400)), "1d");
        assert_eq!(format_duration(Duration::seconds(-5)), "0s");
    }

    #[test]
    fn test_parse_datetime() {
        let dt = parse_datetime("2024-01-15T12:00:00Z");
        assert!(dt.is_some());

        let invalid = parse_datetime("not a date");
        assert!(invalid.is_none());
    }

    #[test]
    fn test_countdown_label() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 2, 12, 0, 0).unwrap();

        let before = start - Duration::hours(2);
        assert_eq!(
            countdown_label(ContestPhase::Upcoming, start, end, before),
            "Starts in 2h"
        );

        let during = start + Duration::hours(12);
        assert_eq!(
            countdown_label(ContestPhase::Live, start, end, during),
            "Ends in 12h"
        );

        let after = end + Duration::minutes(30);
        assert_eq!(
            countdown_label(ContestPhase::Ended, start, end, after),
            "Ended 30m ago"
        );
    }

    #[test]
    fn test_time_until() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(
            time_until(now + Duration::hours(1), now),
            Some(Duration::hours(1))
        );
        assert_eq!(time_until(now - Duration::hours(1), now), None);
    }
}
