//! Relative time formatting
//!
//! Turns an instant into a coarse age such as "3 minutes ago".

use chrono::{DateTime, Utc};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Format the age of `instant` as seen from `now`
///
/// Buckets truncate, they never round: 119 seconds is "1 minute ago".
/// Instants in the future read as "Just now".
pub fn format_relative_time(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - instant).num_seconds();

    if elapsed < SECS_PER_MINUTE {
        "Just now".to_string()
    } else if elapsed < SECS_PER_HOUR {
        ago(elapsed / SECS_PER_MINUTE, "minute")
    } else if elapsed < SECS_PER_DAY {
        ago(elapsed / SECS_PER_HOUR, "hour")
    } else {
        ago(elapsed / SECS_PER_DAY, "day")
    }
}

fn ago(count: i64, unit: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {unit}{plural} ago")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn age(seconds: i64) -> String {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        format_relative_time(now - Duration::seconds(seconds), now)
    }

    #[test]
    fn test_just_now() {
        assert_eq!(age(0), "Just now");
        assert_eq!(age(59), "Just now");
    }

    #[test]
    fn test_future_instant_is_just_now() {
        assert_eq!(age(-3600), "Just now");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(age(60), "1 minute ago");
        assert_eq!(age(119), "1 minute ago");
        assert_eq!(age(120), "2 minutes ago");
        assert_eq!(age(3599), "59 minutes ago");
    }

    #[test]
    fn test_hours() {
        assert_eq!(age(3600), "1 hour ago");
        assert_eq!(age(7199), "1 hour ago");
        assert_eq!(age(7200), "2 hours ago");
        assert_eq!(age(86399), "23 hours ago");
    }

    #[test]
    fn test_days() {
        assert_eq!(age(86400), "1 day ago");
        assert_eq!(age(172799), "1 day ago");
        assert_eq!(age(172800), "2 days ago");
        assert_eq!(age(30 * 86400), "30 days ago");
    }

    #[test]
    fn test_sub_second_precision_truncates() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let instant = now - Duration::milliseconds(59_999);
        assert_eq!(format_relative_time(instant, now), "Just now");
    }
}
