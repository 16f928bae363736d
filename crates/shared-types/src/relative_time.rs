use chrono::{DateTime, Utc};

const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: i64 = 24;

/// Coarse age of `then` relative to `now`, e.g. "5 min ago" or "2 days ago".
///
/// Every bucket floors. Timestamps at or after `now` read as "Just now".
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - then).num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < MINUTES_PER_HOUR {
        return format!("{minutes} min ago");
    }

    let hours = minutes / MINUTES_PER_HOUR;
    if hours < HOURS_PER_DAY {
        return format!("{hours} {} ago", plural(hours, "hour"));
    }

    let days = hours / HOURS_PER_DAY;
    format!("{days} {} ago", plural(days, "day"))
}

fn plural(n: i64, unit: &str) -> String {
    if n > 1 {
        format!("{unit}s")
    } else {
        unit.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 14, 9, 30, 0).unwrap()
    }

    fn ago(d: Duration) -> String {
        format_time_ago(now() - d, now())
    }

    #[test]
    fn reference_points() {
        assert_eq!(ago(Duration::seconds(30)), "Just now");
        assert_eq!(ago(Duration::minutes(5)), "5 min ago");
        assert_eq!(ago(Duration::hours(3)), "3 hours ago");
        assert_eq!(ago(Duration::days(2)), "2 days ago");
    }

    #[test]
    fn sixty_minutes_lands_in_hour_bucket() {
        assert_eq!(ago(Duration::minutes(60)), "1 hour ago");
        assert_eq!(ago(Duration::minutes(59)), "59 min ago");
    }

    #[test]
    fn singular_units() {
        assert_eq!(ago(Duration::minutes(1)), "1 min ago");
        assert_eq!(ago(Duration::hours(24)), "1 day ago");
    }

    #[test]
    fn buckets_floor_instead_of_rounding() {
        assert_eq!(ago(Duration::seconds(119)), "1 min ago");
        assert_eq!(ago(Duration::minutes(119)), "1 hour ago");
        assert_eq!(ago(Duration::hours(47)), "1 day ago");
        assert_eq!(ago(Duration::seconds(59)), "Just now");
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        assert_eq!(format_time_ago(now() + Duration::minutes(10), now()), "Just now");
    }

    #[test]
    fn long_spans_stay_in_days() {
        assert_eq!(ago(Duration::days(400)), "400 days ago");
    }
}
