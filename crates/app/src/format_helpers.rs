/// Shared formatting utilities for the dashboard views.
use chrono::{DateTime, Utc};
use shared_types::format_time_ago;

/// Age of a row as of render time, e.g. "5 min ago".
pub fn age_label(created_at: DateTime<Utc>) -> String {
    format_time_ago(created_at, Utc::now())
}

/// Confidence score as shown next to a verification, e.g. "Confidence: 97.5%".
///
/// Whole numbers drop the trailing ".0".
pub fn confidence_label(score: f64) -> String {
    format!("Confidence: {}%", trim_decimal(score))
}

/// Verification rate for a stat card, e.g. "66.67%".
pub fn rate_label(rate: f64) -> String {
    format!("{}%", trim_decimal(rate))
}

fn trim_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn confidence_keeps_given_precision() {
        assert_eq!(confidence_label(97.5), "Confidence: 97.5%");
        assert_eq!(confidence_label(91.25), "Confidence: 91.25%");
    }

    #[test]
    fn whole_numbers_drop_the_fraction() {
        assert_eq!(confidence_label(99.0), "Confidence: 99%");
        assert_eq!(rate_label(100.0), "100%");
        assert_eq!(rate_label(0.0), "0%");
    }

    #[test]
    fn rate_shows_two_decimals_when_present() {
        assert_eq!(rate_label(66.67), "66.67%");
    }

    #[test]
    fn fresh_rows_read_as_just_now() {
        assert_eq!(age_label(Utc::now()), "Just now");
    }
}
