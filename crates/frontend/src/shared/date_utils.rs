/// Utilities for date and time formatting
use super::config::DisplayConfig;
use chrono::{DateTime, Utc};

/// Placeholder for absent values
pub const EMPTY: &str = "—";

pub fn format_datetime(value: &DateTime<Utc>, config: &DisplayConfig) -> String {
    value.format(&config.datetime_format).to_string()
}

/// Same as [`format_datetime`], "—" when absent
pub fn format_datetime_opt(value: Option<&DateTime<Utc>>, config: &DisplayConfig) -> String {
    value
        .map(|v| format_datetime(v, config))
        .unwrap_or_else(|| EMPTY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let cfg = DisplayConfig::default();
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&dt, &cfg), "15.03.2024 14:02");
    }

    #[test]
    fn test_custom_format_and_missing_value() {
        let cfg = DisplayConfig {
            datetime_format: "%Y-%m-%d".to_string(),
            ..DisplayConfig::default()
        };
        let dt = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_datetime_opt(Some(&dt), &cfg), "2024-12-31");
        assert_eq!(format_datetime_opt(None, &cfg), "—");
    }
}
