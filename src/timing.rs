// SPDX-License-Identifier: PMPL-1.0-or-later

//! Timestamp formatting and human duration parsing.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Local};
use std::time::Duration;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f %z";

pub fn now() -> DateTime<Local> {
    Local::now()
}

/// Display form used wherever a timestamp leaves the crate.
pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse `500ms`, `30s`, `5m`, `1h` or a bare number of seconds.
pub fn parse_duration(raw: &str) -> Result<Duration> {
    let trimmed = raw.trim().to_ascii_lowercase();
    if trimmed.is_empty() {
        return Err(anyhow!("duration cannot be empty"));
    }

    let split = trimmed
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split);
    let millis_per_unit = match unit {
        "ms" => 1.0,
        "" | "s" => 1000.0,
        "m" => 60_000.0,
        "h" => 3_600_000.0,
        _ => return Err(anyhow!("unknown duration unit '{}' in '{}'", unit, raw)),
    };

    let value: f64 = number
        .trim()
        .parse()
        .with_context(|| format!("invalid duration '{}'", raw))?;
    if !value.is_finite() {
        return Err(anyhow!("duration must be a finite number: {}", raw));
    }
    if value.is_sign_negative() {
        return Err(anyhow!("duration cannot be negative: {}", raw));
    }

    let millis = (value * millis_per_unit).round();
    if millis > u64::MAX as f64 {
        return Err(anyhow!("duration out of range: {}", raw));
    }
    Ok(Duration::from_millis(millis as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_units() {
        assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_duration("30s").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_duration("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_duration("1h").unwrap(), Duration::from_secs(3600));
        assert_eq!(parse_duration(" 1.5S ").unwrap(), Duration::from_millis(1500));
    }

    #[test]
    fn bare_number_is_seconds() {
        assert_eq!(parse_duration("45").unwrap(), Duration::from_secs(45));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("   ").is_err());
        assert!(parse_duration("-3s").is_err());
        assert!(parse_duration("soon").is_err());
        assert!(parse_duration("-0").is_err());
        assert!(parse_duration("10d").is_err());
    }

    #[test]
    fn rejects_non_finite_values() {
        for raw in ["nan", "inf", "NaNs", "infh", "-inf", "1e999"] {
            assert!(parse_duration(raw).is_err(), "accepted {}", raw);
        }
        let huge = format!("{}h", "9".repeat(300));
        assert!(parse_duration(&huge).is_err());
    }

    #[test]
    fn timestamp_has_date_and_offset() {
        let ts = Local.with_ymd_and_hms(2016, 3, 14, 9, 26, 53).unwrap();
        let shown = format_timestamp(&ts);
        assert!(shown.starts_with("2016-03-14 09:26:53"), "got {}", shown);
        let offset = shown.split_whitespace().nth(2).unwrap_or_default();
        assert!(offset.starts_with('+') || offset.starts_with('-'), "got {}", shown);
    }
}
