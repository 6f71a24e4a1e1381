//! Seconds-of-day time values and permissive numeric coercion.
//!
//! Input records carry times as JSON numbers, numeric strings, or wall
//! clock strings (`"07:30"`, `"07:30:15"`). Everything is normalized to
//! `f64` seconds since midnight. Values that are not finite are treated
//! as absent rather than as errors.

use serde_json::Value;

/// Length of one simulated day in seconds.
pub const DAY_SECONDS: f64 = 86_400.0;

/// Last representable query instant inside `[0, DAY_SECONDS)`.
pub const DAY_END: f64 = DAY_SECONDS - 1e-3;

/// Coerce a JSON value to a finite number.
///
/// Accepts JSON numbers and strings that parse as `f64`. Booleans,
/// arrays, objects and non-finite results yield `None`.
pub fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

/// Coerce a JSON value to seconds-of-day.
///
/// Like [`as_number`], but strings of the form `HH:MM` or `HH:MM:SS`
/// are also accepted. Hours past 24 are kept as-is (overnight legs).
pub fn as_seconds(value: &Value) -> Option<f64> {
    if let Some(n) = as_number(value) {
        return Some(n);
    }
    match value {
        Value::String(s) => parse_clock(s),
        _ => None,
    }
}

/// Parse `HH:MM` or `HH:MM:SS` (seconds may be fractional).
pub fn parse_clock(s: &str) -> Option<f64> {
    let mut parts = s.trim().split(':');
    let hours: u32 = parts.next()?.trim().parse().ok()?;
    let minutes: u32 = parts.next()?.trim().parse().ok()?;
    let seconds: f64 = match parts.next() {
        Some(sec) => sec.trim().parse().ok()?,
        None => 0.0,
    };
    if parts.next().is_some() || minutes >= 60 || !(0.0..60.0).contains(&seconds) {
        return None;
    }
    Some(f64::from(hours) * 3600.0 + f64::from(minutes) * 60.0 + seconds)
}

/// Clamp a query time into `[0, DAY_SECONDS)`.
///
/// NaN maps to `0`.
pub fn clamp_to_day(t: f64) -> f64 {
    if t.is_nan() {
        return 0.0;
    }
    t.clamp(0.0, DAY_END)
}

/// Format seconds-of-day as `HH:MM:SS` (truncating fractions).
pub fn format_clock(t: f64) -> String {
    let total = if t.is_finite() { t.max(0.0) as u64 } else { 0 };
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_and_numeric_strings_coerce() {
        assert_eq!(as_number(&json!(12.5)), Some(12.5));
        assert_eq!(as_number(&json!(" 7 ")), Some(7.0));
        assert_eq!(as_number(&json!("seven")), None);
        assert_eq!(as_number(&json!(true)), None);
        assert_eq!(as_number(&json!(null)), None);
        assert_eq!(as_number(&json!("inf")), None);
    }

    #[test]
    fn clock_strings_become_seconds() {
        assert_eq!(as_seconds(&json!("07:30")), Some(27_000.0));
        assert_eq!(as_seconds(&json!("00:00:30")), Some(30.0));
        assert_eq!(as_seconds(&json!("25:00")), Some(90_000.0));
        assert_eq!(as_seconds(&json!(3600)), Some(3600.0));
    }

    #[test]
    fn malformed_clock_strings_are_rejected() {
        assert_eq!(parse_clock("7"), None);
        assert_eq!(parse_clock("07:75"), None);
        assert_eq!(parse_clock("07:30:60"), None);
        assert_eq!(parse_clock("07:30:00:00"), None);
        assert_eq!(parse_clock("-1:00"), None);
    }

    #[test]
    fn clamp_keeps_time_inside_the_day() {
        assert_eq!(clamp_to_day(-5.0), 0.0);
        assert_eq!(clamp_to_day(f64::NAN), 0.0);
        assert_eq!(clamp_to_day(100.0), 100.0);
        assert!(clamp_to_day(DAY_SECONDS) < DAY_SECONDS);
    }

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(27_015.9), "07:30:15");
        assert_eq!(format_clock(-3.0), "00:00:00");
    }
}
