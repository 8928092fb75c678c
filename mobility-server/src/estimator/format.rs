//! Human-readable duration formatting.

/// Format a duration in minutes as `"45 min"`, `"1h"` or `"1h 30min"`.
///
/// Durations under an hour are rounded to the nearest minute. Longer
/// durations show whole hours plus the rounded remainder; a remainder
/// that rounds up to a full hour carries into the hour count, so the
/// minute part is always below 60.
///
/// # Examples
///
/// ```
/// use mobility_server::estimator::format_duration;
///
/// assert_eq!(format_duration(45.0), "45 min");
/// assert_eq!(format_duration(60.0), "1h");
/// assert_eq!(format_duration(90.0), "1h 30min");
/// ```
pub fn format_duration(minutes: f64) -> String {
    if minutes < 60.0 {
        return format!("{} min", minutes.round() as i64);
    }

    let mut hours = (minutes / 60.0).floor() as i64;
    let mut remainder = (minutes % 60.0).round() as i64;

    if remainder == 60 {
        hours += 1;
        remainder = 0;
    }

    if remainder == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {remainder}min")
    }
}
