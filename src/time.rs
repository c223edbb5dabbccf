use chrono::TimeZone;
use chrono_tz::Tz;

use crate::units::UnitProfile;

/// Render an epoch timestamp with a strftime pattern in the given zone.
///
/// Empty patterns (unknown region) and timestamps chrono can't represent
/// produce an empty string.
fn format_epoch(seconds: i64, pattern: &str, tz: Tz) -> String {
    if pattern.is_empty() {
        return String::new();
    }
    match tz.timestamp_opt(seconds, 0).single() {
        Some(dt) => dt.format(pattern).to_string(),
        None => String::new(),
    }
}

/// Full date and time, e.g. "January 2 at 3:04pm EST".
pub fn format_long(seconds: i64, units: &UnitProfile, tz: Tz) -> String {
    format_epoch(seconds, units.long_date, tz)
}

/// Date with weekday, e.g. "January 2 (Monday)". Same for every region.
pub fn format_date(seconds: i64, tz: Tz) -> String {
    format_epoch(seconds, "%B %-d (%A)", tz)
}

/// Time of day, e.g. "3:04pm EST".
pub fn format_hour(seconds: i64, units: &UnitProfile, tz: Tz) -> String {
    format_epoch(seconds, units.hour, tz)
}
