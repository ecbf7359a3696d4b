// Time-of-day helpers shared by the grid and derivation services

use chrono::{NaiveTime, Timelike};

/// Minutes since midnight for a wall-clock time.
pub fn minutes_of(time: NaiveTime) -> i64 {
    time.hour() as i64 * 60 + time.minute() as i64
}

/// Wall-clock time for a minutes-since-midnight value.
///
/// Values at or past 24:00 saturate to 23:59. Operating windows end by
/// 23:00 (settings validation), so in-range callers never hit the clamp.
pub fn time_from_minutes(minutes: i64) -> NaiveTime {
    if minutes >= 24 * 60 {
        return NaiveTime::from_hms_opt(23, 59, 0).unwrap();
    }
    let clamped = minutes.max(0) as u32;
    NaiveTime::from_hms_opt(clamped / 60, clamped % 60, 0).unwrap()
}

/// Format a time as `HH:MM` for display output.
pub fn fmt_hhmm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
