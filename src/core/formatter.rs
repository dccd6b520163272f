//! Pure functions turning times and durations into display strings.
//!
//! Function | Output | Example
//! ---|---|---
//! [`format_clock`] | `HH:MM:SS` and `AM`, `PM` or nothing | `07:05:09`, `PM`
//! [`format_duration`] | `HH:MM:SS.cc` | `00:01:02.34`
//! [`format_countdown`] | `MM:SS` | `01:30`
//! [`format_date`] | `Weekday, Month D, YYYY` | `Sunday, January 5, 2025`
//!
//! Every field is zero-padded to a width of two digits. Fields that can grow
//! beyond two digits (stopwatch hours, countdown minutes) are never truncated.
use std::time::Duration;

use chrono::NaiveDate;
use clock_dashboard_primitives::ClockReading;

/// Morning or afternoon marker of the 12-hour convention.
pub const AM: &str = "AM";
pub const PM: &str = "PM";

/// It formats a wall-clock reading.
///
/// With the 24-hour convention the hours are shown as they are and the
/// meridiem is empty. Otherwise `0` is shown as `12`, hours above `12` wrap to
/// `1`–`12`, and the meridiem is `PM` from `12:00` on.
#[must_use]
pub fn format_clock(reading: &ClockReading, use_24_hour: bool) -> (String, &'static str) {
    let (hours, meridiem) = if use_24_hour {
        (reading.hours24, "")
    } else {
        let meridiem = if reading.hours24 >= 12 { PM } else { AM };
        let hours = match reading.hours24 % 12 {
            0 => 12,
            hours => hours,
        };
        (hours, meridiem)
    };

    (
        format!("{:02}:{:02}:{:02}", hours, reading.minutes, reading.seconds),
        meridiem,
    )
}

/// It formats an elapsed time with centisecond resolution.
///
/// The value is floored: `1_239` ms is shown as `00:00:01.23`.
#[must_use]
pub fn format_duration(elapsed: Duration) -> String {
    let ms = elapsed.as_millis();

    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    let centiseconds = (ms % 1000) / 10;

    format!("{hours:02}:{minutes:02}:{seconds:02}.{centiseconds:02}")
}

/// It formats a count of seconds as minutes and seconds. There is no hours
/// field: 100 minutes are shown as `100:00`.
#[must_use]
pub fn format_countdown(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// It formats a calendar date as the long line shown below the clock.
#[must_use]
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
