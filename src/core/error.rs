//! Errors returned by the dashboard engines.
//!
//! Error | Context | Description
//! ---|---|---
//! `InvalidDuration` | Countdown | Both fields are zero, one of them is negative or the total does not fit.
//! `CountdownInProgress` | Countdown | A countdown is running or paused; it has to be reset first.
//! `MissingTime` | Alarm | The alarm was set without a time.
//! `MalformedTime` | Alarm | The alarm time is not a valid `HH:MM` value.
//!
//! All of them are reported synchronously to the caller and the engine keeps
//! the state it had before the call.
use std::panic::Location;

use clock_dashboard_primitives::hour_minute::ParseHourMinuteError;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid countdown duration: {minutes} min {seconds} s, {location}")]
    InvalidDuration {
        minutes: i64,
        seconds: i64,
        location: &'static Location<'static>,
    },

    #[error("A countdown is already in progress, {location}")]
    CountdownInProgress { location: &'static Location<'static> },

    #[error("The alarm time is missing, {location}")]
    MissingTime { location: &'static Location<'static> },

    #[error("The alarm time {value:?} is not valid: {source}, {location}")]
    MalformedTime {
        value: String,
        source: ParseHourMinuteError,
        location: &'static Location<'static>,
    },
}
