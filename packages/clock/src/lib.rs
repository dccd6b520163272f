//! Time sources for the clock dashboard.
//!
//! The dashboard core never reads the system time by itself. The host asks a
//! clock for the current timestamp and hands it to the engines, so tests can
//! replace the time source with one that only moves when told to.
//!
//! Clocks use the type `DurationSinceUnixEpoch` which is a
//! `std::time::Duration` since the Unix Epoch (timestamp). Wall-clock values
//! (hours, minutes, seconds and the calendar date) are derived from the
//! timestamp and the UTC offset in effect at that instant, see [`conv`].
//!
//! ```text
//! Timestamp:      1736071200.250
//! UTC offset:     +01:00
//! Clock reading:  11:00:00
//! Date:           Sunday, January 5, 2025
//! ```
//!
//! > **NOTICE**: the timestamp does not depend on the time zone. Only the
//! > conversion to a [`ClockReading`](clock_dashboard_primitives::ClockReading)
//! > takes the offset into account.

pub mod clock;
pub mod conv;
pub mod static_time;

#[macro_use]
extern crate lazy_static;

/// This code needs to be copied into each crate.
/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Stopped;
