//! Primitive types for the clock dashboard.
//!
//! This module contains the basic data structures shared by the dashboard
//! core, the clock package and the configuration package: wall-clock
//! readings, `HH:MM` alarm times, the background themes and the preferences
//! store backends.
use std::time::Duration;

pub mod clock_reading;
pub mod hour_minute;
pub mod store_driver;
pub mod theme;

pub use clock_reading::ClockReading;
pub use hour_minute::HourMinute;
pub use store_driver::StoreDriver;
pub use theme::Theme;

/// Duration since the Unix Epoch.
pub type DurationSinceUnixEpoch = Duration;
