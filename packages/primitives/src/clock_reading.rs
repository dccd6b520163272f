//! A wall-clock reading.
use derive_more::Constructor;

use crate::HourMinute;

/// Hours, minutes and seconds of the wall clock at one instant.
///
/// It is derived on every clock tick from a timestamp and an UTC offset and
/// it's never stored.
///
/// - `hours24`: 0–23
/// - `minutes`: 0–59
/// - `seconds`: 0–59
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Constructor)]
pub struct ClockReading {
    pub hours24: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl ClockReading {
    /// The reading truncated to the minute, which is the granularity the
    /// alarm compares at.
    #[must_use]
    pub fn hour_minute(&self) -> HourMinute {
        HourMinute::from_total_minutes(u32::from(self.hours24) * 60 + u32::from(self.minutes))
    }
}
