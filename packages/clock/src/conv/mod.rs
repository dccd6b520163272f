//! Conversions from timestamps to wall-clock values.
use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, TimeZone, Timelike, Utc};
use clock_dashboard_primitives::{ClockReading, DurationSinceUnixEpoch};

/// It converts a timestamp to a `DateTime` in the given UTC offset.
///
/// # Panics
///
/// Will panic if the input time overflows the `i64` seconds of `DateTime::<Utc>`.
/// (this will naturally happen in 292.5 billion years)
#[must_use]
pub fn convert_from_timestamp_to_datetime(timestamp: DurationSinceUnixEpoch, offset: &FixedOffset) -> DateTime<FixedOffset> {
    DateTime::<Utc>::from_timestamp(
        i64::try_from(timestamp.as_secs()).expect("Overflow of i64 seconds, very future!"),
        timestamp.subsec_nanos(),
    )
    .expect("Timestamp out of the range supported by chrono, very future!")
    .with_timezone(offset)
}

/// It converts a timestamp to the hours, minutes and seconds shown by a wall
/// clock in the given UTC offset.
///
/// For example, the Unix Epoch seen from `+01:00` is `01:00:00`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn convert_from_timestamp_to_clock_reading(timestamp: DurationSinceUnixEpoch, offset: &FixedOffset) -> ClockReading {
    let datetime = convert_from_timestamp_to_datetime(timestamp, offset);

    ClockReading::new(datetime.hour() as u8, datetime.minute() as u8, datetime.second() as u8)
}

/// It converts a timestamp to the calendar date in the given UTC offset.
#[must_use]
pub fn convert_from_timestamp_to_date(timestamp: DurationSinceUnixEpoch, offset: &FixedOffset) -> NaiveDate {
    convert_from_timestamp_to_datetime(timestamp, offset).date_naive()
}

/// The UTC offset configured on the host right now.
#[must_use]
pub fn local_utc_offset() -> FixedOffset {
    Local::now().offset().fix()
}

/// The UTC offset the wall clock uses at a given instant.
pub trait OffsetSource: Sync + Send {
    fn offset_at(&self, timestamp: DurationSinceUnixEpoch) -> FixedOffset;
}

/// The same offset at every instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantOffset(pub FixedOffset);

impl OffsetSource for ConstantOffset {
    fn offset_at(&self, _timestamp: DurationSinceUnixEpoch) -> FixedOffset {
        self.0
    }
}

/// The offset of the host time zone at each instant. It follows the
/// daylight saving changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostOffset;

impl OffsetSource for HostOffset {
    fn offset_at(&self, timestamp: DurationSinceUnixEpoch) -> FixedOffset {
        i64::try_from(timestamp.as_secs())
            .ok()
            .and_then(|secs| Local.timestamp_opt(secs, timestamp.subsec_nanos()).single())
            .map_or_else(local_utc_offset, |datetime| datetime.offset().fix())
    }
}

/// It builds an UTC offset from a signed number of minutes east of UTC.
///
/// Returns `None` when the offset is not strictly within one day.
#[must_use]
pub fn utc_offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    minutes.checked_mul(60).and_then(FixedOffset::east_opt)
}
