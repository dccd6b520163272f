use std::time::Duration;

use clock_dashboard_clock::clock::stopped::Stopped as _;
use clock_dashboard_clock::clock::Time;
use clock_dashboard_primitives::DurationSinceUnixEpoch;

use crate::CurrentClock;

/// 2025-01-05 00:00:00 UTC, a Sunday.
pub const SUNDAY_MIDNIGHT: u64 = 1_736_035_200;

/// It stops the clock at the given time of the sample Sunday.
pub fn stop_at(hours: u64, minutes: u64, seconds: u64) -> DurationSinceUnixEpoch {
    CurrentClock::local_set(&Duration::from_secs(SUNDAY_MIDNIGHT + (hours * 60 + minutes) * 60 + seconds));
    CurrentClock::now()
}

/// It moves the stopped clock forward and returns the new time.
pub fn advance(duration: Duration) -> DurationSinceUnixEpoch {
    CurrentClock::local_add(&duration).unwrap();
    CurrentClock::now()
}
