use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cadences at which the host ticks each widget.
///
/// The host job runs at the finest of them; every widget is only advanced
/// when its own interval has elapsed.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Scheduler {
    /// Interval in milliseconds between wall clock (and alarm) updates.
    #[serde(default = "Scheduler::default_clock_interval_ms")]
    pub clock_interval_ms: u64,

    /// Interval in milliseconds between stopwatch display updates. It only
    /// affects the display granularity, not the measured time.
    #[serde(default = "Scheduler::default_stopwatch_interval_ms")]
    pub stopwatch_interval_ms: u64,

    /// Interval in milliseconds between two countdown decrements.
    #[serde(default = "Scheduler::default_countdown_interval_ms")]
    pub countdown_interval_ms: u64,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self {
            clock_interval_ms: Self::default_clock_interval_ms(),
            stopwatch_interval_ms: Self::default_stopwatch_interval_ms(),
            countdown_interval_ms: Self::default_countdown_interval_ms(),
        }
    }
}

impl Scheduler {
    fn default_clock_interval_ms() -> u64 {
        1000
    }

    fn default_stopwatch_interval_ms() -> u64 {
        10
    }

    fn default_countdown_interval_ms() -> u64 {
        1000
    }

    #[must_use]
    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms)
    }

    #[must_use]
    pub fn stopwatch_interval(&self) -> Duration {
        Duration::from_millis(self.stopwatch_interval_ms)
    }

    #[must_use]
    pub fn countdown_interval(&self) -> Duration {
        Duration::from_millis(self.countdown_interval_ms)
    }

    /// The period of the host job: the shortest of all intervals.
    #[must_use]
    pub fn resolution(&self) -> Duration {
        self.clock_interval()
            .min(self.stopwatch_interval())
            .min(self.countdown_interval())
    }
}
