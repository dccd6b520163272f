//! Stopwatch with lap splits.
//!
//! The stopwatch does not count ticks. It remembers a virtual start instant
//! and derives the elapsed time from the timestamp passed on each call:
//!
//! ```text
//! start(now)  -> start   = now - elapsed
//! tick(now)   -> elapsed = now - start
//! stop(now)   -> elapsed = now - start (frozen)
//! ```
//!
//! Since `start` subtracts the time already measured, a stop/start gap is
//! never counted, and a host that ticks late only delays the display: the
//! next tick shows the exact elapsed time again.
//!
//! Laps store the cumulative elapsed time when they were taken. The time shown
//! for each lap is the difference with the previous one (see [`Lap`]).
use std::time::Duration;

use clock_dashboard_primitives::DurationSinceUnixEpoch;
use tracing::debug;

use super::formatter::format_duration;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Status {
    #[default]
    Stopped,
    Running,
}

/// A lap as shown in the lap list.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Lap {
    /// 1-indexed position of the lap.
    pub number: usize,
    /// Elapsed time of the stopwatch when the lap was taken.
    pub total: Duration,
    /// Time since the previous lap, or since the start for the first one.
    pub split: Duration,
}

impl Lap {
    /// The lap list entry, for example `Lap 2  00:00:01.50`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("Lap {}  {}", self.number, format_duration(self.split))
    }
}

#[derive(Debug, Default)]
pub struct Stopwatch {
    status: Status,
    start: DurationSinceUnixEpoch,
    elapsed: Duration,
    laps: Vec<Duration>,
}

impl Stopwatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// It starts (or resumes) the stopwatch. It does nothing if it's already
    /// running.
    pub fn start(&mut self, now: DurationSinceUnixEpoch) {
        if self.is_running() {
            return;
        }

        self.start = now.saturating_sub(self.elapsed);
        self.status = Status::Running;

        debug!("stopwatch started at {:?} with {:?} already elapsed", now, self.elapsed);
    }

    /// It stops the stopwatch freezing the elapsed time. It does nothing if
    /// it's not running.
    pub fn stop(&mut self, now: DurationSinceUnixEpoch) {
        if !self.is_running() {
            return;
        }

        self.elapsed = now.saturating_sub(self.start);
        self.status = Status::Stopped;

        debug!("stopwatch stopped at {:?}", self.elapsed);
    }

    /// The start/stop button.
    pub fn toggle(&mut self, now: DurationSinceUnixEpoch) {
        match self.status {
            Status::Stopped => self.start(now),
            Status::Running => self.stop(now),
        }
    }

    /// It stops the stopwatch, zeroes the elapsed time and clears the laps.
    pub fn reset(&mut self) {
        self.status = Status::Stopped;
        self.start = DurationSinceUnixEpoch::ZERO;
        self.elapsed = Duration::ZERO;
        self.laps.clear();

        debug!("stopwatch reset");
    }

    /// It records the current elapsed time as a new lap. It does nothing
    /// unless the stopwatch is running.
    pub fn add_lap(&mut self) -> Option<Lap> {
        if !self.is_running() {
            return None;
        }

        self.laps.push(self.elapsed);

        self.laps().last().copied()
    }

    /// It recomputes the elapsed time and returns it. While stopped it returns
    /// the frozen value.
    pub fn tick(&mut self, now: DurationSinceUnixEpoch) -> Duration {
        if self.is_running() {
            self.elapsed = now.saturating_sub(self.start);
        }
        self.elapsed
    }

    /// The recorded laps, oldest first.
    #[must_use]
    pub fn laps(&self) -> Vec<Lap> {
        let previous = std::iter::once(Duration::ZERO).chain(self.laps.iter().copied());

        self.laps
            .iter()
            .zip(previous)
            .enumerate()
            .map(|(index, (&total, previous))| Lap {
                number: index + 1,
                total,
                split: total.saturating_sub(previous),
            })
            .collect()
    }
}
