//! Countdown timer.
//!
//! ```text
//! Idle --configure--> Running <--pause/resume--> Paused
//!                        |
//!                      tick (remaining reaches 0)
//!                        v
//!                     Finished --reset--> Idle
//! ```
//!
//! `reset` goes back to `Idle` from any state. The engine never schedules
//! itself: the host calls [`Countdown::tick`] once per second while the
//! countdown is running, and stops calling it while it's paused.
use std::panic::Location;

use tracing::{debug, info};

use super::error::Error;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Status {
    #[default]
    Idle,
    Running,
    Paused,
    Finished,
}

/// Outcome of one countdown tick.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Tick {
    /// The countdown was not running. Nothing changed.
    Ignored,
    /// One second was consumed; the value is the remaining seconds.
    Counting(u32),
    /// The countdown reached zero on this tick. It's only returned once.
    Finished,
}

/// Advisory zones near the end of the countdown.
///
/// Both can be active at the same time. A display should prefer the most
/// urgent one, see [`Zones::most_urgent`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Zones {
    pub warning: bool,
    pub danger: bool,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Zone {
    Warning,
    Danger,
}

impl Zones {
    #[must_use]
    pub fn most_urgent(&self) -> Option<Zone> {
        if self.danger {
            Some(Zone::Danger)
        } else if self.warning {
            Some(Zone::Warning)
        } else {
            None
        }
    }
}

/// Remaining seconds at or below which each zone applies.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Thresholds {
    pub warning_secs: u32,
    pub danger_secs: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning_secs: 30,
            danger_secs: 10,
        }
    }
}

#[derive(Debug, Default)]
pub struct Countdown {
    status: Status,
    total_seconds: u32,
    remaining_seconds: u32,
    thresholds: Thresholds,
}

impl Countdown {
    #[must_use]
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            ..Default::default()
        }
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
    pub fn is_paused(&self) -> bool {
        self.status == Status::Paused
    }

    #[must_use]
    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// It sets the duration and starts counting down.
    ///
    /// # Errors
    ///
    /// Will return:
    ///
    /// - `Error::InvalidDuration` if both values are zero, one of them is
    ///   negative or the total number of seconds does not fit in an `u32`.
    /// - `Error::CountdownInProgress` if the countdown is running or paused.
    #[track_caller]
    pub fn configure(&mut self, minutes: i64, seconds: i64) -> Result<(), Error> {
        let location = Location::caller();
        let invalid = || Error::InvalidDuration {
            minutes,
            seconds,
            location,
        };

        if matches!(self.status, Status::Running | Status::Paused) {
            return Err(Error::CountdownInProgress { location });
        }

        if minutes < 0 || seconds < 0 || (minutes == 0 && seconds == 0) {
            return Err(invalid());
        }

        let total = minutes
            .checked_mul(60)
            .and_then(|minutes| minutes.checked_add(seconds))
            .and_then(|total| u32::try_from(total).ok())
            .ok_or_else(invalid)?;

        self.total_seconds = total;
        self.remaining_seconds = total;
        self.status = Status::Running;

        info!("countdown started for {total} seconds");

        Ok(())
    }

    /// It consumes one second.
    pub fn tick(&mut self) -> Tick {
        if !self.is_running() {
            return Tick::Ignored;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);

        if self.remaining_seconds == 0 {
            self.status = Status::Finished;
            info!("countdown finished");
            return Tick::Finished;
        }

        Tick::Counting(self.remaining_seconds)
    }

    pub fn pause(&mut self) {
        if self.is_running() {
            self.status = Status::Paused;
            debug!("countdown paused with {} seconds left", self.remaining_seconds);
        }
    }

    pub fn resume(&mut self) {
        if self.is_paused() {
            self.status = Status::Running;
            debug!("countdown resumed with {} seconds left", self.remaining_seconds);
        }
    }

    /// The single pause/resume button.
    pub fn toggle_pause(&mut self) {
        match self.status {
            Status::Running => self.pause(),
            Status::Paused => self.resume(),
            Status::Idle | Status::Finished => {}
        }
    }

    pub fn reset(&mut self) {
        self.status = Status::Idle;
        self.total_seconds = 0;
        self.remaining_seconds = 0;

        debug!("countdown reset");
    }

    /// The zones the remaining time falls in. A countdown that is not in
    /// progress is in no zone.
    #[must_use]
    pub fn zones(&self) -> Zones {
        if !matches!(self.status, Status::Running | Status::Paused) {
            return Zones::default();
        }

        Zones {
            warning: self.remaining_seconds <= self.thresholds.warning_secs,
            danger: self.remaining_seconds <= self.thresholds.danger_secs,
        }
    }
}
