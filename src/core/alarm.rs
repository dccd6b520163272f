//! Daily alarm.
//!
//! ```text
//! Inactive --set--> Armed --tick (minute matches)--> Ringing --snooze--> Armed
//!     ^                                                  |
//!     +-------------------- cancel (any state) ----------+
//! ```
//!
//! The alarm compares hours and minutes only, so the target matches during a
//! whole minute. It rings on the edge from a non-matching tick to a matching
//! one: ticking again within the same minute does not ring twice.
//!
//! Setting the alarm again clears the edge memory. An alarm cancelled and set
//! again to the current minute rings again.
use std::panic::Location;

use clock_dashboard_primitives::HourMinute;
use tracing::{debug, info};

use super::error::Error;
use super::settings::AlarmSettings;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Status {
    #[default]
    Inactive,
    Armed,
    Ringing,
}

/// Signal emitted when the alarm starts ringing.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Ring {
    pub target: HourMinute,
}

#[derive(Debug)]
pub struct Alarm {
    status: Status,
    target: Option<HourMinute>,
    snooze_minutes: u32,
    /// Whether the previous tick was already in the target minute.
    matching: bool,
}

impl Alarm {
    #[must_use]
    pub fn new(snooze_minutes: u32) -> Self {
        Self {
            status: Status::Inactive,
            target: None,
            snooze_minutes,
            matching: false,
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn target(&self) -> Option<HourMinute> {
        self.target
    }

    /// Armed or ringing.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status != Status::Inactive
    }

    #[must_use]
    pub fn is_ringing(&self) -> bool {
        self.status == Status::Ringing
    }

    /// It arms the alarm for the given `HH:MM` time. A ringing alarm stops
    /// ringing.
    ///
    /// # Errors
    ///
    /// Will return:
    ///
    /// - `Error::MissingTime` if `time` is `None` or blank.
    /// - `Error::MalformedTime` if `time` is not a valid `HH:MM` value.
    #[track_caller]
    pub fn set(&mut self, time: Option<&str>) -> Result<HourMinute, Error> {
        let location = Location::caller();

        let value = match time.map(str::trim) {
            None | Some("") => return Err(Error::MissingTime { location }),
            Some(value) => value,
        };

        let target = value.parse::<HourMinute>().map_err(|source| Error::MalformedTime {
            value: value.to_owned(),
            source,
            location,
        })?;

        self.arm(target);

        info!("alarm set for {target}");

        Ok(target)
    }

    /// It disarms the alarm from any state and forgets the target.
    pub fn cancel(&mut self) {
        self.status = Status::Inactive;
        self.target = None;
        self.matching = false;

        info!("alarm cancelled");
    }

    /// It compares the current minute with the target.
    ///
    /// Returns the ring signal when the alarm goes from armed to ringing.
    pub fn tick(&mut self, now: HourMinute) -> Option<Ring> {
        if self.status != Status::Armed {
            return None;
        }

        let target = self.target?;
        let matches = now == target;
        let edge = matches && !self.matching;
        self.matching = matches;

        if !edge {
            return None;
        }

        self.status = Status::Ringing;

        info!("alarm for {target} is ringing");

        Some(Ring { target })
    }

    /// It postpones a ringing alarm `snooze_minutes` after `now`, wrapping
    /// around midnight. Returns the new target, or `None` when the alarm was
    /// not ringing.
    pub fn snooze(&mut self, now: HourMinute) -> Option<HourMinute> {
        if !self.is_ringing() {
            return None;
        }

        let target = now.add_minutes(self.snooze_minutes);
        self.arm(target);

        info!("alarm snoozed until {target}");

        Some(target)
    }

    /// It rebuilds the alarm from persisted settings. Only an active alarm
    /// with a time is armed again; it never comes back ringing.
    pub fn restore(&mut self, settings: &AlarmSettings) {
        match (settings.active, settings.alarm_time) {
            (true, Some(target)) => self.arm(target),
            _ => {
                self.status = Status::Inactive;
                self.target = None;
                self.matching = false;
            }
        }

        debug!("alarm restored: {:?}", self.status);
    }

    /// The part of the state that outlives the session.
    #[must_use]
    pub fn settings(&self) -> AlarmSettings {
        AlarmSettings {
            alarm_time: self.target,
            active: self.is_active(),
        }
    }

    fn arm(&mut self, target: HourMinute) {
        self.status = Status::Armed;
        self.target = Some(target);
        self.matching = false;
    }
}
