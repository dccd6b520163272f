//! The `HH:MM` wall-clock minute.
//!
//! Alarms are set, compared and persisted at minute granularity. The textual
//! form is always two zero-padded fields separated by a colon, like the value
//! produced by a `<input type="time">` control:
//!
//! ```text
//! 07:00
//! 23:58
//! ```
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const MINUTES_PER_HOUR: u32 = 60;
const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

/// A minute of the day, from `00:00` to `23:59`.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
#[serde(try_from = "String", into = "String")]
pub struct HourMinute {
    hours: u8,
    minutes: u8,
}

/// Errors building or parsing an [`HourMinute`].
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseHourMinuteError {
    #[error("expected `HH:MM`, got {0:?}")]
    Malformed(String),

    #[error("hour {hours} or minute {minutes} out of range")]
    OutOfRange { hours: u32, minutes: u32 },
}

impl HourMinute {
    /// # Errors
    ///
    /// Will return `ParseHourMinuteError::OutOfRange` if `hours` is not lower
    /// than 24 or `minutes` is not lower than 60.
    pub fn new(hours: u8, minutes: u8) -> Result<Self, ParseHourMinuteError> {
        if hours >= 24 || minutes >= 60 {
            return Err(ParseHourMinuteError::OutOfRange {
                hours: u32::from(hours),
                minutes: u32::from(minutes),
            });
        }
        Ok(Self { hours, minutes })
    }

    /// It builds the minute of the day from a count of minutes since
    /// midnight, wrapping around at `24:00`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_total_minutes(total: u32) -> Self {
        let total = total % MINUTES_PER_DAY;
        Self {
            hours: (total / MINUTES_PER_HOUR) as u8,
            minutes: (total % MINUTES_PER_HOUR) as u8,
        }
    }

    #[must_use]
    pub fn hours(&self) -> u8 {
        self.hours
    }

    #[must_use]
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        u32::from(self.hours) * MINUTES_PER_HOUR + u32::from(self.minutes)
    }

    /// Wall-clock addition: `23:58 + 5` is `00:03`.
    #[must_use]
    pub fn add_minutes(&self, minutes: u32) -> Self {
        Self::from_total_minutes(self.total_minutes() + minutes % MINUTES_PER_DAY)
    }
}

impl fmt::Display for HourMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl FromStr for HourMinute {
    type Err = ParseHourMinuteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseHourMinuteError::Malformed(s.to_owned());

        let (hours, minutes) = s.trim().split_once(':').ok_or_else(malformed)?;

        let field = |value: &str| -> Result<u32, ParseHourMinuteError> {
            if value.is_empty() || value.len() > 2 || !value.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            value.parse::<u32>().map_err(|_| malformed())
        };

        let (hours, minutes) = (field(hours)?, field(minutes)?);

        match (u8::try_from(hours), u8::try_from(minutes)) {
            (Ok(h), Ok(m)) => Self::new(h, m),
            _ => Err(ParseHourMinuteError::OutOfRange { hours, minutes }),
        }
    }
}

impl TryFrom<String> for HourMinute {
    type Error = ParseHourMinuteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HourMinute> for String {
    fn from(value: HourMinute) -> Self {
        value.to_string()
    }
}
