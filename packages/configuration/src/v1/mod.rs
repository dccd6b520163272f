//! Version `1` for the clock dashboard configuration data structures.
//!
//! The configuration is loaded from a [TOML](https://toml.io/en/) file
//! `dashboard.toml` or from an environment variable with the same content as
//! the file. When neither is provided the default configuration is used.
//!
//! # Sections
//!
//! Each section in the toml structure is mapped to a data structure:
//!
//! - [`Logging`](crate::v1::logging::Logging): log threshold and style.
//! - [`Clock`](crate::v1::clock::Clock): default preferences and UTC offset.
//! - [`Scheduler`](crate::v1::scheduler::Scheduler): widget cadences.
//! - [`Alarm`](crate::v1::alarm::Alarm): snooze length.
//! - [`Countdown`](crate::v1::countdown::Countdown): zone thresholds.
//! - [`Storage`](crate::v1::storage::Storage): where preferences are kept.
//!
//! # Default configuration
//!
//! ```toml
//! [logging]
//! threshold = "info"
//! style = "default"
//!
//! [clock]
//! use_24_hour = false
//! dark_mode = true
//! theme = "gradient-blue"
//! # utc_offset_minutes = 60
//!
//! [scheduler]
//! clock_interval_ms = 1000
//! stopwatch_interval_ms = 10
//! countdown_interval_ms = 1000
//!
//! [alarm]
//! snooze_minutes = 5
//!
//! [countdown]
//! warning_threshold_secs = 30
//! danger_threshold_secs = 10
//!
//! [storage]
//! driver = "json_file"
//! path = "./storage/dashboard/settings.json"
//! ```
pub mod alarm;
pub mod clock;
pub mod countdown;
pub mod logging;
pub mod scheduler;
pub mod storage;

use std::fs;

use camino::Utf8Path;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use self::alarm::Alarm;
use self::clock::Clock;
use self::countdown::Countdown;
use self::logging::Logging;
use self::scheduler::Scheduler;
use self::storage::Storage;
use crate::validator::{SemanticValidationError, Validator};
use crate::{Error, Info, CONFIG_OVERRIDE_PREFIX, CONFIG_OVERRIDE_SEPARATOR};

/// Core configuration for the dashboard.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Configuration {
    /// Logging configuration
    #[serde(default = "Logging::default")]
    pub logging: Logging,

    /// Wall clock configuration.
    #[serde(default = "Clock::default")]
    pub clock: Clock,

    /// Cadences of the host tick.
    #[serde(default = "Scheduler::default")]
    pub scheduler: Scheduler,

    /// Alarm configuration.
    #[serde(default = "Alarm::default")]
    pub alarm: Alarm,

    /// Countdown timer configuration.
    #[serde(default = "Countdown::default")]
    pub countdown: Countdown,

    /// Preferences storage configuration.
    #[serde(default = "Storage::default")]
    pub storage: Storage,
}

impl Configuration {
    /// Loads the configuration from the `Info` struct.
    ///
    /// Sources are merged in this order, the last one wins: defaults, the
    /// inline TOML (or the TOML file when there is no inline one), and the
    /// overriding environment variables.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the sources can not be merged into a
    /// configuration or the resulting configuration is not valid.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let figment = Figment::from(Serialized::defaults(Configuration::default()));

        let figment = match info.config_toml {
            Some(ref config_toml) => figment.merge(Toml::string(config_toml)),
            None => figment.merge(Toml::file(&info.config_toml_path)),
        };

        let config: Configuration = figment
            .merge(Env::prefixed(CONFIG_OVERRIDE_PREFIX).split(CONFIG_OVERRIDE_SEPARATOR))
            .extract()?;

        config.validate()?;

        Ok(config)
    }

    /// Loads the configuration from a file, applying the environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `path` has a bad configuration.
    pub fn load_from_file(path: &str) -> Result<Configuration, Error> {
        Self::load(&Info {
            config_toml: None,
            config_toml_path: path.to_owned(),
        })
    }

    /// Saves the configuration to the configuration file.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration can not be encoded to TOML or
    /// the file can not be written.
    pub fn save_to_file(&self, path: &Utf8Path) -> Result<(), Error> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration can not be encoded.
    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml::to_string(self)?)
    }
}

impl Validator for Configuration {
    fn validate(&self) -> Result<(), SemanticValidationError> {
        let intervals = [
            ("clock", self.scheduler.clock_interval_ms),
            ("stopwatch", self.scheduler.stopwatch_interval_ms),
            ("countdown", self.scheduler.countdown_interval_ms),
        ];

        if let Some((name, _)) = intervals.into_iter().find(|(_, interval)| *interval == 0) {
            return Err(SemanticValidationError::ZeroInterval { name });
        }

        if self.countdown.danger_threshold_secs > self.countdown.warning_threshold_secs {
            return Err(SemanticValidationError::DangerAboveWarning {
                danger: self.countdown.danger_threshold_secs,
                warning: self.countdown.warning_threshold_secs,
            });
        }

        if !(1..24 * 60).contains(&self.alarm.snooze_minutes) {
            return Err(SemanticValidationError::SnoozeOutOfRange {
                minutes: self.alarm.snooze_minutes,
            });
        }

        if let Some(minutes) = self.clock.utc_offset_minutes {
            if minutes.unsigned_abs() >= 24 * 60 {
                return Err(SemanticValidationError::UtcOffsetOutOfRange { minutes });
            }
        }

        Ok(())
    }
}
