//! Configuration data structures for the clock dashboard.
//!
//! The current version for configuration is [`v1`].
//!
//! The configuration is a TOML document. It can be injected in two ways:
//!
//! 1. A file. Its path comes from the `CLOCK_DASHBOARD_CONFIG_TOML_PATH`
//!    environment variable or from the default path passed by the binary.
//! 2. The `CLOCK_DASHBOARD_CONFIG_TOML` environment variable, which contains
//!    the whole document. It has priority over the file.
//!
//! Single options can be overridden with environment variables prefixed with
//! `CLOCK_DASHBOARD_CONFIG_OVERRIDE_`, using `__` to separate sections, for
//! example `CLOCK_DASHBOARD_CONFIG_OVERRIDE_ALARM__SNOOZE_MINUTES=10`.
pub mod v1;
pub mod validator;

use std::env;
use std::panic::Location;
use std::sync::Arc;

use thiserror::Error;

use crate::validator::SemanticValidationError;

// Environment variables

/// The whole `dashboard.toml` file content. It has priority over the config file.
/// Even if the file is not on the default path.
const ENV_VAR_CONFIG_TOML: &str = "CLOCK_DASHBOARD_CONFIG_TOML";

/// The `dashboard.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "CLOCK_DASHBOARD_CONFIG_TOML_PATH";

/// Prefix for the environment variables overriding single options.
pub const CONFIG_OVERRIDE_PREFIX: &str = "CLOCK_DASHBOARD_CONFIG_OVERRIDE_";

/// Separator between sections in the overriding environment variables.
pub const CONFIG_OVERRIDE_SEPARATOR: &str = "__";

pub type Configuration = v1::Configuration;
pub type Logging = v1::logging::Logging;
pub type Threshold = v1::logging::Threshold;
pub type LogStyle = v1::logging::LogStyle;
pub type Clock = v1::clock::Clock;
pub type Scheduler = v1::scheduler::Scheduler;
pub type Alarm = v1::alarm::Alarm;
pub type Countdown = v1::countdown::Countdown;
pub type Storage = v1::storage::Storage;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Build Configuration Info
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to obtain a configuration.
    ///
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(default_config_toml_path: String) -> Result<Self, Error> {
        let env_var_config_toml = ENV_VAR_CONFIG_TOML.to_string();
        let env_var_config_toml_path = ENV_VAR_CONFIG_TOML_PATH.to_string();

        let config_toml = if let Ok(config_toml) = env::var(env_var_config_toml) {
            println!("Loading extra configuration from environment variable:\n {config_toml}");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(env_var_config_toml_path) {
            println!("Loading extra configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            println!("Loading extra configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path
        };

        Ok(Self {
            config_toml,
            config_toml_path,
        })
    }

    /// Info for a configuration given inline, ignoring the environment.
    #[must_use]
    pub fn from_toml(config_toml: &str) -> Self {
        Self {
            config_toml: Some(config_toml.to_owned()),
            config_toml_path: String::new(),
        }
    }
}

/// Errors that can occur when loading or saving the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// The merged configuration sources could not be deserialized.
    #[error("Failed processing the configuration: {source}, {location}")]
    ConfigError {
        source: Arc<figment::Error>,
        location: &'static Location<'static>,
    },

    /// The configuration is well formed but some options are incompatible.
    #[error("The configuration is not valid: {source}, {location}")]
    Invalid {
        source: SemanticValidationError,
        location: &'static Location<'static>,
    },

    #[error("Unable to encode the configuration as TOML: {source}, {location}")]
    UnableToEncode {
        source: Arc<toml::ser::Error>,
        location: &'static Location<'static>,
    },

    #[error("Unable to write the configuration file: {source}, {location}")]
    UnableToWriteConfigFile {
        source: Arc<std::io::Error>,
        location: &'static Location<'static>,
    },
}

impl From<figment::Error> for Error {
    #[track_caller]
    fn from(err: figment::Error) -> Self {
        Self::ConfigError {
            source: Arc::new(err),
            location: Location::caller(),
        }
    }
}

impl From<SemanticValidationError> for Error {
    #[track_caller]
    fn from(err: SemanticValidationError) -> Self {
        Self::Invalid {
            source: err,
            location: Location::caller(),
        }
    }
}

impl From<toml::ser::Error> for Error {
    #[track_caller]
    fn from(err: toml::ser::Error) -> Self {
        Self::UnableToEncode {
            source: Arc::new(err),
            location: Location::caller(),
        }
    }
}

impl From<std::io::Error> for Error {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::UnableToWriteConfigFile {
            source: Arc::new(err),
            location: Location::caller(),
        }
    }
}
