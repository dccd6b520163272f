//! Dashboard preferences and their persistence.
//!
//! There are two groups of preferences, each one stored as a JSON document
//! under its own key:
//!
//! Key | Type | Example
//! ---|---|---
//! `clock_settings` | [`ClockSettings`] | `{"use_24_hour":false,"dark_mode":true,"theme":"gradient-blue"}`
//! `alarm_settings` | [`AlarmSettings`] | `{"alarm_time":"07:00","active":true}`
//!
//! Loading never fails. A missing key yields the defaults; a value that can't
//! be read or parsed is logged and replaced by the defaults. Saving errors are
//! logged too: losing a preference must not abort the user operation that
//! changed it.
use std::sync::Arc;

use clock_dashboard_configuration::Clock;
use clock_dashboard_primitives::{HourMinute, Theme};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::store::Store;

pub const CLOCK_SETTINGS_KEY: &str = "clock_settings";
pub const ALARM_SETTINGS_KEY: &str = "alarm_settings";

/// Wall clock preferences.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(default)]
pub struct ClockSettings {
    pub use_24_hour: bool,
    pub dark_mode: bool,
    pub theme: Theme,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            use_24_hour: false,
            dark_mode: true,
            theme: Theme::default(),
        }
    }
}

impl From<&Clock> for ClockSettings {
    fn from(config: &Clock) -> Self {
        Self {
            use_24_hour: config.use_24_hour,
            dark_mode: config.dark_mode,
            theme: config.theme,
        }
    }
}

impl ClockSettings {
    pub fn toggle_format(&mut self) {
        self.use_24_hour = !self.use_24_hour;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn apply(&mut self, shortcut: Shortcut) {
        match shortcut {
            Shortcut::ToggleDarkMode => self.toggle_dark_mode(),
            Shortcut::ToggleFormat => self.toggle_format(),
        }
    }
}

/// Single-key shortcuts for the clock preferences.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Shortcut {
    /// `t` or `T`.
    ToggleDarkMode,
    /// `f` or `F`.
    ToggleFormat,
}

impl Shortcut {
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            't' => Some(Self::ToggleDarkMode),
            'f' => Some(Self::ToggleFormat),
            _ => None,
        }
    }
}

/// Alarm preferences. A ringing alarm is saved as active: ringing itself is
/// never persisted.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
#[serde(default)]
pub struct AlarmSettings {
    pub alarm_time: Option<HourMinute>,
    pub active: bool,
}

/// It loads and saves the preferences in a [`Store`].
pub struct SettingsStore {
    store: Arc<dyn Store>,
    clock_defaults: ClockSettings,
}

impl SettingsStore {
    /// `clock_defaults` are returned when there are no stored clock settings.
    #[must_use]
    pub fn new(store: Arc<dyn Store>, clock_defaults: ClockSettings) -> Self {
        Self { store, clock_defaults }
    }

    #[must_use]
    pub fn load_clock_settings(&self) -> ClockSettings {
        self.load(CLOCK_SETTINGS_KEY, self.clock_defaults)
    }

    pub fn save_clock_settings(&self, settings: &ClockSettings) {
        self.save(CLOCK_SETTINGS_KEY, settings);
    }

    #[must_use]
    pub fn load_alarm_settings(&self) -> AlarmSettings {
        self.load(ALARM_SETTINGS_KEY, AlarmSettings::default())
    }

    pub fn save_alarm_settings(&self, settings: &AlarmSettings) {
        self.save(ALARM_SETTINGS_KEY, settings);
    }

    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let value = match self.store.get(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!("no {key} stored, using the defaults");
                return default;
            }
            Err(err) => {
                warn!("unable to read {key}: {err}. Using the defaults");
                return default;
            }
        };

        match serde_json::from_str(&value) {
            Ok(settings) => settings,
            Err(err) => {
                warn!("the stored {key} are corrupt: {err}. Using the defaults");
                default
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, settings: &T) {
        let value = match serde_json::to_string(settings) {
            Ok(value) => value,
            Err(err) => {
                warn!("unable to encode {key}: {err}");
                return;
            }
        };

        if let Err(err) = self.store.set(key, &value) {
            warn!("unable to save {key}: {err}");
        }
    }
}
