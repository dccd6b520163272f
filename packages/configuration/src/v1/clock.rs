use clock_dashboard_primitives::Theme;
use serde::{Deserialize, Serialize};

/// Defaults for the clock preferences and the time zone of the wall clock.
///
/// The preferences (`use_24_hour`, `dark_mode` and `theme`) are only used the
/// first time the dashboard runs. After that the values persisted in the
/// settings store win.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Clock {
    /// Show the time with the 24-hour convention instead of AM/PM.
    #[serde(default = "Clock::default_use_24_hour")]
    pub use_24_hour: bool,

    #[serde(default = "Clock::default_dark_mode")]
    pub dark_mode: bool,

    /// Background theme, for example `gradient-blue` or `color-purple`.
    #[serde(default = "Clock::default_theme")]
    pub theme: Theme,

    /// Minutes east of UTC used to derive the wall clock. When it's not set
    /// the wall clock follows the host time zone, daylight saving changes
    /// included.
    #[serde(default = "Clock::default_utc_offset_minutes")]
    pub utc_offset_minutes: Option<i32>,
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            use_24_hour: Self::default_use_24_hour(),
            dark_mode: Self::default_dark_mode(),
            theme: Self::default_theme(),
            utc_offset_minutes: Self::default_utc_offset_minutes(),
        }
    }
}

impl Clock {
    fn default_use_24_hour() -> bool {
        false
    }

    fn default_dark_mode() -> bool {
        true
    }

    fn default_theme() -> Theme {
        Theme::GradientBlue
    }

    fn default_utc_offset_minutes() -> Option<i32> {
        None
    }
}
