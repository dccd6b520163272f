//! User commands accepted by the [`Dashboard`](crate::core::Dashboard).
use clock_dashboard_primitives::Theme;

use super::settings::Shortcut;
use super::weather::Report;

#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    // Stopwatch
    StartStopwatch,
    StopStopwatch,
    /// The start/stop button.
    ToggleStopwatch,
    Lap,
    ResetStopwatch,

    // Countdown
    StartCountdown { minutes: i64, seconds: i64 },
    PauseCountdown,
    ResumeCountdown,
    /// The pause/resume button.
    TogglePauseCountdown,
    ResetCountdown,

    // Alarm
    /// `None` when the user did not pick a time.
    SetAlarm(Option<String>),
    CancelAlarm,
    Snooze,

    // Clock preferences
    SetTheme(Theme),
    ToggleFormat,
    ToggleDarkMode,
    Shortcut(Shortcut),

    // Weather
    /// Conditions fetched by the host.
    ShowWeather(Report),
}
