use serde::{Deserialize, Serialize};

/// Thresholds for the advisory zones of the countdown timer.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Countdown {
    /// Remaining seconds at or below which the countdown is in the warning
    /// zone.
    #[serde(default = "Countdown::default_warning_threshold_secs")]
    pub warning_threshold_secs: u32,

    /// Remaining seconds at or below which the countdown is in the danger
    /// zone. It supersedes the warning zone for display purposes.
    #[serde(default = "Countdown::default_danger_threshold_secs")]
    pub danger_threshold_secs: u32,
}

impl Default for Countdown {
    fn default() -> Self {
        Self {
            warning_threshold_secs: Self::default_warning_threshold_secs(),
            danger_threshold_secs: Self::default_danger_threshold_secs(),
        }
    }
}

impl Countdown {
    fn default_warning_threshold_secs() -> u32 {
        30
    }

    fn default_danger_threshold_secs() -> u32 {
        10
    }
}
