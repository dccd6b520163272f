use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Alarm {
    /// Minutes the alarm is postponed when it's snoozed.
    #[serde(default = "Alarm::default_snooze_minutes")]
    pub snooze_minutes: u32,
}

impl Default for Alarm {
    fn default() -> Self {
        Self {
            snooze_minutes: Self::default_snooze_minutes(),
        }
    }
}

impl Alarm {
    fn default_snooze_minutes() -> u32 {
        5
    }
}
