mod alarm;
mod console;
mod preferences;
mod timers;
mod weather;

use std::sync::Arc;
use std::time::Duration;

use clock_dashboard::core::command::Command;
use clock_dashboard::core::services::dashboard_factory;
use clock_dashboard::core::Dashboard;
use clock_dashboard_clock::clock::Time;
use clock_dashboard_configuration::Configuration;

use crate::common::clock::advance;
use crate::common::fakes::{RecordingDisplay, RecordingNotifier};
use crate::CurrentClock;

/// A dashboard wired to recording collaborators.
pub struct Environment {
    pub dashboard: Dashboard,
    pub display: Arc<RecordingDisplay>,
    pub notifier: Arc<RecordingNotifier>,
}

impl Environment {
    pub fn new(config: &Configuration) -> Self {
        let display = RecordingDisplay::new();
        let notifier = RecordingNotifier::new();

        let dashboard = dashboard_factory(config, display.clone(), notifier.clone());

        Self {
            dashboard,
            display,
            notifier,
        }
    }

    /// It applies a command at the current stopped time.
    pub fn handle(&mut self, command: Command) {
        self.dashboard
            .handle(command, CurrentClock::now())
            .expect("the command should be accepted");
    }

    /// It ticks at the current stopped time.
    pub fn tick(&mut self) {
        self.dashboard.tick(CurrentClock::now());
    }

    /// It moves the stopped clock forward `duration`, ticking every `step`
    /// like the scheduler job does.
    pub fn run_for(&mut self, duration: Duration, step: Duration) {
        let mut elapsed = Duration::ZERO;

        while elapsed < duration {
            elapsed += step;
            let now = advance(step);
            self.dashboard.tick(now);
        }
    }
}
