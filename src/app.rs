//! Clock dashboard application.
//!
//! The application launches the jobs that drive the dashboard:
//!
//! - Scheduler: ticks the dashboard at the finest configured cadence.
//! - Console: reads the user commands from the standard input.
//!
//! Both jobs run until they receive a halt from the main task.
use std::sync::Arc;

use clock_dashboard_configuration::Configuration;
use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::bootstrap::jobs::{console, scheduler};
use crate::bootstrap::signals::HaltReceiver;
use crate::core::Dashboard;

/// It starts the application jobs and returns their handles.
#[must_use]
pub fn start(config: &Configuration, dashboard: &Arc<Mutex<Dashboard>>, rx_halt: &HaltReceiver) -> Vec<JoinHandle<()>> {
    let jobs = vec![
        scheduler::start_job(&config.scheduler, dashboard, rx_halt.clone()),
        console::start_job(dashboard, rx_halt.clone()),
    ];

    tracing::info!("{} jobs started", jobs.len());

    jobs
}
