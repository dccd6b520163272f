//! Job that ticks the dashboard.
//!
//! The job runs at the finest cadence of the `[scheduler]` configuration
//! section (the stopwatch interval by default). On every tick the dashboard
//! decides which widgets are due.
//!
//! Refer to [`clock-dashboard-configuration documentation`](clock_dashboard_configuration)
//! for more info about the scheduler options.
use std::sync::Arc;

use clock_dashboard_clock::clock::Time;
use clock_dashboard_configuration::Scheduler;
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::bootstrap::signals::{halt_signal, HaltReceiver};
use crate::core::Dashboard;
use crate::CurrentClock;

/// It starts the job that ticks the dashboard until a halt is received.
#[must_use]
pub fn start_job(config: &Scheduler, dashboard: &Arc<Mutex<Dashboard>>, rx_halt: HaltReceiver) -> JoinHandle<()> {
    let weak_dashboard = Arc::downgrade(dashboard);
    let resolution = config.resolution();

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(resolution);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let halted = halt_signal(rx_halt);
        tokio::pin!(halted);

        tracing::info!("Ticking the dashboard every {resolution:?}");

        loop {
            tokio::select! {
                halted = &mut halted => {
                    tracing::info!("Stopping the scheduler job ({halted})..");
                    break;
                }
                _ = interval.tick() => {
                    if let Some(dashboard) = weak_dashboard.upgrade() {
                        dashboard.lock().tick(CurrentClock::now());
                    } else {
                        break;
                    }
                }
            }
        }
    })
}
