//! Job that reads the user commands from the standard input.
//!
//! Each line is one command. Lines that are not a command are logged and
//! ignored. See [`console::command`](crate::console::command) for the syntax.
//!
//! Reading the standard input blocks and cannot be cancelled, so a dedicated
//! thread reads the lines and forwards them to the job over a channel. The
//! job can stop while the thread is still waiting for input.
use std::io::{self, BufRead};
use std::sync::Arc;
use std::thread;

use clock_dashboard_clock::clock::Time;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::bootstrap::signals::{halt_signal, HaltReceiver};
use crate::console::command;
use crate::core::Dashboard;
use crate::CurrentClock;

pub type Input = mpsc::UnboundedReceiver<io::Result<String>>;

/// It starts the job that applies the commands typed on the console.
///
/// The job ends on a halt or when the standard input is closed.
#[must_use]
pub fn start_job(dashboard: &Arc<Mutex<Dashboard>>, rx_halt: HaltReceiver) -> JoinHandle<()> {
    start_job_with_input(spawn_stdin_reader(), dashboard, rx_halt)
}

/// Same as [`start_job`] reading the lines from `input`. The job ends on a
/// halt or when every sender of `input` is dropped.
#[must_use]
pub fn start_job_with_input(mut input: Input, dashboard: &Arc<Mutex<Dashboard>>, rx_halt: HaltReceiver) -> JoinHandle<()> {
    let weak_dashboard = Arc::downgrade(dashboard);

    tokio::spawn(async move {
        let halted = halt_signal(rx_halt);
        tokio::pin!(halted);

        tracing::info!("Reading commands from the console. Type `help` for the list");

        loop {
            tokio::select! {
                halted = &mut halted => {
                    tracing::info!("Stopping the console job ({halted})..");
                    break;
                }
                line = input.recv() => {
                    let line = match line {
                        Some(Ok(line)) => line,
                        None => {
                            tracing::info!("The console input was closed");
                            break;
                        }
                        Some(Err(err)) => {
                            tracing::error!("Unable to read the console input: {err}");
                            break;
                        }
                    };

                    let Some(dashboard) = weak_dashboard.upgrade() else {
                        break;
                    };

                    command::run_line(&line, &mut dashboard.lock(), CurrentClock::now());
                }
            }
        }
    })
}

/// The thread ends at the end of the input, on a read error, or once the
/// job is gone.
fn spawn_stdin_reader() -> Input {
    let (tx, rx) = mpsc::unbounded_channel();

    let reader = thread::Builder::new().name("console-input".to_owned()).spawn(move || {
        for line in io::stdin().lock().lines() {
            let failed = line.is_err();

            if tx.send(line).is_err() || failed {
                break;
            }
        }
    });

    if let Err(err) = reader {
        tracing::error!("Unable to start the console input thread: {err}");
    }

    rx
}
