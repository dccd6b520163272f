//! Signals that stop the application jobs.
//!
//! The main task waits for the process shutdown signal once and then sends
//! a halt to every job. A job waits for the halt with a future created before
//! its loop, so a halt sent while the job is busy is seen on the next pass.
use derive_more::Display;
use tokio::sync::watch;

/// This is the message that the jobs receive from the main application
/// process to stop.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum Halted {
    Normal,
}

pub type HaltSender = watch::Sender<Option<Halted>>;
pub type HaltReceiver = watch::Receiver<Option<Halted>>;

/// A channel with no halt sent yet. Receivers can be cloned for each job.
#[must_use]
pub fn halt_channel() -> (HaltSender, HaltReceiver) {
    watch::channel(None)
}

/// Resolves on `ctrl_c` or the `terminate` signal.
///
/// # Panics
///
/// Will panic if the `ctrl_c` or `terminate` signal resolves with an error.
pub async fn global_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {}
    }
}

/// Resolves once a halt has been sent, even before this call, or when the
/// sender is dropped.
pub async fn halt_signal(mut rx_halt: HaltReceiver) -> Halted {
    let halted = match rx_halt.wait_for(Option::is_some).await {
        Ok(halted) => halted.unwrap_or(Halted::Normal),
        Err(_) => Halted::Normal,
    };

    halted
}
