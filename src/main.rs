use clock_dashboard::bootstrap::signals::{self, Halted};
use clock_dashboard::{app, bootstrap};
use tracing::info;

#[tokio::main]
async fn main() {
    let (config, dashboard) = bootstrap::app::setup();

    let (halt_sender, rx_halt) = signals::halt_channel();

    let jobs = app::start(&config, &dashboard, &rx_halt);

    // handle the signals
    signals::global_shutdown_signal().await;

    info!("Clock dashboard shutting down..");

    halt_sender.send_replace(Some(Halted::Normal));

    // Await for all jobs to shutdown
    futures::future::join_all(jobs).await;
    info!("Clock dashboard successfully shutdown.");
}
