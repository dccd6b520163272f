//! Setup for the main dashboard application.
//!
//! The [`setup`] only builds the application and its dependencies but it
//! does not start the application. In fact, there is no such thing as
//! starting the application process: the dashboard is driven by the jobs
//! that [`app::start`](crate::app::start) launches.
//!
//! The setup process is:
//!
//! 1. Load the configuration.
//! 2. Initialize static variables.
//! 3. Initialize logging.
//! 4. Build the dashboard with its store, display and notifier.
use std::sync::Arc;

use clock_dashboard_clock::static_time;
use clock_dashboard_configuration::Configuration;
use parking_lot::Mutex;
use tracing::info;

use super::config::initialize_configuration;
use crate::bootstrap;
use crate::console::tracing_display::{TracingDisplay, TracingNotifier};
use crate::core::services::dashboard_factory;
use crate::core::Dashboard;

/// It loads the configuration from the environment and builds the main
/// domain [`Dashboard`] struct.
#[must_use]
pub fn setup() -> (Configuration, Arc<Mutex<Dashboard>>) {
    let configuration = initialize_configuration();
    let dashboard = initialize_with_configuration(&configuration);

    info!("Configuration:\n{}", configuration.to_toml().unwrap_or_default());

    (configuration, dashboard)
}

/// It initializes the application with the given configuration.
///
/// The configuration may be obtained from the environment (via config file
/// or env vars).
#[must_use]
pub fn initialize_with_configuration(configuration: &Configuration) -> Arc<Mutex<Dashboard>> {
    initialize_static();
    initialize_logging(configuration);
    Arc::new(Mutex::new(initialize_dashboard(configuration)))
}

/// It initializes the application static values.
///
/// These values are accessible throughout the entire application:
///
/// - The time when the application started.
pub fn initialize_static() {
    // Set the time of the dashboard session starting
    lazy_static::initialize(&static_time::TIME_AT_SESSION_START);
}

/// It builds the dashboard showing its output through `tracing`.
#[must_use]
pub fn initialize_dashboard(config: &Configuration) -> Dashboard {
    dashboard_factory(config, Arc::new(TracingDisplay), Arc::new(TracingNotifier))
}

/// It initializes the log threshold, format and channel.
///
/// See [the logging setup](crate::bootstrap::logging::setup) for more info
/// about logging.
pub fn initialize_logging(config: &Configuration) {
    bootstrap::logging::setup(config);
}
