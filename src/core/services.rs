//! Dashboard domain services.
use std::sync::Arc;

use clock_dashboard_configuration::Configuration;

use super::display::{DisplaySink, Notifier};
use super::store;
use super::Dashboard;

/// It returns a new dashboard building its store from the `[storage]`
/// configuration.
#[must_use]
pub fn dashboard_factory(config: &Configuration, display: Arc<dyn DisplaySink>, notifier: Arc<dyn Notifier>) -> Dashboard {
    let store = store::driver::build(config.storage.driver, &config.storage.path);

    Dashboard::new(config, store, display, notifier)
}
