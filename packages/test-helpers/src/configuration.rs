use std::env;

use camino::Utf8PathBuf;
use clock_dashboard_configuration::{Configuration, Threshold};
use clock_dashboard_primitives::StoreDriver;

use crate::random;

/// This configuration is used for testing. The settings file is a random
/// path in the temp directory so tests do not share persisted preferences,
/// and the wall clock is pinned to UTC so readings do not depend on the host.
///
/// # Panics
///
/// Will panic if the temp directory is not an UTF-8 path.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    // Change to `debug` for tests debugging
    config.logging.threshold = Threshold::Off;

    config.clock.utc_offset_minutes = Some(0);

    let temp_file = env::temp_dir().join(format!("settings_{}.json", random::string(16)));
    config.storage.path = Utf8PathBuf::from_path_buf(temp_file).expect("Temp dir should be an UTF-8 path");

    config
}

/// Ephemeral configuration using the 24-hour convention.
#[must_use]
pub fn ephemeral_with_24_hour_clock() -> Configuration {
    let mut config = ephemeral();
    config.clock.use_24_hour = true;
    config
}

/// Ephemeral configuration keeping the preferences in memory.
#[must_use]
pub fn ephemeral_with_memory_store() -> Configuration {
    let mut config = ephemeral();
    config.storage.driver = StoreDriver::Memory;
    config
}
