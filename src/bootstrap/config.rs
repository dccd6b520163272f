//! Initialize configuration from file or env var.
//!
//! All environment variables are prefixed with `CLOCK_DASHBOARD_`.
use clock_dashboard_configuration::{Configuration, Info};

// Default values
pub const DEFAULT_PATH_CONFIG: &str = "./share/default/config/dashboard.toml";

/// It loads the application configuration from the environment.
///
/// There are two methods to inject the configuration:
///
/// 1. By using a config file: `dashboard.toml`.
/// 2. Environment variable: `CLOCK_DASHBOARD_CONFIG_TOML`. The variable
///    contains the same contents as the `dashboard.toml` file.
///
/// Environment variable has priority over the config file. A missing config
/// file is not an error: the default configuration is used.
///
/// Refer to the [configuration documentation](clock_dashboard_configuration)
/// for the configuration options.
///
/// # Panics
///
/// Will panic if the configuration can't be loaded or it's not valid.
#[must_use]
pub fn initialize_configuration() -> Configuration {
    let info = Info::new(DEFAULT_PATH_CONFIG.to_string()).expect("the configuration sources should be readable");

    Configuration::load(&info).expect("the configuration should be valid")
}
