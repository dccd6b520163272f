use camino::Utf8PathBuf;
use clock_dashboard_primitives::StoreDriver;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Storage {
    /// Backend used to keep the clock and alarm preferences: `json_file` or
    /// `memory`.
    #[serde(default = "Storage::default_driver")]
    pub driver: StoreDriver,

    /// Path of the JSON file used by the `json_file` driver. Parent
    /// directories are created on the first write.
    #[serde(default = "Storage::default_path")]
    pub path: Utf8PathBuf,
}

impl Default for Storage {
    fn default() -> Self {
        Self {
            driver: Self::default_driver(),
            path: Self::default_path(),
        }
    }
}

impl Storage {
    fn default_driver() -> StoreDriver {
        StoreDriver::JsonFile
    }

    fn default_path() -> Utf8PathBuf {
        Utf8PathBuf::from("./storage/dashboard/settings.json")
    }
}
