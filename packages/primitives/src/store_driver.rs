//! Backends for the preferences store.
use serde::{Deserialize, Serialize};

/// The backend where the dashboard keeps its preferences.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Clone, Copy, Default, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum StoreDriver {
    /// Preferences only live as long as the process.
    #[display("memory")]
    Memory,
    /// Preferences are kept in a JSON file.
    #[default]
    #[display("json_file")]
    JsonFile,
}
