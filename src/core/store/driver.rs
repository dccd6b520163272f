//! Store driver factory.
use std::sync::Arc;

use camino::Utf8Path;
use clock_dashboard_primitives::StoreDriver;
use tracing::info;

use super::json_file::JsonFile;
use super::memory::InMemory;
use super::Store;

/// It builds the store for the given driver. The path is only used by the
/// `json_file` driver.
///
/// ```rust,no_run
/// use camino::Utf8Path;
/// use clock_dashboard::core::store;
/// use clock_dashboard_primitives::StoreDriver;
///
/// let store = store::driver::build(StoreDriver::JsonFile, Utf8Path::new("./storage/dashboard/settings.json"));
/// ```
#[must_use]
pub fn build(driver: StoreDriver, path: &Utf8Path) -> Arc<dyn Store> {
    info!("using the {driver} store");

    match driver {
        StoreDriver::Memory => Arc::new(InMemory::new()),
        StoreDriver::JsonFile => Arc::new(JsonFile::new(path)),
    }
}
