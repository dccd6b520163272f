//! Key-value store for the dashboard preferences.
//!
//! The dashboard only needs to read and write a string by key. Values are
//! JSON documents built by the [`settings`](crate::core::settings) module; the
//! store does not look inside them.
//!
//! There are two implementations:
//!
//! - [`InMemory`](crate::core::store::memory::InMemory): a map that lives as
//!   long as the process.
//! - [`JsonFile`](crate::core::store::json_file::JsonFile): a JSON object in
//!   a file, one member per key.
//!
//! Use [`driver::build`](crate::core::store::driver::build) to get the one
//! selected in the `[storage]` configuration section.
pub mod driver;
pub mod error;
pub mod json_file;
pub mod memory;

#[cfg(test)]
use mockall::automock;

use self::error::Error;

/// The persistence trait. Calls are synchronous and must not block for long.
#[cfg_attr(test, automock)]
pub trait Store: Sync + Send {
    /// It returns the value stored under `key`, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend can not be read.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// It stores `value` under `key`, replacing the previous value.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend can not be written.
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
}
