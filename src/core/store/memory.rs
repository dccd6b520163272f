//! Store that keeps the values in memory.
use std::collections::HashMap;

use parking_lot::Mutex;

use super::error::Error;
use super::Store;

#[derive(Debug, Default)]
pub struct InMemory {
    values: Mutex<HashMap<String, String>>,
}

impl InMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for InMemory {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.values.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
