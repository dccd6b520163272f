//! Store that keeps the values in a JSON file.
//!
//! The file holds one JSON object whose members are the keys:
//!
//! ```json
//! {
//!   "alarm_settings": "{\"alarm_time\":\"07:00\",\"active\":true}",
//!   "clock_settings": "{\"use_24_hour\":false,\"dark_mode\":true,\"theme\":\"gradient-blue\"}"
//! }
//! ```
//!
//! A missing file is an empty store. The file and its parent directories are
//! created on the first write. Writes go to a sibling temporary file that is
//! then renamed over the store file, so a crash while writing leaves the
//! previous contents in place.
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;

use camino::{Utf8Path, Utf8PathBuf};
use parking_lot::Mutex;
use tracing::warn;

use super::error::Error;
use super::Store;

type Values = BTreeMap<String, String>;

#[derive(Debug)]
pub struct JsonFile {
    path: Utf8PathBuf,
    /// Serializes the read-modify-write cycle of `set`.
    lock: Mutex<()>,
}

impl JsonFile {
    #[must_use]
    pub fn new(path: &Utf8Path) -> Self {
        Self {
            path: path.to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// The sibling file the new contents are written to before the rename.
    #[must_use]
    pub fn temp_path(&self) -> Utf8PathBuf {
        let file_name = self.path.file_name().unwrap_or("settings.json");
        self.path.with_file_name(format!("{file_name}.tmp"))
    }

    fn read(&self) -> Result<Values, Error> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Values::new()),
            Err(err) => return Err(Error::io(&self.path, err)),
        };

        serde_json::from_str(&contents).map_err(|err| Error::serialization(&self.path, err))
    }

    fn write(&self, values: &Values) -> Result<(), Error> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| Error::io(&self.path, err))?;
        }

        let contents = serde_json::to_string_pretty(values).map_err(|err| Error::serialization(&self.path, err))?;

        let temp_path = self.temp_path();

        fs::write(&temp_path, contents).map_err(|err| Error::io(&temp_path, err))?;
        fs::rename(&temp_path, &self.path).map_err(|err| Error::io(&self.path, err))
    }
}

impl Store for JsonFile {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let _guard = self.lock.lock();

        Ok(self.read()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let _guard = self.lock.lock();

        let mut values = match self.read() {
            Ok(values) => values,
            Err(err @ Error::Serialization { .. }) => {
                warn!("{err}. It will be replaced");
                Values::new()
            }
            Err(err) => return Err(err),
        };

        values.insert(key.to_owned(), value.to_owned());

        self.write(&values)
    }
}
