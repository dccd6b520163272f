//! The instant the dashboard session started.
use std::time::SystemTime;

lazy_static! {
    /// System time captured the first time it's accessed. The bootstrap
    /// forces it at startup.
    pub static ref TIME_AT_SESSION_START: SystemTime = SystemTime::now();
}
