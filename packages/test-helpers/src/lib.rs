//! Testing helpers for the clock dashboard.
pub mod configuration;
pub mod random;
