//! Application jobs launchers.
//!
//! The main application setup has only two main stages:
//!
//! 1. Setup the domain layer: the dashboard.
//! 2. Launch the jobs that drive it.
//!
//! Both jobs share the dashboard behind a mutex. A command is fully applied
//! before the next tick sees the dashboard, and the other way around.
pub mod console;
pub mod scheduler;
