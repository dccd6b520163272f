//! Console host of the dashboard.
//!
//! - [`command`]: parses the lines typed by the user into dashboard commands.
//! - [`tracing_display`]: shows the dashboard output as `tracing` events.
pub mod command;
pub mod tracing_display;
