//! **Clock Dashboard** is a live clock combined with an alarm, a stopwatch, a
//! countdown timer and a weather summary.
//!
//! # Table of contents
//!
//! - [Features](#features)
//! - [Usage](#usage)
//! - [Configuration](#configuration)
//! - [Components](#components)
//! - [Implementation](#implementation)
//!
//! # Features
//!
//! - Wall clock with the 12 or 24-hour convention and the long date line.
//! - Daily alarm with snooze, kept between sessions.
//! - Stopwatch with centisecond resolution and lap splits.
//! - Countdown timer with pause and warning/danger zones.
//! - Weather summary for a report supplied by the host.
//! - Dark mode and background themes, kept between sessions.
//!
//! # Usage
//!
//! ```text
//! cargo run
//! ```
//!
//! The binary reads one command per line from the standard input, for
//! example `timer 1 30` or `alarm 07:00`. Type `help` for the list. The
//! dashboard output is emitted as log events:
//!
//! ```text
//! CLOCK_DASHBOARD_CONFIG_OVERRIDE_LOGGING__THRESHOLD=debug cargo run
//! ```
//!
//! # Configuration
//!
//! The default configuration file is `./share/default/config/dashboard.toml`.
//! A missing file means the default values. Refer to the
//! [configuration package](clock_dashboard_configuration) for all the options
//! and the environment variables.
//!
//! # Components
//!
//! ```text
//! bootstrap ----> jobs (scheduler, console) ----> core::Dashboard
//!                                                   |   |   |
//!                              formatter  stopwatch  countdown  alarm  weather
//!                                                   |
//!                                  store (memory, json file)
//! ```
//!
//! - [`core`]: the widgets logic, independent of the host.
//! - [`console`]: the console host, command parsing and `tracing` output.
//! - [`bootstrap`]: configuration, logging and the jobs that drive the
//!   dashboard.
//!
//! # Implementation
//!
//! Time comes from the [`clock_dashboard_clock`] package. Production code
//! uses the system clock; tests use a stopped clock that can be set and
//! moved forward, so every timing scenario is deterministic.
use clock_dashboard_clock::clock;

pub mod app;
pub mod bootstrap;
pub mod console;
pub mod core;

/// This code needs to be copied into each crate.
/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Stopped;
