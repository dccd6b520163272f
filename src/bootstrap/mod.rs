//! Dashboard application bootstrapping.
//!
//! This module includes all the functions to build the application, its
//! dependencies, and run the jobs.
//!
//! Jobs are tasks executed concurrently: the scheduler that ticks the
//! dashboard and the console that reads the user commands. They stop when
//! the main task sends them a halt (see [`signals`]).
pub mod app;
pub mod config;
pub mod jobs;
pub mod logging;
pub mod signals;
