//! Advent of Code runner.
//!
//! Glue between [`aoc_locate`], which finds the compiled module for every
//! Gleam source of a day, and [`aoc_invoke`], which calls exports of those
//! modules by name. The binary exposes the locator side; [`harness`] drives
//! registered modules for test suites.

pub mod commands;
pub mod harness;
pub mod tracing_setup;

pub use harness::{run_located, ModuleRun};
pub use tracing_setup::init_tracing;
