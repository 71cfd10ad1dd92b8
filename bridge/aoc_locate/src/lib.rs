//! Source discovery for compiled Gleam modules.
//!
//! Walks `src/<subpath>` for `.gleam` files and maps each one to the module
//! the Gleam JavaScript target emits for it under `<package>/dist/`.
//!
//! # Layout
//!
//! ```text
//! gleam.toml                      name = "aoc"
//! src/day1/part1.gleam      ──►   ../../aoc/dist/day1/part1.mjs
//! src/day1/util/grid.gleam  ──►   ../../aoc/dist/day1/util/grid.mjs
//! ```
//!
//! The package name is read from the manifest on every run, so renaming the
//! package never requires restarting a long-lived host.
//!
//! # Ordering
//!
//! Results come back in directory-listing order, which is platform dependent.
//! Set [`LocatorConfig::sort`] when callers need a stable order.

mod config;
mod error;
mod locate;
mod manifest;
mod walk;

pub use config::LocatorConfig;
pub use error::{LocateError, ManifestError};
pub use locate::{artifact_path, find_modules, LocatedModule, Locator};
pub use manifest::{package_name_from_str, read_package_name, MANIFEST_FILE};
pub use walk::SourceFiles;
