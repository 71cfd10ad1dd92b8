//! Invoke exported functions of compiled modules by name.
//!
//! A host registers each compiled module under the path it would be imported
//! from (usually an artifact path produced by `aoc_locate`). Callers then ask
//! for `module` + `function` + arguments and get back a future:
//!
//! ```text
//! registry.register_module("../../aoc/dist/day1/solve.mjs", module);
//! let answer = registry.apply("../../aoc/dist/day1/solve.mjs", "part1", args).await?;
//! ```
//!
//! # Loading
//!
//! Modules can be registered eagerly or through an initialiser that runs on
//! first import. Loaded modules are cached and shared; a failed initialiser
//! is retried on the next import.
//!
//! # Errors
//!
//! Lookup failures have fixed variants ([`InvokeError::ModuleNotFound`],
//! [`InvokeError::NotAFunction`]). Errors returned by an export travel back to
//! the caller untouched.

mod error;
mod module;
mod promise;
mod registry;
mod value;

pub use error::InvokeError;
pub use module::{Export, Module, ModuleBuilder};
pub use promise::{promise_of, IntoPending, Outcome, Pending};
pub use registry::{module_key, ModuleRegistry};
pub use value::Value;
