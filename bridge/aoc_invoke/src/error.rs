//! Invocation errors.

use thiserror::Error;

use crate::value::Value;

/// Failure loading a module or calling one of its exports.
///
/// `Clone + PartialEq` so an error raised by an export can be compared with
/// what the caller eventually receives.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum InvokeError {
    /// No module is registered under the requested path.
    #[error("cannot find module '{module}'")]
    ModuleNotFound { module: String },
    /// The export is missing, or is a constant rather than a function.
    #[error("{module}.{name} is not a function")]
    NotAFunction { module: String, name: String },
    /// A module's initialiser imported that same module.
    #[error("module '{module}' imports itself while initialising")]
    CyclicImport { module: String },
    /// An error value raised by an export or a module initialiser.
    #[error("{0}")]
    Raised(Value),
}

impl InvokeError {
    /// Raise an error carrying a message.
    #[cold]
    pub fn raised(message: impl Into<Value>) -> Self {
        InvokeError::Raised(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, InvokeError::ModuleNotFound { .. })
    }

    pub fn is_not_a_function(&self) -> bool {
        matches!(self, InvokeError::NotAFunction { .. })
    }
}
