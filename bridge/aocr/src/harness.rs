//! Drive every located module of a day through the registry.
//!
//! This is what a test suite does with the two halves: locate the artifacts
//! below `src/<day>`, then call the same export on each one.

use std::path::{Path, PathBuf};

use aoc_invoke::{ModuleRegistry, Outcome, Value};
use aoc_locate::{LocateError, Locator};

/// Outcome of calling the export of one located module.
#[derive(Debug, PartialEq)]
pub struct ModuleRun {
    pub artifact: PathBuf,
    pub outcome: Outcome,
}

impl ModuleRun {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Apply `function` to every module located below `subpath`, in locator order.
///
/// Calls run one after another. Locator failures abort the run; each
/// module's outcome, including a module that was never registered, is
/// reported in its own [`ModuleRun`].
pub async fn run_located(
    locator: &Locator,
    registry: &ModuleRegistry,
    subpath: impl AsRef<Path>,
    function: &str,
    args: &[Value],
) -> Result<Vec<ModuleRun>, LocateError> {
    let artifacts = locator.find_modules(subpath)?;
    let mut runs = Vec::with_capacity(artifacts.len());

    for artifact in artifacts {
        let key = artifact.to_string_lossy().into_owned();
        let outcome = registry.apply(&key, function, args.to_vec()).await;
        match &outcome {
            Ok(value) => tracing::debug!(module = %key, function, %value, "module returned"),
            Err(err) => tracing::debug!(module = %key, function, error = %err, "module failed"),
        }
        runs.push(ModuleRun { artifact, outcome });
    }

    Ok(runs)
}
