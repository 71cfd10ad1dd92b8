//! Flags shared by the locator commands.

use std::path::PathBuf;

use aoc_locate::{Locator, LocatorConfig};

/// Options for `locate`, `exports` and `package`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocateOptions {
    /// Project root (`--root=<dir>`); the current directory when unset.
    pub root: Option<PathBuf>,
    pub config: LocatorConfig,
}

impl LocateOptions {
    pub fn locator(&self) -> Locator {
        let locator = Locator::new(self.config.clone());
        match &self.root {
            Some(root) => locator.with_root(root),
            None => locator,
        }
    }
}

/// Parse command arguments into options and an optional positional subpath.
///
/// Flags may appear before or after the subpath. A second positional argument
/// or an unknown flag is an error.
pub fn parse_locate_args(args: &[String]) -> Result<(Option<String>, LocateOptions), String> {
    let mut subpath = None;
    let mut options = LocateOptions::default();

    for arg in args {
        if let Some(root) = arg.strip_prefix("--root=") {
            options.root = Some(PathBuf::from(root));
        } else if arg == "--sort" {
            options.config.sort = true;
        } else if let Some(ext) = arg.strip_prefix("--source-ext=") {
            options.config = options.config.with_source_ext(ext);
        } else if let Some(ext) = arg.strip_prefix("--artifact-ext=") {
            options.config = options.config.with_artifact_ext(ext);
        } else if let Some(prefix) = arg.strip_prefix("--dist-prefix=") {
            options.config = options.config.with_dist_prefix(prefix);
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if subpath.is_none() {
            subpath = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    Ok((subpath, options))
}
