//! Locator configuration.

use std::path::PathBuf;

use crate::manifest::MANIFEST_FILE;

/// Configuration for the module locator.
///
/// The defaults describe a stock Gleam project built for the JavaScript
/// target and queried from `build/dev/javascript/<package>/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocatorConfig {
    /// Directory holding the sources, relative to the locator root.
    pub source_root: PathBuf,
    /// Extension of source files, without the dot.
    pub source_ext: String,
    /// Extension of compiled artifacts, without the dot.
    pub artifact_ext: String,
    /// Manifest file the package name is read from.
    pub manifest: PathBuf,
    /// Prefix joined in front of `<package>/dist`.
    pub dist_prefix: PathBuf,
    /// Sort results by path instead of keeping directory-listing order.
    pub sort: bool,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        LocatorConfig {
            source_root: PathBuf::from("src"),
            source_ext: "gleam".to_string(),
            artifact_ext: "mjs".to_string(),
            manifest: PathBuf::from(MANIFEST_FILE),
            dist_prefix: PathBuf::from("../.."),
            sort: false,
        }
    }
}

impl LocatorConfig {
    #[must_use]
    pub fn with_source_root(mut self, source_root: impl Into<PathBuf>) -> Self {
        self.source_root = source_root.into();
        self
    }

    #[must_use]
    pub fn with_source_ext(mut self, ext: impl Into<String>) -> Self {
        self.source_ext = strip_dot(ext.into());
        self
    }

    #[must_use]
    pub fn with_artifact_ext(mut self, ext: impl Into<String>) -> Self {
        self.artifact_ext = strip_dot(ext.into());
        self
    }

    #[must_use]
    pub fn with_manifest(mut self, manifest: impl Into<PathBuf>) -> Self {
        self.manifest = manifest.into();
        self
    }

    #[must_use]
    pub fn with_dist_prefix(mut self, prefix: impl Into<PathBuf>) -> Self {
        self.dist_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }
}

/// Accept both `mjs` and `.mjs`.
fn strip_dot(ext: String) -> String {
    match ext.strip_prefix('.') {
        Some(rest) => rest.to_string(),
        None => ext,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_gleam_layout() {
        let config = LocatorConfig::default();
        assert_eq!(config.source_root, PathBuf::from("src"));
        assert_eq!(config.source_ext, "gleam");
        assert_eq!(config.artifact_ext, "mjs");
        assert_eq!(config.manifest, PathBuf::from("gleam.toml"));
        assert_eq!(config.dist_prefix, PathBuf::from("../.."));
        assert!(!config.sort);
    }

    #[test]
    fn test_extensions_accept_leading_dot() {
        let config = LocatorConfig::default()
            .with_source_ext(".gleam")
            .with_artifact_ext(".js");
        assert_eq!(config.source_ext, "gleam");
        assert_eq!(config.artifact_ext, "js");
    }
}
