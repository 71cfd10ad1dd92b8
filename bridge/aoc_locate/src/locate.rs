//! Mapping source files to compiled artifacts.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::config::LocatorConfig;
use crate::error::LocateError;
use crate::manifest::read_package_name;
use crate::walk::SourceFiles;

/// A source file paired with the artifact compiled from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocatedModule {
    /// Path of the source file, as found by the walk.
    pub source: PathBuf,
    /// Path of the compiled artifact, relative to the importing module.
    pub artifact: PathBuf,
}

/// Locates compiled modules for the sources of a Gleam project.
///
/// `src/`, the manifest and the walk are resolved against `root`. Artifact
/// paths are not: they are built from [`LocatorConfig::dist_prefix`] alone,
/// because they are meant to be imported relative to the module doing the
/// importing, not the project root.
#[derive(Clone, Debug)]
pub struct Locator {
    config: LocatorConfig,
    root: PathBuf,
}

impl Locator {
    /// Create a locator rooted at the current directory.
    pub fn new(config: LocatorConfig) -> Self {
        Locator {
            config,
            root: PathBuf::from("."),
        }
    }

    /// Resolve sources and the manifest against `root` instead.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read the package name. Re-read on every call.
    pub fn package_name(&self) -> Result<String, LocateError> {
        let manifest = self.root.join(&self.config.manifest);
        Ok(read_package_name(&manifest)?)
    }

    /// `<dist_prefix>/<package>/dist`.
    pub fn dist_root(&self, package: &str) -> PathBuf {
        self.config.dist_prefix.join(package).join("dist")
    }

    /// The source root as seen from the locator root.
    pub fn source_root(&self) -> PathBuf {
        self.root.join(&self.config.source_root)
    }

    /// Lazily walk the source files below `<source_root>/<subpath>`.
    pub fn source_files(&self, subpath: impl AsRef<Path>) -> SourceFiles {
        let dir = self.source_root().join(subpath);
        SourceFiles::new(&dir, &self.config.source_ext)
    }

    /// Locate every source file below `subpath` together with its artifact.
    pub fn locate(&self, subpath: impl AsRef<Path>) -> Result<Vec<LocatedModule>, LocateError> {
        let subpath = subpath.as_ref();
        let package = self.package_name()?;
        let dist_root = self.dist_root(&package);
        let source_root = self.source_root();

        let mut modules = Vec::new();
        for source in self.source_files(subpath) {
            let source = source?;
            let artifact = artifact_path(
                &dist_root,
                &source_root,
                &source,
                &self.config.source_ext,
                &self.config.artifact_ext,
            )?;
            modules.push(LocatedModule { source, artifact });
        }

        if self.config.sort {
            modules.sort_by(|a, b| a.artifact.cmp(&b.artifact));
        }

        tracing::debug!(
            subpath = %subpath.display(),
            package = %package,
            count = modules.len(),
            "located modules"
        );
        Ok(modules)
    }

    /// Artifact paths for every source file below `subpath`.
    ///
    /// One path per source file, in walk order unless sorting is configured.
    pub fn find_modules(&self, subpath: impl AsRef<Path>) -> Result<Vec<PathBuf>, LocateError> {
        Ok(self
            .locate(subpath)?
            .into_iter()
            .map(|module| module.artifact)
            .collect())
    }
}

impl Default for Locator {
    fn default() -> Self {
        Self::new(LocatorConfig::default())
    }
}

/// [`Locator::find_modules`] with the default configuration in the current
/// directory.
pub fn find_modules(subpath: impl AsRef<Path>) -> Result<Vec<PathBuf>, LocateError> {
    Locator::default().find_modules(subpath)
}

/// Derive the artifact path of `source`.
///
/// Strips `source_root` from the front of `source` and joins the rest onto
/// `dist_root`. The trailing `.<source_ext>` of the file name is replaced by
/// `.<artifact_ext>`; directory names are left alone. So `src/day1/a.gleam`
/// becomes `<dist_root>/day1/a.<artifact_ext>`, and with a source extension
/// of `test.gleam`, `solve.test.gleam` becomes `solve.<artifact_ext>`.
pub fn artifact_path(
    dist_root: &Path,
    source_root: &Path,
    source: &Path,
    source_ext: &str,
    artifact_ext: &str,
) -> Result<PathBuf, LocateError> {
    let relative = source
        .strip_prefix(source_root)
        .map_err(|_| LocateError::OutsideSourceRoot {
            path: source.to_path_buf(),
            root: source_root.to_path_buf(),
        })?;

    let suffix = format!(".{source_ext}");
    let mut name = relative
        .file_name()
        .and_then(|name| strip_name_suffix(name, &suffix))
        .ok_or_else(|| LocateError::NotASource {
            path: source.to_path_buf(),
            extension: source_ext.to_string(),
        })?;
    name.push(".");
    name.push(artifact_ext);

    Ok(dist_root.join(relative).with_file_name(name))
}

/// `name` without `suffix`, or `None` if it does not end with it.
fn strip_name_suffix(name: &OsStr, suffix: &str) -> Option<OsString> {
    match name.to_str() {
        Some(name) => name.strip_suffix(suffix).map(OsString::from),
        None => strip_encoded_suffix(name, suffix),
    }
}

#[cfg(unix)]
fn strip_encoded_suffix(name: &OsStr, suffix: &str) -> Option<OsString> {
    use std::os::unix::ffi::OsStrExt;

    name.as_bytes()
        .strip_suffix(suffix.as_bytes())
        .map(|stem| OsStr::from_bytes(stem).to_os_string())
}

// Non-UTF-8 names elsewhere are unpaired surrogates; keep the lossy stem.
#[cfg(not(unix))]
fn strip_encoded_suffix(name: &OsStr, suffix: &str) -> Option<OsString> {
    name.to_string_lossy()
        .strip_suffix(suffix)
        .map(OsString::from)
}
