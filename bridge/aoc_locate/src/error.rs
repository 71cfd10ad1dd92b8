//! Locator errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure reading the package name from the manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// No `name = "..."` line in the manifest.
    #[error("could not determine package name from {}", .path.display())]
    MissingName { path: PathBuf },
}

/// Failure locating modules.
///
/// Filesystem errors keep the original [`io::Error`] and add the path that
/// was being read.
#[derive(Debug, Error)]
pub enum LocateError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not under source root {}", .path.display(), .root.display())]
    OutsideSourceRoot { path: PathBuf, root: PathBuf },
    /// The file name does not end with the source extension.
    #[error("{} does not end with .{extension}", .path.display())]
    NotASource { path: PathBuf, extension: String },
}

impl LocateError {
    #[cold]
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LocateError::Io {
            path: path.into(),
            source,
        }
    }

    /// The underlying I/O error kind, if this is a filesystem failure.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            LocateError::Io { source, .. }
            | LocateError::Manifest(ManifestError::Io { source, .. }) => Some(source.kind()),
            LocateError::Manifest(ManifestError::MissingName { .. })
            | LocateError::OutsideSourceRoot { .. }
            | LocateError::NotASource { .. } => None,
        }
    }
}
