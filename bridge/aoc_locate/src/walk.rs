//! Lazy depth-first walk over a source tree.
//!
//! The walk keeps one open directory listing per level on an explicit stack.
//! Entries come out in pre-order: when a directory is met, everything below
//! it is yielded before its next sibling. Listing order within a directory is
//! whatever the platform returns.
//!
//! Symlinks are classified by their own file type, so a link to a directory
//! is never descended into and link cycles cannot loop the walk.

use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};

use crate::error::LocateError;

/// Iterator over source files below a root directory.
///
/// Yields one `Ok(path)` per regular entry whose file name ends with
/// `.<extension>`. Read failures are yielded as errors and the walk carries on
/// with the remaining entries. Finite and not restartable.
pub struct SourceFiles {
    stack: Vec<(PathBuf, ReadDir)>,
    suffix: String,
    /// Error opening the root, reported on the first call to `next`.
    pending: Option<LocateError>,
}

impl SourceFiles {
    /// Start a walk at `root` for files ending in `.<extension>`.
    pub fn new(root: &Path, extension: &str) -> Self {
        let mut walk = SourceFiles {
            stack: Vec::new(),
            suffix: format!(".{extension}"),
            pending: None,
        };
        if let Err(err) = walk.descend(root.to_path_buf()) {
            walk.pending = Some(err);
        }
        walk
    }

    fn descend(&mut self, dir: PathBuf) -> Result<(), LocateError> {
        match fs::read_dir(&dir) {
            Ok(entries) => {
                self.stack.push((dir, entries));
                Ok(())
            }
            Err(source) => Err(LocateError::io(dir, source)),
        }
    }

    /// Compares raw name bytes, so names that are not valid UTF-8 still match.
    fn is_source(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name.as_encoded_bytes().ends_with(self.suffix.as_bytes()))
    }
}

impl Iterator for SourceFiles {
    type Item = Result<PathBuf, LocateError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.pending.take() {
            return Some(Err(err));
        }

        loop {
            let next = {
                let (_, entries) = self.stack.last_mut()?;
                entries.next()
            };

            let entry = match next {
                Some(Ok(entry)) => entry,
                Some(Err(source)) => {
                    let dir = self
                        .stack
                        .last()
                        .map(|(dir, _)| dir.clone())
                        .unwrap_or_default();
                    return Some(Err(LocateError::io(dir, source)));
                }
                None => {
                    self.stack.pop();
                    continue;
                }
            };

            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(source) => return Some(Err(LocateError::io(path, source))),
            };

            if file_type.is_dir() {
                if let Err(err) = self.descend(path) {
                    return Some(Err(err));
                }
            } else if self.is_source(&path) {
                tracing::trace!(path = %path.display(), "found source file");
                return Some(Ok(path));
            }
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
