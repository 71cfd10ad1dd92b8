//! Package name lookup in `gleam.toml`.
//!
//! Only the top-level `name = "..."` line is needed, so this is a line scan
//! rather than a TOML parse. The scanner tolerates whitespace around `name`
//! and `=`, accepts identifiers made of `[a-z0-9_]`, and takes the first
//! matching line. Everything else in the file is ignored, including syntax
//! a real TOML parser would reject.

use std::fs;
use std::path::Path;

use crate::error::ManifestError;

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "gleam.toml";

/// Read the package name from the manifest at `path`.
pub fn read_package_name(path: &Path) -> Result<String, ManifestError> {
    let text = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    package_name_from_str(&text)
        .map(str::to_string)
        .ok_or_else(|| ManifestError::MissingName {
            path: path.to_path_buf(),
        })
}

/// Find the package name in manifest text.
pub fn package_name_from_str(text: &str) -> Option<&str> {
    text.lines().find_map(parse_name_line)
}

fn parse_name_line(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix("name")?;
    let rest = rest.trim_start().strip_prefix('=')?;
    let quoted = rest.trim_start().strip_prefix('"')?;
    let end = quoted.find('"')?;
    let name = &quoted[..end];

    is_package_identifier(name).then_some(name)
}

fn is_package_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}
