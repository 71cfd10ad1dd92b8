//! The `locate` and `exports` commands.

use std::path::Path;

use super::{fail, LocateOptions};

/// Print the artifact path of every source file below `subpath`.
pub fn locate_modules(subpath: &str, options: &LocateOptions) {
    let locator = options.locator();
    match locator.find_modules(subpath) {
        Ok(artifacts) => {
            for artifact in artifacts {
                println!("{}", artifact.display());
            }
        }
        Err(err) => fail(&err),
    }
}

/// Print `source -> artifact` for every source file below `subpath`.
///
/// Sources are shown relative to the project root.
pub fn list_exports(subpath: &str, options: &LocateOptions) {
    let locator = options.locator();
    let located = match locator.locate(subpath) {
        Ok(located) => located,
        Err(err) => fail(&err),
    };

    if located.is_empty() {
        println!("No source files found.");
        return;
    }

    for module in located {
        let source = module
            .source
            .strip_prefix(locator.root())
            .unwrap_or(&module.source);
        println!(
            "{} -> {}",
            display_relative(source),
            module.artifact.display()
        );
    }
}

fn display_relative(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
