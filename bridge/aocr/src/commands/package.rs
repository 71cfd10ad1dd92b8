//! The `package` command.

use super::{fail, LocateOptions};

/// Print the package name from the project manifest.
pub fn print_package(options: &LocateOptions) {
    match options.locator().package_name() {
        Ok(name) => println!("{name}"),
        Err(err) => fail(&err),
    }
}
