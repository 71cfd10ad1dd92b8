//! Command handlers for the `aocr` CLI.
//!
//! Each submodule implements one command. Option parsing shared by all of
//! them lives in `options`.

mod locate;
mod options;
mod package;

pub use locate::{list_exports, locate_modules};
pub use options::{parse_locate_args, LocateOptions};
pub use package::print_package;

use aoc_locate::LocateError;

/// Print a locator error and exit with status 1.
pub(crate) fn fail(err: &LocateError) -> ! {
    eprintln!("error: {err}");
    if let Some(source) = std::error::Error::source(err) {
        eprintln!("  caused by: {source}");
    }
    std::process::exit(1);
}
