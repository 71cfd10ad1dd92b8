//! `aocr` CLI.
//!
//! Lists the compiled modules of a Gleam Advent of Code project.

use aocr::commands::{list_exports, locate_modules, parse_locate_args, print_package};
use aocr::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "locate" | "exports" => {
            let (subpath, options) = match parse_locate_args(&args[2..]) {
                Ok(parsed) => parsed,
                Err(message) => {
                    eprintln!("error: {message}");
                    std::process::exit(1);
                }
            };
            let Some(subpath) = subpath else {
                eprintln!("Usage: aocr {command} <subpath> [options]");
                eprintln!();
                eprintln!("Example: aocr {command} day1");
                std::process::exit(1);
            };

            if command == "locate" {
                locate_modules(&subpath, &options);
            } else {
                list_exports(&subpath, &options);
            }
        }
        "package" => {
            let options = match parse_locate_args(&args[2..]) {
                Ok((None, options)) => options,
                Ok((Some(extra), _)) => {
                    eprintln!("error: unexpected argument '{extra}'");
                    std::process::exit(1);
                }
                Err(message) => {
                    eprintln!("error: {message}");
                    std::process::exit(1);
                }
            };
            print_package(&options);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("aocr {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("aocr - locate compiled Gleam modules");
    println!();
    println!("Usage: aocr <command> [options]");
    println!();
    println!("Commands:");
    println!("  locate <subpath>     Print the artifact path of every source below src/<subpath>");
    println!("  exports <subpath>    Print each source file with its artifact path");
    println!("  package              Print the package name from gleam.toml");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --root=<dir>         Project root (default: current directory)");
    println!("  --sort               Sort results by path");
    println!("  --source-ext=<ext>   Source extension (default: gleam)");
    println!("  --artifact-ext=<ext> Artifact extension (default: mjs)");
    println!("  --dist-prefix=<dir>  Prefix before <package>/dist (default: ../..)");
    println!();
    println!("Set RUST_LOG=debug for diagnostics.");
}
