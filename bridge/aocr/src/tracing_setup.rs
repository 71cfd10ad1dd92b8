//! Tracing initialisation for the CLI.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=aoc_locate=debug` or `RUST_LOG=aoc_invoke=trace`.
/// Set `AOCR_LOG_TREE` for indented, span-aware output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        if std::env::var_os("AOCR_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
