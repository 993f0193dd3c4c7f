// src/lib.rs
// =============================================================================
// Library root. The binary in main.rs is a thin CLI around these modules.
//
// - include: directive -> resolved lines (line ranges, tagged regions)
// - github: fetching raw files, with optional token auth
// - document: expanding every include in a document
// - config: settings shared by the commands
// =============================================================================

pub mod config;
pub mod document;
pub mod github;
pub mod include;

use tracing_subscriber::EnvFilter;

// Sets up logging to stderr
//
// RUST_LOG wins when set; otherwise only warnings are shown, or debug output
// too when `verbose` is on.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
