// Rust guideline compliant 2026-10-18

//! Diagnostic log output for the CLI.
//!
//! Logs always go to stderr; stdout is reserved for the resolved ID line.

use tracing::Level;
use tracing_subscriber::fmt;

/// Installs the global tracing subscriber.
///
/// # Arguments
///
/// * `level` - Maximum level to emit, usually from `Config::level`
pub fn init_tracing(level: Level) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    // A subscriber may already be installed when embedded in tests.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
