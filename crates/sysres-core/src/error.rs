// Rust guideline compliant 2026-10-18

//! Error types for the sysres core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sysres operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for sysres operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The inventory file does not exist.
    #[error("JSON file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The inventory document could not be decoded.
    #[error("Error loading system data: {0}")]
    Inventory(String),

    /// The target list argument could not be decoded.
    #[error("Error parsing target systems: {0}")]
    Targets(String),

    /// Configuration file or override is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// One or more target names had no matching record.
    #[error("Failed to resolve {} system(s): {:?}", .0.len(), .0)]
    Unresolved(Vec<String>),
}
