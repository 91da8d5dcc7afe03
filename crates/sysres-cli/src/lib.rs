// Rust guideline compliant 2026-10-18

//! sysres CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod logging;
pub mod resolve;

pub use resolve::{execute, ResolveRequest};
