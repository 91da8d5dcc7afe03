// Rust guideline compliant 2026-10-18

//! sysres Core Library
//!
//! This crate provides the building blocks for resolving system display names
//! to system IDs:
//! - Data models (SystemRecord, Collection, Inventory)
//! - Inventory and target list loading
//! - Record parsing strategies (structured decode, pattern fallback)
//! - Matching across owned and shared collections
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod models;
pub mod record;

pub use config::Config;
pub use error::{Error, Result};
pub use loader::{load_inventory, parse_inventory, parse_targets};
pub use matcher::{
    resolve_all, resolve_name, sample_display_names, search_collection, NoopObserver,
    ResolveObserver,
};
pub use models::{Collection, Inventory, Match, MatchStrategy, Resolution, SystemKey, SystemRecord};
pub use record::ParsedRecord;
