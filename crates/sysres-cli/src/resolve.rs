// Rust guideline compliant 2026-10-18

//! Implementation of the resolve command.
//!
//! Loads the inventory and target list, resolves every name with progress on
//! the diagnostic stream, and reports either the comma-joined IDs or the
//! missing names with a sample of what is available.

use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use sysres_core::{
    load_inventory, parse_targets, resolve_all, sample_display_names, Collection, Error,
    Inventory, Match, MatchStrategy, ResolveObserver,
};

/// Inputs of a single resolve run.
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    /// Path to the pre-fetched inventory JSON file.
    pub json_file: PathBuf,
    /// JSON array of display names to resolve.
    pub targets_json: String,
    /// Sample size per collection in the failure listing.
    pub max_display: usize,
}

/// Writes per-target progress lines to the diagnostic stream.
struct ProgressObserver<'w> {
    err: &'w mut dyn Write,
}

impl ResolveObserver for ProgressObserver<'_> {
    fn searching(&mut self, target: &str) {
        let _ = writeln!(self.err, "Searching for: {}", target);
    }

    fn found(&mut self, target: &str, found: &Match) {
        let via = match found.strategy {
            MatchStrategy::Structured => "",
            MatchStrategy::Fallback => " (regex)",
        };
        let _ = writeln!(
            self.err,
            "✓ Found '{}' in {} systems{}: {}",
            target, found.collection, via, found.system_id
        );
    }

    fn missing(&mut self, target: &str) {
        let _ = writeln!(self.err, "✗ System \"{}\" not found", target);
    }
}

/// Runs a resolve request.
///
/// # Arguments
///
/// * `request` - Inventory path, target list and listing size
/// * `out` - Receives the comma-joined ID line on success only
/// * `err` - Receives progress and diagnostics
///
/// # Returns
///
/// Ok if every target resolved, Err otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - The inventory file is missing or not valid JSON
/// - The target list is not a JSON array of strings
/// - One or more targets did not resolve ([`Error::Unresolved`]; the missing
///   names and available systems have already been written to `err`)
pub fn execute(request: &ResolveRequest, out: &mut dyn Write, err: &mut dyn Write) -> Result<()> {
    let inventory = load_inventory(&request.json_file)?;
    let targets = parse_targets(&request.targets_json)?;
    tracing::info!(
        own = inventory.own.len(),
        shared = inventory.shared.len(),
        targets = targets.len(),
        "loaded inventory"
    );

    writeln!(err, "Target systems: {:?}", targets)?;

    let resolution = resolve_all(&inventory, &targets, &mut ProgressObserver { err: &mut *err });

    match resolution.into_ids() {
        Ok(ids) => {
            writeln!(
                err,
                "✓ Successfully resolved all {} system name(s)",
                ids.len()
            )?;
            writeln!(out, "{}", ids.join(","))?;
            Ok(())
        }
        Err(Error::Unresolved(missing)) => {
            writeln!(
                err,
                "✗ Failed to resolve {} system(s): {:?}",
                missing.len(),
                missing
            )?;
            write_available(&inventory, request.max_display, err)?;
            Err(Error::Unresolved(missing).into())
        }
        Err(other) => Err(other.into()),
    }
}

/// Writes up to `max_display` sample names per collection.
fn write_available(inventory: &Inventory, max_display: usize, err: &mut dyn Write) -> Result<()> {
    for collection in Collection::SEARCH_ORDER {
        writeln!(
            err,
            "Available {} systems (first {}):",
            collection, max_display
        )?;
        for name in sample_display_names(inventory.records(collection), max_display) {
            writeln!(err, "  - {}", name)?;
        }
    }
    Ok(())
}
