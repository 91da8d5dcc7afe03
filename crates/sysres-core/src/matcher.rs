// Rust guideline compliant 2026-10-18

//! Display-name matching across the owned and shared collections.
//!
//! Matching is exact and first-hit: records are scanned in input order, the
//! owned collection before the shared one, and the first record whose display
//! name equals the target wins.

use crate::models::{Collection, Inventory, Match, MatchStrategy, Resolution};
use crate::record::{extract_display_name, extract_system_name, ParsedRecord};
use serde_json::Value;

/// Receives progress events while a target list is resolved.
pub trait ResolveObserver {
    /// Called before a target is searched.
    fn searching(&mut self, _target: &str) {}

    /// Called when a target resolves.
    fn found(&mut self, _target: &str, _found: &Match) {}

    /// Called when no collection holds the target.
    fn missing(&mut self, _target: &str) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ResolveObserver for NoopObserver {}

/// Searches one collection for a display name.
///
/// # Arguments
///
/// * `records` - Raw records of the collection, in input order
/// * `target` - Display name to look for (compared exactly)
/// * `collection` - Which collection `records` belongs to
///
/// # Returns
///
/// The first matching record's ID, or None if the collection is exhausted.
pub fn search_collection(records: &[Value], target: &str, collection: Collection) -> Option<Match> {
    records.iter().find_map(|raw| match ParsedRecord::classify(raw) {
        ParsedRecord::Structured(record) => {
            if record.display_name.as_deref() != Some(target) {
                return None;
            }
            record.system_id().map(|id| Match {
                system_id: id.to_string(),
                collection,
                strategy: MatchStrategy::Structured,
            })
        }
        ParsedRecord::Fallback(text) => {
            if extract_display_name(text) != Some(target) {
                return None;
            }
            extract_system_name(text).map(|id| Match {
                system_id: id.to_string(),
                collection,
                strategy: MatchStrategy::Fallback,
            })
        }
        ParsedRecord::Unreadable => None,
    })
}

/// Resolves one display name, preferring owned systems over shared ones.
pub fn resolve_name(inventory: &Inventory, target: &str) -> Option<Match> {
    Collection::SEARCH_ORDER
        .into_iter()
        .find_map(|collection| search_collection(inventory.records(collection), target, collection))
}

/// Resolves every target in order.
///
/// # Arguments
///
/// * `inventory` - The loaded inventory
/// * `targets` - Display names in request order
/// * `observer` - Receives a searching event and then a found or missing
///   event for each target
///
/// # Returns
///
/// A [`Resolution`] holding resolved and missing targets, both in request
/// order. Duplicate targets are resolved independently.
pub fn resolve_all(
    inventory: &Inventory,
    targets: &[String],
    observer: &mut dyn ResolveObserver,
) -> Resolution {
    let mut resolution = Resolution::default();

    for target in targets {
        observer.searching(target);
        match resolve_name(inventory, target) {
            Some(found) => {
                observer.found(target, &found);
                resolution.resolved.push((target.clone(), found));
            }
            None => {
                observer.missing(target);
                resolution.missing.push(target.clone());
            }
        }
    }

    resolution
}

/// Lists up to `max` display names from a collection for diagnostics.
pub fn sample_display_names(records: &[Value], max: usize) -> Vec<String> {
    records
        .iter()
        .filter_map(|raw| ParsedRecord::classify(raw).listing_name())
        .take(max)
        .collect()
}
