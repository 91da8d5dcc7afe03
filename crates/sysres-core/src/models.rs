// Rust guideline compliant 2026-10-18

//! Core data models for sysres.

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// A decoded system record from the monitoring platform.
///
/// Every field is optional; the upstream API omits fields freely and a record
/// missing either name simply never matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemRecord {
    /// Human-readable name shown in the platform UI.
    #[serde(rename = "systemDisplayName", default)]
    pub display_name: Option<String>,
    /// Key block carrying the internal identifier.
    #[serde(rename = "systemKey", default, deserialize_with = "deserialize_key")]
    pub system_key: Option<SystemKey>,
}

/// Rejects an explicit `null` key; only an absent key defaults to `None`.
fn deserialize_key<'de, D>(deserializer: D) -> std::result::Result<Option<SystemKey>, D::Error>
where
    D: Deserializer<'de>,
{
    SystemKey::deserialize(deserializer).map(Some)
}

/// Identifier block nested inside a [`SystemRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemKey {
    /// Internal system identifier used by subsequent API calls.
    #[serde(rename = "systemName", default)]
    pub system_name: Option<String>,
}

impl SystemRecord {
    /// Returns the resolvable ID, if present and non-empty.
    pub fn system_id(&self) -> Option<&str> {
        self.system_key
            .as_ref()
            .and_then(|key| key.system_name.as_deref())
            .filter(|id| !id.is_empty())
    }
}

/// Provenance of a record collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Systems owned by the caller's account.
    Own,
    /// Systems shared with the caller by other accounts.
    Shared,
}

impl Collection {
    /// Collections in the order they are searched.
    pub const SEARCH_ORDER: [Collection; 2] = [Collection::Own, Collection::Shared];

    /// Short label used in progress messages.
    pub fn label(self) -> &'static str {
        match self {
            Collection::Own => "own",
            Collection::Shared => "shared",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The pre-fetched inventory document.
///
/// Records are kept raw: each entry is normally a JSON-encoded string that
/// needs a second decode, mirroring the upstream API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    /// Raw records of owned systems.
    #[serde(rename = "ownSystemArr", default)]
    pub own: Vec<Value>,
    /// Raw records of shared systems.
    #[serde(rename = "shareSystemArr", default)]
    pub shared: Vec<Value>,
}

impl Inventory {
    /// Returns the raw records of a collection.
    pub fn records(&self, collection: Collection) -> &[Value] {
        match collection {
            Collection::Own => &self.own,
            Collection::Shared => &self.shared,
        }
    }
}

/// Which parsing strategy produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// The record decoded as JSON.
    Structured,
    /// The record was malformed and the fields were extracted by pattern.
    Fallback,
}

/// A successful lookup of one display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// The resolved system ID.
    pub system_id: String,
    /// Collection the record was found in.
    pub collection: Collection,
    /// Strategy that decoded the matching record.
    pub strategy: MatchStrategy,
}

/// Outcome of resolving a whole target list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Resolved targets in request order.
    pub resolved: Vec<(String, Match)>,
    /// Targets with no matching record, in request order.
    pub missing: Vec<String>,
}

impl Resolution {
    /// Returns true when every target was resolved.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Consumes the resolution, returning the IDs in target order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unresolved`] listing the missing names if any target
    /// was not found.
    pub fn into_ids(self) -> Result<Vec<String>> {
        if !self.missing.is_empty() {
            return Err(Error::Unresolved(self.missing));
        }
        Ok(self
            .resolved
            .into_iter()
            .map(|(_, found)| found.system_id)
            .collect())
    }
}
