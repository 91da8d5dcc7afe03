// Rust guideline compliant 2026-10-18

//! Loading of the inventory file and the target list argument.

use crate::{Error, Inventory, Result};
use serde_json::Value;
use std::path::Path;

/// Loads the inventory document from a file.
///
/// # Arguments
///
/// * `path` - Path to the JSON file pre-fetched from the platform API
///
/// # Returns
///
/// The decoded inventory with raw, undecoded records.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file cannot be read
/// - The content is not a JSON object with array-valued collections
pub fn load_inventory(path: &Path) -> Result<Inventory> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    parse_inventory(&content)
}

/// Decodes inventory JSON text.
///
/// # Errors
///
/// Returns [`Error::Inventory`] if the text is not valid JSON, is not an
/// object, or holds a collection field that is not an array.
pub fn parse_inventory(content: &str) -> Result<Inventory> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| Error::Inventory(e.to_string()))?;

    if !value.is_object() {
        return Err(Error::Inventory(
            "expected a JSON object at the top level".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| Error::Inventory(e.to_string()))
}

/// Parses the target list argument.
///
/// # Arguments
///
/// * `text` - JSON array of display names, e.g. `["web-01","db-02"]`
///
/// # Returns
///
/// The display names in the order given.
///
/// # Errors
///
/// Returns [`Error::Targets`] if the text is not a JSON array of strings.
pub fn parse_targets(text: &str) -> Result<Vec<String>> {
    serde_json::from_str(text).map_err(|e| Error::Targets(e.to_string()))
}
