//! Resort file loading: JSON parse + invariant validation.
//!
//! The lift collection is an external collaborator (a data file), not
//! inline logic. A map that parses but violates the model invariants
//! (duplicate ids, empty paths) is a configuration defect and is rejected
//! here, before any view runs.

use std::collections::HashSet;

use liftline_protocol::ResortMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("resort file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate lift id `{id}`")]
    DuplicateLiftId { id: String },
    #[error("lift `{id}` has an empty path")]
    EmptyPath { id: String },
}

/// Parse and validate a resort map document.
pub fn load_resort(data: &[u8]) -> Result<ResortMap, LoadError> {
    let map: ResortMap = serde_json::from_slice(data)?;
    validate(&map)?;
    Ok(map)
}

/// Check the model invariants: ids unique, every path non-empty.
pub fn validate(map: &ResortMap) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for lift in &map.lifts {
        if !seen.insert(lift.id.as_str()) {
            return Err(LoadError::DuplicateLiftId {
                id: lift.id.to_string(),
            });
        }
        if lift.path.is_empty() {
            return Err(LoadError::EmptyPath {
                id: lift.id.to_string(),
            });
        }
    }
    Ok(())
}
