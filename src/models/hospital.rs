//! Hospital directory lookup
//!
//! Resolves hospital identifiers to display labels. Synthetic bucket labels
//! ("Other Govt. Hospital", "OTHER HOSPITAL") are supplied by the stage
//! configuration, not by this directory.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Label used when a hospital id has no directory entry
pub const UNKNOWN_HOSPITAL_LABEL: &str = "Unknown";

/// One hospital directory record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HospitalEntry {
    /// Hospital identifier referenced by bookings
    pub id: u32,
    /// Display label used on reports
    pub label: String,
}

/// Memoized hospital-id lookup, built once per report request
#[derive(Debug, Clone, Default)]
pub struct HospitalDirectory {
    labels: FxHashMap<u32, String>,
}

impl HospitalDirectory {
    /// Build a directory from a list of entries
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = HospitalEntry>) -> Self {
        Self {
            labels: entries.into_iter().map(|e| (e.id, e.label)).collect(),
        }
    }

    /// Resolve a hospital id to its display label
    ///
    /// Ids absent from the directory resolve to the literal `"Unknown"`.
    #[must_use]
    pub fn label(&self, id: u32) -> &str {
        self.labels
            .get(&id)
            .map_or(UNKNOWN_HOSPITAL_LABEL, String::as_str)
    }

    /// Check whether an id is present in the directory
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.labels.contains_key(&id)
    }
}
