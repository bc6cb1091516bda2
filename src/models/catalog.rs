//! Scan catalog reference data
//!
//! Static per-scan pricing data owned by the catalog-management side of the
//! system; the report engine reads it once per request into a memoized map.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One scan code's catalog data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanCatalogEntry {
    /// Catalog code referenced by booking scan-code lists
    pub code: u32,
    /// Display name used on reports
    pub name: String,
    /// Charge per booking of this code
    pub charge: f64,
    /// How many physical scans one booking of this code represents
    pub multiplier: u32,
}

/// Memoized scan-code lookup, built once per report request
///
/// Replaces per-row catalog queries; a missing code resolves to `None` and
/// is never an error.
#[derive(Debug, Clone, Default)]
pub struct ScanCatalog {
    entries: FxHashMap<u32, ScanCatalogEntry>,
}

impl ScanCatalog {
    /// Build a catalog from a list of entries
    ///
    /// Later duplicates of a code replace earlier ones.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = ScanCatalogEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.code, e)).collect(),
        }
    }

    /// Resolve a scan code
    #[must_use]
    pub fn get(&self, code: u32) -> Option<&ScanCatalogEntry> {
        self.entries.get(&code)
    }

    /// Number of catalog entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
