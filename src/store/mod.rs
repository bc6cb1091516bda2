//! Backing-store boundary for the report engine
//!
//! The engine is read-only against the patient/catalog store. Any error from
//! a store method aborts the whole report request; there is no partial
//! report and no retry inside the engine.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::catalog::{ScanCatalog, ScanCatalogEntry};
use crate::models::hospital::{HospitalDirectory, HospitalEntry};
use crate::models::patient::PatientScanEntry;

/// Read-only view of the data a report request needs
pub trait RevenueStore {
    /// Fetch all completed bookings whose service date equals `date`
    fn completed_entries(&self, date: NaiveDate) -> Result<Vec<PatientScanEntry>>;

    /// Fetch the scan catalog as a memoized lookup map
    fn scan_catalog(&self) -> Result<ScanCatalog>;

    /// Fetch the hospital directory as a memoized lookup map
    fn hospital_directory(&self) -> Result<HospitalDirectory>;
}

/// In-memory store over plain record lists
///
/// Doubles as the JSON dataset format consumed by the CLI front-end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryStore {
    /// All patient bookings, completed or not
    pub entries: Vec<PatientScanEntry>,
    /// Scan catalog records
    pub catalog: Vec<ScanCatalogEntry>,
    /// Hospital directory records
    pub hospitals: Vec<HospitalEntry>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a JSON dataset file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not decode as a
    /// dataset.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl RevenueStore for InMemoryStore {
    fn completed_entries(&self, date: NaiveDate) -> Result<Vec<PatientScanEntry>> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.is_completed_on(date))
            .cloned()
            .collect())
    }

    fn scan_catalog(&self) -> Result<ScanCatalog> {
        Ok(ScanCatalog::from_entries(self.catalog.iter().cloned()))
    }

    fn hospital_directory(&self) -> Result<HospitalDirectory> {
        Ok(HospitalDirectory::from_entries(self.hospitals.iter().cloned()))
    }
}
