//! Data models for the revenue report engine
//!
//! Patient bookings and reference data are read-only input owned by the
//! registration and catalog-management collaborators; the report types are
//! the engine's output contract.

pub mod catalog;
pub mod hospital;
pub mod patient;
pub mod report;

pub use catalog::{ScanCatalog, ScanCatalogEntry};
pub use hospital::{HospitalDirectory, HospitalEntry, UNKNOWN_HOSPITAL_LABEL};
pub use patient::{Category, PatientScanEntry, PricingStrategy, ScanStatus};
pub use report::{
    BucketSummary, BucketTotals, DailyReport, DetailReport, PatientRow, ReportMode, ReportTable,
    SummaryReport, SummaryRow,
};
