//! A Rust library for generating a CT-scan center's categorized daily
//! revenue reports: stage classification, bucket grouping, and per-patient
//! aggregation under category-dependent pricing rules.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use algorithm::ReportGenerator;
pub use config::ReportConfig;
pub use error::{Result, RevenueError};

// Data models
pub use models::{
    Category, DailyReport, DetailReport, HospitalDirectory, PatientScanEntry, ReportMode,
    ScanCatalog, SummaryReport,
};

// Store boundary
pub use store::{InMemoryStore, RevenueStore};

// Utility functions
pub use utils::{format_report_date, parse_report_date, round_money};
