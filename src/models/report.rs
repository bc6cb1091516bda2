//! Report output types
//!
//! These are the data contracts handed to the rendering/export collaborators.
//! Detail mode keeps one row per patient; Summary mode keeps one row per
//! distinct scan-code bundle within a bucket.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::patient::Category;
use crate::utils::round_money;

/// Fixed number of scan-name slots on a summary row
pub const SUMMARY_SCAN_SLOTS: usize = 8;

/// Placeholder printed in unused summary scan-name slots
pub const SUMMARY_SLOT_PLACEHOLDER: &str = "-";

/// Report variant selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReportMode {
    /// One row per patient
    #[default]
    Detail,
    /// One row per distinct scan-code bundle
    Summary,
}

/// One patient line of a detail report table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRow {
    /// Position within the table, starting at 1
    pub serial: usize,
    /// Registration code of the booking
    pub cro: String,
    /// Patient display name
    pub name: String,
    /// Age with the unit suffix stripped
    pub age: String,
    /// Single-letter gender code
    pub gender: String,
    /// Resolved scan names, in bundle order
    pub scan_names: Vec<String>,
    /// Physical scan count for the booking
    pub scan_count: u32,
    /// Amount for the booking under the bucket's pricing strategy
    pub amount: f64,
}

/// Accumulated totals of one bucket
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BucketTotals {
    /// Sum of per-patient scan counts
    pub scan_count: u32,
    /// Sum of per-patient amounts, rounded to 2 decimals
    pub amount: f64,
}

impl BucketTotals {
    /// Fold one row's count and amount into the totals
    pub fn add(&mut self, scan_count: u32, amount: f64) {
        self.scan_count += scan_count;
        self.amount = round_money(self.amount + amount);
    }
}

/// One bucket of the detail report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTable {
    /// Hospital display label, or the stage's synthetic label
    pub hospital_label: String,
    /// Payer category of the bucket
    pub category: Category,
    /// Service date the report covers
    pub service_date: NaiveDate,
    /// Per-patient rows in selection order
    pub rows: Vec<PatientRow>,
    /// Bucket totals
    pub totals: BucketTotals,
}

/// One aggregated line of a summary report bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Scan names padded/truncated to exactly [`SUMMARY_SCAN_SLOTS`] slots
    pub scan_names: Vec<String>,
    /// Number of patients booked with this exact scan-code bundle
    pub patient_count: usize,
    /// Total physical scans (per-patient count times patient count)
    pub scan_count: u32,
    /// Amount of one occurrence of the bundle
    pub rate: f64,
    /// Row amount (rate times patient count), rounded to 2 decimals
    pub amount: f64,
}

/// One bucket of the summary report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketSummary {
    /// Hospital display label, or the stage's synthetic label
    pub hospital_label: String,
    /// Payer category of the bucket
    pub category: Category,
    /// Service date the report covers
    pub service_date: NaiveDate,
    /// One row per distinct scan-code bundle, in first-appearance order
    pub rows: Vec<SummaryRow>,
    /// Bucket totals summed over the rows
    pub totals: BucketTotals,
}

/// Full detail report for one service date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailReport {
    /// Service date the report covers
    pub service_date: NaiveDate,
    /// Bucket tables in stage order, then bucket order within each stage
    pub tables: Vec<ReportTable>,
}

/// Full summary report for one service date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Service date the report covers
    pub service_date: NaiveDate,
    /// Bucket summaries in stage order, then bucket order within each stage
    pub buckets: Vec<BucketSummary>,
}

/// Either report variant, as returned to a mode-agnostic caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum DailyReport {
    /// Per-patient variant
    Detail(DetailReport),
    /// Per-bundle variant
    Summary(SummaryReport),
}

/// Pad or truncate a scan-name list to the fixed summary slot count
#[must_use]
pub fn pad_scan_names(names: &[String]) -> Vec<String> {
    let mut slots: Vec<String> = names
        .iter()
        .take(SUMMARY_SCAN_SLOTS)
        .cloned()
        .collect();
    slots.resize(SUMMARY_SCAN_SLOTS, SUMMARY_SLOT_PLACEHOLDER.to_string());
    slots
}
