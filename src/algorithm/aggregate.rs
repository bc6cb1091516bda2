//! Per-bucket patient aggregation and pricing
//!
//! Walks a bucket's patient entries, decomposes each booking's scan-code set
//! through the catalog, applies the category's pricing strategy, and
//! accumulates bucket totals.

use log::{debug, warn};

use crate::algorithm::grouping::BucketSeed;
use crate::algorithm::stage::Stage;
use crate::config::ReportConfig;
use crate::models::catalog::ScanCatalog;
use crate::models::hospital::HospitalDirectory;
use crate::models::patient::{Category, PatientScanEntry, PricingStrategy};
use crate::models::report::{BucketTotals, PatientRow};
use crate::utils::{gender_code, round_money, strip_age_suffix};

/// One patient's aggregated contribution, with the scan-code set kept for
/// the summary-mode bundle grouping
#[derive(Debug, Clone)]
pub struct AggregatedPatient {
    /// The rendered detail row
    pub row: PatientRow,
    /// The booking's comma-joined scan-code set
    pub scan_codes: String,
}

/// One fully aggregated bucket, mode-independent
#[derive(Debug, Clone)]
pub struct AggregatedBucket {
    /// Hospital display label, or the stage's synthetic label
    pub hospital_label: String,
    /// Payer category of the bucket
    pub category: Category,
    /// Patient contributions in selection order
    pub patients: Vec<AggregatedPatient>,
    /// Accumulated totals
    pub totals: BucketTotals,
}

/// Aggregates bucket seeds against the per-request lookup maps
pub struct BucketAggregator<'a> {
    catalog: &'a ScanCatalog,
    hospitals: &'a HospitalDirectory,
    config: &'a ReportConfig,
}

impl<'a> BucketAggregator<'a> {
    /// Create an aggregator over the request's memoized lookups
    #[must_use]
    pub fn new(
        catalog: &'a ScanCatalog,
        hospitals: &'a HospitalDirectory,
        config: &'a ReportConfig,
    ) -> Self {
        Self {
            catalog,
            hospitals,
            config,
        }
    }

    /// Aggregate one bucket seed
    ///
    /// Selects the entries belonging to the bucket (same category, hospital
    /// per the seed scope), builds one row per patient, and accumulates
    /// totals. Returns `None` when no entry matches; empty buckets are
    /// omitted from the report, not reported as errors.
    #[must_use]
    pub fn aggregate(
        &self,
        stage: &Stage,
        seed: &BucketSeed,
        entries: &[PatientScanEntry],
    ) -> Option<AggregatedBucket> {
        let selected: Vec<&PatientScanEntry> = entries
            .iter()
            .filter(|entry| {
                entry.category == seed.category
                    && match seed.hospital_id {
                        Some(id) => entry.hospital_id == id,
                        // Synthetic-label buckets select over the stage's
                        // whole hospital set.
                        None => stage.scope.matches(entry.hospital_id),
                    }
            })
            .collect();

        if selected.is_empty() {
            return None;
        }

        let hospital_label = self.bucket_label(stage, seed);
        let mut totals = BucketTotals::default();
        let mut patients = Vec::with_capacity(selected.len());

        for (index, entry) in selected.iter().enumerate() {
            let patient = self.aggregate_patient(index + 1, entry);
            totals.add(patient.row.scan_count, patient.row.amount);
            patients.push(patient);
        }

        debug!(
            "Bucket {} / {}: {} patients, {} scans, amount {:.2}",
            hospital_label,
            seed.category,
            patients.len(),
            totals.scan_count,
            totals.amount
        );

        Some(AggregatedBucket {
            hospital_label,
            category: seed.category,
            patients,
            totals,
        })
    }

    /// Resolve the display label of a bucket
    fn bucket_label(&self, stage: &Stage, seed: &BucketSeed) -> String {
        if let Some(label) = stage.label_override {
            return label.to_string();
        }
        match seed.hospital_id {
            Some(id) => {
                if self.config.log_unknown_hospitals && !self.hospitals.contains(id) {
                    warn!("Hospital id {id} not in directory, labeling as Unknown");
                }
                self.hospitals.label(id).to_string()
            }
            None => crate::models::hospital::UNKNOWN_HOSPITAL_LABEL.to_string(),
        }
    }

    /// Build one patient's row under the bucket category's pricing strategy
    fn aggregate_patient(&self, serial: usize, entry: &PatientScanEntry) -> AggregatedPatient {
        let mut scan_names = Vec::new();
        let mut scan_count: u32 = 0;
        let mut catalog_amount = 0.0;

        for code in entry.scan_code_list() {
            match self.catalog.get(code) {
                Some(item) => {
                    scan_names.push(item.name.clone());
                    scan_count += item.multiplier;
                    catalog_amount += item.charge;
                }
                None => {
                    // Missing codes contribute nothing and are not fatal.
                    if self.config.log_missing_codes {
                        warn!("Scan code {code} not in catalog (CRO {})", entry.cro);
                    }
                }
            }
        }

        let amount = match entry.category.pricing() {
            PricingStrategy::StoredAmount => entry.billed_amount,
            PricingStrategy::Catalog => catalog_amount,
            PricingStrategy::AlwaysZero => 0.0,
        };

        AggregatedPatient {
            row: PatientRow {
                serial,
                cro: entry.cro.clone(),
                name: entry.patient_name.clone(),
                age: strip_age_suffix(&entry.age),
                gender: gender_code(&entry.gender),
                scan_names,
                scan_count,
                amount: round_money(amount),
            },
            scan_codes: entry.scan_codes.clone(),
        }
    }
}
