//! Report generation pipeline
//!
//! Runs the full single-pass pipeline for one request: stage classification,
//! bucket fold, aggregation, and assembly into the Detail or Summary report
//! structure. The pipeline is strictly one-directional and keeps no state
//! between requests.

use chrono::NaiveDate;
use log::info;

use crate::algorithm::aggregate::{AggregatedBucket, AggregatedPatient, BucketAggregator};
use crate::algorithm::grouping::fold_into_buckets;
use crate::algorithm::stage::StageLayout;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::models::report::{
    BucketSummary, BucketTotals, DailyReport, DetailReport, ReportMode, ReportTable,
    SummaryReport, SummaryRow, pad_scan_names,
};
use crate::store::RevenueStore;
use crate::utils::round_money;

/// Generates daily revenue reports against a backing store
///
/// The catalog and hospital directory are loaded once per request into
/// memoized maps; every further lookup is in-memory.
pub struct ReportGenerator<'a> {
    store: &'a dyn RevenueStore,
    config: ReportConfig,
}

impl<'a> ReportGenerator<'a> {
    /// Create a generator with the default configuration
    #[must_use]
    pub fn new(store: &'a dyn RevenueStore) -> Self {
        Self {
            store,
            config: ReportConfig::default(),
        }
    }

    /// Create a generator with an explicit configuration
    #[must_use]
    pub fn with_config(store: &'a dyn RevenueStore, config: ReportConfig) -> Self {
        Self { store, config }
    }

    /// Generate the report for `date` in the configured mode
    ///
    /// # Errors
    /// Returns an error if the backing store fails; no partial report is
    /// produced in that case.
    pub fn generate(&self, date: NaiveDate) -> Result<DailyReport> {
        match self.config.mode {
            ReportMode::Detail => Ok(DailyReport::Detail(self.generate_detail(date)?)),
            ReportMode::Summary => Ok(DailyReport::Summary(self.generate_summary(date)?)),
        }
    }

    /// Generate the report for a DD-MM-YYYY date string
    ///
    /// Callers pass dates in the front-end convention; the engine normalizes
    /// them before touching the store.
    pub fn generate_for(&self, date: &str) -> Result<DailyReport> {
        self.generate(crate::utils::parse_report_date(date)?)
    }

    /// Generate the per-patient detail report for `date`
    pub fn generate_detail(&self, date: NaiveDate) -> Result<DetailReport> {
        let buckets = self.run_pipeline(date, ReportMode::Detail)?;
        let tables = buckets
            .into_iter()
            .map(|bucket| ReportTable {
                hospital_label: bucket.hospital_label,
                category: bucket.category,
                service_date: date,
                rows: bucket.patients.into_iter().map(|p| p.row).collect(),
                totals: bucket.totals,
            })
            .collect();

        Ok(DetailReport {
            service_date: date,
            tables,
        })
    }

    /// Generate the per-bundle summary report for `date`
    pub fn generate_summary(&self, date: NaiveDate) -> Result<SummaryReport> {
        let buckets = self.run_pipeline(date, ReportMode::Summary)?;
        let buckets = buckets
            .into_iter()
            .map(|bucket| summarize_bucket(bucket, date))
            .collect();

        Ok(SummaryReport {
            service_date: date,
            buckets,
        })
    }

    /// Run the stage → fold → aggregate pipeline for one request
    fn run_pipeline(&self, date: NaiveDate, mode: ReportMode) -> Result<Vec<AggregatedBucket>> {
        let entries = self.store.completed_entries(date)?;
        let catalog = self.store.scan_catalog()?;
        let hospitals = self.store.hospital_directory()?;

        info!(
            "Generating {mode:?} report for {date}: {} completed entries, {} catalog codes",
            entries.len(),
            catalog.len()
        );

        let aggregator = BucketAggregator::new(&catalog, &hospitals, &self.config);
        let layout = StageLayout::for_mode(mode);
        let mut buckets = Vec::new();

        for stage in &layout.stages {
            let rows = stage.combinations(&entries);
            let seeds = fold_into_buckets(stage, &rows);
            info!(
                "Stage '{}': {} combinations, {} buckets",
                stage.name,
                rows.len(),
                seeds.len()
            );

            for seed in &seeds {
                if let Some(bucket) = aggregator.aggregate(stage, seed, &entries) {
                    buckets.push(bucket);
                }
            }
        }

        Ok(buckets)
    }
}

/// Condense one aggregated bucket into its summary form
///
/// Patient rows are grouped by their exact scan-code set, in order of first
/// appearance. Each distinct set yields one row: occurrence count, total
/// scans, the per-occurrence rate, and the row amount. Scan names are padded
/// to the fixed slot count.
fn summarize_bucket(bucket: AggregatedBucket, date: NaiveDate) -> BucketSummary {
    let mut groups: Vec<(String, Vec<&AggregatedPatient>)> = Vec::new();

    for patient in &bucket.patients {
        match groups.iter_mut().find(|(codes, _)| *codes == patient.scan_codes) {
            Some((_, members)) => members.push(patient),
            None => groups.push((patient.scan_codes.clone(), vec![patient])),
        }
    }

    let mut totals = BucketTotals::default();
    let mut rows = Vec::with_capacity(groups.len());

    for (_, members) in groups {
        let first = &members[0].row;
        let patient_count = members.len();
        let scan_count = first.scan_count * patient_count as u32;
        let rate = first.amount;
        let amount = round_money(rate * patient_count as f64);

        totals.add(scan_count, amount);
        rows.push(SummaryRow {
            scan_names: pad_scan_names(&first.scan_names),
            patient_count,
            scan_count,
            rate,
            amount,
        });
    }

    BucketSummary {
        hospital_label: bucket.hospital_label,
        category: bucket.category,
        service_date: date,
        rows,
        totals,
    }
}
