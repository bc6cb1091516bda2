//! Report stages and the fixed legacy layout
//!
//! A stage is one ordered classification rule: a predicate over (category,
//! hospital) plus an explicit sort specification. Stage order is part of the
//! report contract; it reproduces the legacy report layout.

use itertools::Itertools;

use crate::models::patient::{Category, PatientScanEntry};
use crate::models::report::ReportMode;

/// Priority order of the principal referring hospitals
///
/// This is an explicit layout order, not numeric id order; unlisted
/// hospitals sort after every listed one.
pub const PRINCIPAL_HOSPITAL_ORDER: [u32; 4] = [1, 2, 3, 4];

/// Hospital ids folded into the synthetic "Other Govt. Hospital" bucket
pub const OTHER_GOVT_HOSPITAL_IDS: [u32; 3] = [5, 6, 7];

/// Hospital ids folded into the synthetic "OTHER HOSPITAL" bucket
pub const OTHER_PRIVATE_HOSPITAL_IDS: [u32; 2] = [8, 9];

/// Synthetic label of the grouped government-hospital bucket
pub const OTHER_GOVT_LABEL: &str = "Other Govt. Hospital";

/// Synthetic label of the grouped private-hospital bucket
pub const OTHER_HOSPITAL_LABEL: &str = "OTHER HOSPITAL";

/// Hospital predicate of a stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HospitalScope {
    /// Only the listed hospital ids match
    Only(Vec<u32>),
    /// Every hospital except the listed ids matches
    Excluding(Vec<u32>),
}

impl HospitalScope {
    /// Check whether a hospital id satisfies the predicate
    #[must_use]
    pub fn matches(&self, hospital_id: u32) -> bool {
        match self {
            Self::Only(ids) => ids.contains(&hospital_id),
            Self::Excluding(ids) => !ids.contains(&hospital_id),
        }
    }
}

/// Grouping-key function of a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKeyMode {
    /// Buckets are keyed by (category, hospital id)
    CategoryAndHospital,
    /// Buckets are keyed by category alone; the stage's scope already pins
    /// the hospital set
    CategoryOnly,
}

/// One distinct (category, hospital, scan-code-set) combination of a stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboRow {
    /// Payer category of the combination
    pub category: Category,
    /// Referring hospital id of the combination
    pub hospital_id: u32,
    /// Comma-joined scan-code set of the combination
    pub scan_codes: String,
    /// Number of codes in the set, precomputed for the sort
    pub cardinality: usize,
}

/// One ordered classification rule of the report layout
#[derive(Debug, Clone)]
pub struct Stage {
    /// Stage name, used in logs only
    pub name: &'static str,
    /// Matching categories; list order is the stage's category priority
    pub categories: Vec<Category>,
    /// Hospital predicate
    pub scope: HospitalScope,
    /// Explicit hospital priority order; unlisted ids sort last
    pub hospital_order: Vec<u32>,
    /// Grouping-key function for the bucket fold
    pub group_key: GroupKeyMode,
    /// Synthetic hospital label for the stage's buckets, if any
    pub label_override: Option<&'static str>,
}

impl Stage {
    /// Check whether a booking falls under this stage
    #[must_use]
    pub fn matches(&self, entry: &PatientScanEntry) -> bool {
        self.categories.contains(&entry.category) && self.scope.matches(entry.hospital_id)
    }

    /// Priority rank of a hospital id within this stage
    ///
    /// Listed hospitals rank by list position; unlisted ones all rank last.
    #[must_use]
    pub fn hospital_rank(&self, hospital_id: u32) -> usize {
        self.hospital_order
            .iter()
            .position(|&id| id == hospital_id)
            .unwrap_or(usize::MAX)
    }

    /// Priority rank of a category within this stage
    #[must_use]
    pub fn category_rank(&self, category: Category) -> usize {
        self.categories
            .iter()
            .position(|&c| c == category)
            .unwrap_or(usize::MAX)
    }

    /// Produce this stage's distinct sorted combination rows
    ///
    /// Input entries must already be restricted to completed bookings for
    /// the target service date. The sort applies, in precedence order:
    /// hospital priority (rank ties broken by id, so unlisted hospitals
    /// stay clustered), category priority, scan-code-set cardinality
    /// descending. The sort is stable, so full ties keep first-appearance
    /// order and the output is deterministic.
    #[must_use]
    pub fn combinations(&self, entries: &[PatientScanEntry]) -> Vec<ComboRow> {
        let mut rows: Vec<ComboRow> = entries
            .iter()
            .filter(|entry| self.matches(entry))
            .map(|entry| ComboRow {
                category: entry.category,
                hospital_id: entry.hospital_id,
                scan_codes: entry.scan_codes.clone(),
                cardinality: entry.scan_code_list().len(),
            })
            .unique_by(|row| (row.category, row.hospital_id, row.scan_codes.clone()))
            .collect();

        rows.sort_by(|a, b| {
            self.hospital_rank(a.hospital_id)
                .cmp(&self.hospital_rank(b.hospital_id))
                .then_with(|| a.hospital_id.cmp(&b.hospital_id))
                .then_with(|| {
                    self.category_rank(a.category)
                        .cmp(&self.category_rank(b.category))
                })
                .then_with(|| b.cardinality.cmp(&a.cardinality))
        });

        rows
    }
}

/// The fixed, ordered stage list of one report mode
#[derive(Debug, Clone)]
pub struct StageLayout {
    /// Stages in report order
    pub stages: Vec<Stage>,
}

impl StageLayout {
    /// Get the layout for a report mode
    ///
    /// Both modes share the legacy four-stage layout; the modes differ only
    /// in how buckets are assembled.
    #[must_use]
    pub fn for_mode(mode: ReportMode) -> Self {
        match mode {
            ReportMode::Detail | ReportMode::Summary => Self::legacy(),
        }
    }

    /// The legacy report layout: principal hospitals (paid and
    /// catalog-priced categories), free schemes, then the two synthetic
    /// grouped-hospital buckets
    #[must_use]
    pub fn legacy() -> Self {
        let grouped_ids: Vec<u32> = OTHER_GOVT_HOSPITAL_IDS
            .iter()
            .chain(OTHER_PRIVATE_HOSPITAL_IDS.iter())
            .copied()
            .collect();

        Self {
            stages: vec![
                Stage {
                    name: "principal hospitals",
                    categories: vec![
                        Category::General,
                        Category::SeniorCitizen,
                        Category::Chiranjeevi,
                    ],
                    scope: HospitalScope::Excluding(grouped_ids.clone()),
                    hospital_order: PRINCIPAL_HOSPITAL_ORDER.to_vec(),
                    group_key: GroupKeyMode::CategoryAndHospital,
                    label_override: None,
                },
                Stage {
                    name: "free schemes",
                    categories: vec![
                        Category::RoadAccident,
                        Category::Bpl,
                        Category::Jssy,
                        Category::IpdFree,
                        Category::OpdFree,
                    ],
                    scope: HospitalScope::Excluding(grouped_ids),
                    hospital_order: PRINCIPAL_HOSPITAL_ORDER.to_vec(),
                    group_key: GroupKeyMode::CategoryAndHospital,
                    label_override: None,
                },
                Stage {
                    name: "other govt hospitals",
                    categories: Category::all(),
                    scope: HospitalScope::Only(OTHER_GOVT_HOSPITAL_IDS.to_vec()),
                    hospital_order: Vec::new(),
                    group_key: GroupKeyMode::CategoryOnly,
                    label_override: Some(OTHER_GOVT_LABEL),
                },
                Stage {
                    name: "other hospitals",
                    categories: Category::all(),
                    scope: HospitalScope::Only(OTHER_PRIVATE_HOSPITAL_IDS.to_vec()),
                    hospital_order: Vec::new(),
                    group_key: GroupKeyMode::CategoryOnly,
                    label_override: Some(OTHER_HOSPITAL_LABEL),
                },
            ],
        }
    }
}
