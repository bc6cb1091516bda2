//! Bucket fold over sorted combination rows
//!
//! Folds consecutive combination rows sharing a grouping key into one bucket
//! seed. This is a run-length fold over the already-sorted stage output, not
//! a global dedup: non-adjacent repeats of a key open separate buckets. The
//! legacy report depends on that behavior, so it is preserved and pinned by
//! regression tests.

use itertools::Itertools;

use crate::algorithm::stage::{ComboRow, GroupKeyMode, Stage};
use crate::models::patient::Category;

/// Grouping key of one combination row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketKey {
    /// Payer category component of the key
    pub category: Category,
    /// Hospital component; `None` when the stage groups by category alone
    pub hospital_id: Option<u32>,
}

/// One bucket opened by the fold, before aggregation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSeed {
    /// Payer category of the bucket
    pub category: Category,
    /// Hospital id the bucket is scoped to; `None` for synthetic-label
    /// buckets, which select over the stage's hospital set instead
    pub hospital_id: Option<u32>,
    /// Scan-code set governing the bucket (from the bucket's first row)
    pub scan_codes: String,
}

/// Compute a row's grouping key under a stage's key function
#[must_use]
pub fn bucket_key(stage: &Stage, row: &ComboRow) -> BucketKey {
    BucketKey {
        category: row.category,
        hospital_id: match stage.group_key {
            GroupKeyMode::CategoryAndHospital => Some(row.hospital_id),
            GroupKeyMode::CategoryOnly => None,
        },
    }
}

/// Fold one stage's sorted combination rows into bucket seeds
///
/// Consecutive rows with the same grouping key collapse into the bucket
/// opened by the first of them; a key change opens a new bucket. The fold
/// state starts empty for every stage.
#[must_use]
pub fn fold_into_buckets(stage: &Stage, rows: &[ComboRow]) -> Vec<BucketSeed> {
    rows.iter()
        .chunk_by(|row| bucket_key(stage, row))
        .into_iter()
        .filter_map(|(key, mut group)| {
            // chunk_by never yields an empty group
            group.next().map(|first| BucketSeed {
                category: key.category,
                hospital_id: key.hospital_id,
                scan_codes: first.scan_codes.clone(),
            })
        })
        .collect()
}
