//! The categorized revenue aggregation pipeline
//!
//! Stage classification, bucket folding, per-patient aggregation, and
//! report assembly. Data flows one way: Stage Classifier → Bucket Builder →
//! Patient/Row Aggregator → Report Assembler.

pub mod aggregate;
pub mod assemble;
pub mod grouping;
pub mod stage;

pub use aggregate::{AggregatedBucket, AggregatedPatient, BucketAggregator};
pub use assemble::ReportGenerator;
pub use grouping::{BucketKey, BucketSeed, bucket_key, fold_into_buckets};
pub use stage::{ComboRow, GroupKeyMode, HospitalScope, Stage, StageLayout};
