//! Configuration for report generation.

use crate::models::report::ReportMode;

/// Configuration for one report-generation request
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Which report variant to produce
    pub mode: ReportMode,
    /// Log a warning for every scan code missing from the catalog
    pub log_missing_codes: bool,
    /// Log a warning for every hospital id missing from the directory
    pub log_unknown_hospitals: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            mode: ReportMode::Detail,
            log_missing_codes: true,
            log_unknown_hospitals: true,
        }
    }
}

impl ReportConfig {
    /// Create a configuration for the given report mode
    #[must_use]
    pub fn for_mode(mode: ReportMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}
