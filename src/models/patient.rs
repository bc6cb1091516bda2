//! Patient booking entity model
//!
//! This module contains the `PatientScanEntry` model, one patient's booking
//! for a service date, together with the payer `Category` classification that
//! governs both report ordering and pricing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Pricing strategy attached to a payer category
///
/// The three strategies are matched exhaustively wherever an amount is
/// computed, so a new category cannot silently fall through to the wrong
/// pricing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingStrategy {
    /// Use the patient's stored billed amount (manual discounts included)
    StoredAmount,
    /// Use the catalog charge sum for the booking's scan codes
    Catalog,
    /// The booking is free of charge; the amount is always zero
    AlwaysZero,
}

/// Payer classification of a booking
///
/// The variant order is not significant; each report stage carries its own
/// explicit category priority list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// General paying patients
    General,
    /// Senior citizen scheme (catalog-priced)
    SeniorCitizen,
    /// Chiranjeevi government scheme (catalog-priced, reimbursed)
    Chiranjeevi,
    /// Road traffic accident victims (free)
    RoadAccident,
    /// Below-poverty-line patients (free)
    Bpl,
    /// JSSY maternity scheme (free)
    Jssy,
    /// Free in-patient department referrals
    IpdFree,
    /// Free out-patient department referrals
    OpdFree,
}

impl Category {
    /// Get the legacy display label for this category
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "GEN / PAID",
            Self::SeniorCitizen => "Sn. CITIZEN",
            Self::Chiranjeevi => "CHIRANJEEVI",
            Self::RoadAccident => "RTA",
            Self::Bpl => "BPL / POOR",
            Self::Jssy => "JSSY",
            Self::IpdFree => "IPD FREE",
            Self::OpdFree => "OPD FREE",
        }
    }

    /// Get the pricing strategy for this category
    #[must_use]
    pub const fn pricing(self) -> PricingStrategy {
        match self {
            Self::General => PricingStrategy::StoredAmount,
            Self::SeniorCitizen | Self::Chiranjeevi => PricingStrategy::Catalog,
            Self::RoadAccident | Self::Bpl | Self::Jssy | Self::IpdFree | Self::OpdFree => {
                PricingStrategy::AlwaysZero
            }
        }
    }

    /// Check whether this category belongs to the free-category set
    #[must_use]
    pub const fn is_free(self) -> bool {
        matches!(self.pricing(), PricingStrategy::AlwaysZero)
    }

    /// Get all categories in the legacy report priority order
    ///
    /// Stages that span every category (the synthetic hospital buckets) use
    /// this full order as their category priority list.
    #[must_use]
    pub fn all() -> Vec<Self> {
        vec![
            Self::General,
            Self::SeniorCitizen,
            Self::Chiranjeevi,
            Self::RoadAccident,
            Self::Bpl,
            Self::Jssy,
            Self::IpdFree,
            Self::OpdFree,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Completion status of a booking
///
/// Only completed bookings participate in revenue reports; the status flips
/// when the console operator marks the scan as executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanStatus {
    /// Booked, scan not yet performed
    Pending,
    /// Scan performed; the entry carries a service date
    Completed,
    /// Booking cancelled before the scan
    Cancelled,
}

/// One patient's booking for a service date
///
/// Created at registration and mutated by the console workflow when the scan
/// completes. The report engine treats entries as read-only input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientScanEntry {
    /// Unique registration code identifying the booking
    pub cro: String,
    /// Patient display name
    pub patient_name: String,
    /// Age as captured at registration, with unit suffix ("45 Yrs")
    pub age: String,
    /// Gender as captured at registration ("Male"/"Female")
    pub gender: String,
    /// Payer classification
    pub category: Category,
    /// Identifier of the referring hospital
    pub hospital_id: u32,
    /// Ordered scan-code list, serialized as a comma-joined string ("3,7")
    pub scan_codes: String,
    /// Completion status
    pub status: ScanStatus,
    /// Date the scan was performed; set when `status` becomes `Completed`
    pub service_date: Option<NaiveDate>,
    /// Billed amount as recorded at the counter; authoritative for the
    /// stored-amount pricing strategy
    pub billed_amount: f64,
}

impl PatientScanEntry {
    /// Parse the comma-joined scan-code string into individual codes
    ///
    /// Malformed tokens are skipped; bundle order is preserved.
    #[must_use]
    pub fn scan_code_list(&self) -> SmallVec<[u32; 8]> {
        self.scan_codes
            .split(',')
            .filter_map(|token| token.trim().parse::<u32>().ok())
            .collect()
    }

    /// Check whether this entry participates in a report for `date`
    #[must_use]
    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.status == ScanStatus::Completed && self.service_date == Some(date)
    }
}
