//! Estimated time of the most probable impact.

use chrono::{NaiveDate, NaiveDateTime};

/// Label used wherever no approach date is available.
pub const UNKNOWN_ETA: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub enum ImpactEta {
    /// The catalog listed no usable approach.
    Unknown,
    Approach {
        /// Date exactly as the catalog printed it (e.g. `2071-09-16.04`).
        label: String,
        date: NaiveDateTime,
    },
}

impl ImpactEta {
    pub fn label(&self) -> &str {
        match self {
            Self::Unknown => UNKNOWN_ETA,
            Self::Approach { label, .. } => label,
        }
    }

    pub fn date(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Unknown => None,
            Self::Approach { date, .. } => Some(*date),
        }
    }
}

/// Parse a catalog date (`YYYY-MM-DD[.fff]` or `YYYY-MM-DD HH:MM:SS[.fff]`).
///
/// The fractional suffix is dropped, so `2071-09-16.04` resolves to midnight.
pub fn parse_catalog_date(raw: &str) -> Option<NaiveDateTime> {
    let date_part = raw.split('.').next().unwrap_or(raw).trim();
    NaiveDateTime::parse_from_str(date_part, "%Y-%m-%d %H:%M:%S")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
