//! Data-source identifiers for the housing-records datasets.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the housing-record categories shown on the address pages.
///
/// Each variant corresponds to a section of the address view and carries the
/// key the web application uses when requesting that section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSource {
    /// PLUTO land-use / property characteristics data.
    Pluto,
    /// HPD housing-maintenance violations.
    HpdViolations,
    /// HPD complaints.
    HpdComplaints,
    /// HPD housing-litigation cases.
    HpdLitigations,
    /// HPD vacate orders.
    HpdVacateOrders,
    /// DOB violations.
    DobViolations,
    /// DOB complaints.
    DobComplaints,
    /// DOB vacate orders.
    DobVacateOrders,
    /// Individual problems attached to an HPD complaint.
    HpdComplaintProblems,
}

/// Error returned when a data-source key is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown data source key: {key}")]
pub struct UnknownDataSourceError {
    /// The key that failed to resolve.
    pub key: String,
}

impl DataSource {
    /// All data sources, in the order their sections appear on the page.
    pub const ALL: [Self; 9] = [
        Self::Pluto,
        Self::HpdViolations,
        Self::HpdComplaints,
        Self::HpdLitigations,
        Self::HpdVacateOrders,
        Self::DobViolations,
        Self::DobComplaints,
        Self::DobVacateOrders,
        Self::HpdComplaintProblems,
    ];

    /// The key the web application uses for this data source.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Pluto => "plutoData",
            Self::HpdViolations => "hpdViolations",
            Self::HpdComplaints => "hpdComplaints",
            Self::HpdLitigations => "hpdLitigations",
            Self::HpdVacateOrders => "hpdVacateOrders",
            Self::DobViolations => "dobViolations",
            Self::DobComplaints => "dobComplaints",
            Self::DobVacateOrders => "dobVacateOrders",
            Self::HpdComplaintProblems => "hpdComplaintProblems",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DataSource {
    type Err = UnknownDataSourceError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|source| source.key() == key)
            .ok_or_else(|| UnknownDataSourceError {
                key: key.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for source in DataSource::ALL {
            assert_eq!(source.key().parse::<DataSource>(), Ok(source));
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = "nonexistent".parse::<DataSource>().unwrap_err();
        assert_eq!(err.key, "nonexistent");
    }

    #[test]
    fn test_all_keys_are_distinct() {
        for (i, a) in DataSource::ALL.iter().enumerate() {
            for b in &DataSource::ALL[i + 1..] {
                assert_ne!(a.key(), b.key(), "duplicate key {a}");
            }
        }
    }
}
