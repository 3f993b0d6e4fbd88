//! Section titles and empty-state text per data source.

use dwellings_records::DataSource;
use log::warn;

/// Static display text for one table section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionMetadata {
    /// Section heading.
    pub title: &'static str,
    /// Text shown when the section has no rows.
    pub no_data_description: &'static str,
}

impl SectionMetadata {
    /// Display-safe default for unrecognized keys.
    pub const EMPTY: Self = Self {
        title: "",
        no_data_description: "",
    };
}

/// The section text for a data source.
pub fn section_metadata(source: DataSource) -> SectionMetadata {
    match source {
        DataSource::Pluto => SectionMetadata {
            title: "PLUTO data",
            no_data_description: "No PLUTO data found for this address",
        },
        DataSource::HpdViolations => SectionMetadata {
            title: "HPD violations",
            no_data_description: "No HPD violations found for this address",
        },
        DataSource::HpdComplaints => SectionMetadata {
            title: "HPD complaints",
            no_data_description: "No HPD complaints found for this address",
        },
        DataSource::HpdLitigations => SectionMetadata {
            title: "HPD litigations",
            no_data_description: "No HPD litigations found for this address",
        },
        DataSource::HpdVacateOrders => SectionMetadata {
            title: "HPD vacate orders",
            no_data_description: "No HPD vacate orders found for this address",
        },
        DataSource::DobViolations => SectionMetadata {
            title: "DOB violations",
            no_data_description: "No DOB violations found for this address",
        },
        DataSource::DobComplaints => SectionMetadata {
            title: "DOB complaints",
            no_data_description: "No DOB complaints found for this address",
        },
        DataSource::DobVacateOrders => SectionMetadata {
            title: "DOB vacate orders",
            no_data_description: "No DOB vacate orders found for this address",
        },
        DataSource::HpdComplaintProblems => SectionMetadata {
            title: "HPD complaint problems",
            no_data_description: "No HPD complaint problems found for this complaint ID",
        },
    }
}

/// Resolves a data-source key to its section text.
///
/// Unlike column resolution, an unknown key here degrades to empty strings:
/// a missing heading is display-safe, so the page renders rather than fails.
pub fn section_metadata_for_data_source(key: &str) -> SectionMetadata {
    match key.parse::<DataSource>() {
        Ok(source) => section_metadata(source),
        Err(_) => {
            warn!("no section metadata for data source {key}, using empty default");
            SectionMetadata::EMPTY
        }
    }
}
