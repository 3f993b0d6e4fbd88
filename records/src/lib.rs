//! Typed record shapes for the housing-records datasets.
//!
//! This crate holds the data side of the address-lookup pages: one struct per
//! housing dataset (PLUTO lot data, HPD/DOB violations, complaints,
//! litigations, vacate orders), the aggregate payloads the data API returns,
//! the [`DataSource`] key enumeration, and the DOB complaint category code
//! table. The presentation layer (`dwellings-tabular`) maps these shapes to
//! table columns; fetching them is the job of the application's data layer.

mod complaint_codes;
mod dob;
mod house_data;
mod hpd;
mod pluto;
mod sources;

pub use complaint_codes::{Priority, complaint_category};
pub use dob::{DobComplaint, DobVacateOrder, DobViolation};
pub use house_data::HouseData;
pub use hpd::{
    HpdComplaint, HpdComplaintProblem, HpdComplaintProblems, HpdLitigation, HpdVacateOrder,
    HpdViolation,
};
pub use pluto::PlutoRecord;
pub use sources::{DataSource, UnknownDataSourceError};
