//! HPD (housing preservation) record shapes.
//!
//! One struct per HPD dataset: violations, complaints, litigations, vacate
//! orders, and the per-complaint problem detail rows. Field names match the
//! municipal open-data column names so the structs deserialize straight from
//! the API payload; nullable columns are `Option`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A housing-maintenance violation issued by HPD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HpdViolation {
    /// Unique violation identifier.
    pub violationid: i64,
    /// Date of the inspection that produced the violation.
    pub inspectiondate: Option<DateTime<Utc>>,
    /// Notice-of-violation description text.
    pub novdescription: Option<String>,
    /// Current status, e.g. "Open" or "Close".
    pub violationstatus: Option<String>,
}

/// A complaint filed with HPD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HpdComplaint {
    /// Unique complaint identifier; the UI links this to the complaint
    /// detail page.
    pub complaintid: i64,
    /// Apartment the complaint concerns, when reported.
    pub apartment: Option<String>,
    /// Date the complaint was received.
    pub receiveddate: Option<DateTime<Utc>>,
    /// Current status.
    pub status: Option<String>,
}

/// A housing-litigation case brought against a building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HpdLitigation {
    /// Unique litigation identifier.
    pub litigationid: i64,
    /// Type of case, e.g. "Tenant Action".
    pub casetype: Option<String>,
    /// Current case status.
    pub casestatus: Option<String>,
    /// Date the case was opened.
    pub caseopendate: Option<DateTime<Utc>>,
    /// Civil penalty, when one was imposed.
    pub penalty: Option<String>,
    /// Whether the court found harassment.
    pub findingofharassment: Option<String>,
}

/// A vacate order issued by HPD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HpdVacateOrder {
    /// Vacate order number.
    pub vacateordernumber: i64,
    /// Date the order took effect.
    pub vacateeffectivedate: Option<DateTime<Utc>>,
    /// Whole-building or partial vacate.
    pub vacatetype: Option<String>,
    /// Primary reason for the order.
    pub primaryvacatereason: Option<String>,
    /// Date the order was rescinded, when it was.
    pub rescinddate: Option<DateTime<Utc>>,
    /// Number of units vacated.
    pub numberofvacatedunits: Option<i64>,
}

/// A single problem reported under an HPD complaint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HpdComplaintProblem {
    /// Unique problem identifier.
    pub problemid: i64,
    /// Unit type, e.g. "Apartment".
    pub unittype: Option<String>,
    /// Space type, e.g. "Kitchen".
    pub spacetype: Option<String>,
    /// Major problem category, e.g. "Heat/Hot Water".
    pub majorcategory: Option<String>,
    /// Minor problem category.
    pub minorcategory: Option<String>,
    /// Problem code.
    pub code: Option<String>,
    /// Current status.
    pub status: Option<String>,
    /// Human-readable status description.
    pub statusdescription: Option<String>,
    /// Date of the last status change.
    pub statusdate: Option<DateTime<Utc>>,
}

/// Per-complaint API payload: the problems recorded under one complaint ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HpdComplaintProblems {
    /// The problem rows for the complaint.
    #[serde(default)]
    pub problems: Vec<HpdComplaintProblem>,
}
