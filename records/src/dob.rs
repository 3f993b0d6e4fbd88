//! DOB (buildings department) record shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A violation issued by DOB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DobViolation {
    /// Internal tracking number.
    pub number: Option<String>,
    /// Date the violation was issued.
    pub issuedate: Option<DateTime<Utc>>,
    /// Violation number as printed on the notice.
    pub violationnumber: Option<String>,
    /// Violation type code, e.g. "LL2604S".
    pub violationtypecode: Option<String>,
    /// Violation category description.
    pub violationcategory: Option<String>,
    /// Violation type description.
    pub violationtype: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
}

/// A complaint filed with DOB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DobComplaint {
    /// Unique complaint number.
    pub complaintnumber: i64,
    /// Two-digit complaint category code; see
    /// [`complaint_category`](crate::complaint_category) for the code table.
    pub complaintcategory: Option<String>,
    /// Current status.
    pub status: Option<String>,
    /// Date the complaint was entered.
    pub dateentered: Option<DateTime<Utc>>,
}

/// A vacate order issued by DOB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DobVacateOrder {
    /// Date of the last disposition on the order.
    pub lastdispositiondate: Option<DateTime<Utc>>,
    /// Description of the last disposition code.
    pub lastdispositioncodedescription: Option<String>,
    /// Description of the complaint category that triggered the order.
    pub complaintcategorydescription: Option<String>,
}
