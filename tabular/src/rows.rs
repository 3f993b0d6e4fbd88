//! [`TableRecord`] implementations for the housing record shapes.
//!
//! Each implementation matches exactly the field names its column registry
//! declares. Anything else is `Empty`, which keeps the registry the single
//! source of truth for what a table can show.

use chrono::{DateTime, Utc};
use dwellings_records::{
    DobComplaint, DobVacateOrder, DobViolation, HpdComplaint, HpdComplaintProblem, HpdLitigation,
    HpdVacateOrder, HpdViolation, PlutoRecord,
};

use crate::value::{CellValue, TableRecord};

fn text(value: Option<&str>) -> CellValue {
    match value {
        Some(text) => CellValue::Text(text.to_owned()),
        None => CellValue::Empty,
    }
}

fn number(value: Option<f64>) -> CellValue {
    match value {
        Some(number) => CellValue::Number(number),
        None => CellValue::Empty,
    }
}

fn integer(value: Option<i64>) -> CellValue {
    number(value.map(|n| n as f64))
}

fn date(value: Option<DateTime<Utc>>) -> CellValue {
    match value {
        Some(date) => CellValue::Date(date),
        None => CellValue::Empty,
    }
}

impl TableRecord for PlutoRecord {
    fn cell(&self, field: &str) -> CellValue {
        match field {
            "ownername" => text(self.ownername.as_deref()),
            "numfloors" => number(self.numfloors),
            "unitstotal" => integer(self.unitstotal),
            "yearbuilt" => integer(self.yearbuilt),
            _ => CellValue::Empty,
        }
    }
}

impl TableRecord for HpdViolation {
    fn cell(&self, field: &str) -> CellValue {
        match field {
            "violationid" => integer(Some(self.violationid)),
            "inspectiondate" => date(self.inspectiondate),
            "novdescription" => text(self.novdescription.as_deref()),
            "violationstatus" => text(self.violationstatus.as_deref()),
            _ => CellValue::Empty,
        }
    }
}

impl TableRecord for HpdComplaint {
    fn cell(&self, field: &str) -> CellValue {
        match field {
            "complaintid" => integer(Some(self.complaintid)),
            "apartment" => text(self.apartment.as_deref()),
            "receiveddate" => date(self.receiveddate),
            "status" => text(self.status.as_deref()),
            _ => CellValue::Empty,
        }
    }
}

impl TableRecord for HpdLitigation {
    fn cell(&self, field: &str) -> CellValue {
        match field {
            "litigationid" => integer(Some(self.litigationid)),
            "casetype" => text(self.casetype.as_deref()),
            "casestatus" => text(self.casestatus.as_deref()),
            "caseopendate" => date(self.caseopendate),
            "penalty" => text(self.penalty.as_deref()),
            "findingofharassment" => text(self.findingofharassment.as_deref()),
            _ => CellValue::Empty,
        }
    }
}

impl TableRecord for HpdVacateOrder {
    fn cell(&self, field: &str) -> CellValue {
        match field {
            "vacateordernumber" => integer(Some(self.vacateordernumber)),
            "vacateeffectivedate" => date(self.vacateeffectivedate),
            "vacatetype" => text(self.vacatetype.as_deref()),
            "primaryvacatereason" => text(self.primaryvacatereason.as_deref()),
            "rescinddate" => date(self.rescinddate),
            "numberofvacatedunits" => integer(self.numberofvacatedunits),
            _ => CellValue::Empty,
        }
    }
}

impl TableRecord for DobViolation {
    fn cell(&self, field: &str) -> CellValue {
        match field {
            "number" => text(self.number.as_deref()),
            "issuedate" => date(self.issuedate),
            "violationnumber" => text(self.violationnumber.as_deref()),
            "violationtypecode" => text(self.violationtypecode.as_deref()),
            "violationcategory" => text(self.violationcategory.as_deref()),
            "violationtype" => text(self.violationtype.as_deref()),
            "description" => text(self.description.as_deref()),
            _ => CellValue::Empty,
        }
    }
}

impl TableRecord for DobComplaint {
    fn cell(&self, field: &str) -> CellValue {
        match field {
            "complaintnumber" => integer(Some(self.complaintnumber)),
            "complaintcategory" => text(self.complaintcategory.as_deref()),
            "status" => text(self.status.as_deref()),
            "dateentered" => date(self.dateentered),
            _ => CellValue::Empty,
        }
    }
}

impl TableRecord for DobVacateOrder {
    fn cell(&self, field: &str) -> CellValue {
        match field {
            "lastdispositiondate" => date(self.lastdispositiondate),
            "lastdispositioncodedescription" => {
                text(self.lastdispositioncodedescription.as_deref())
            }
            "complaintcategorydescription" => text(self.complaintcategorydescription.as_deref()),
            _ => CellValue::Empty,
        }
    }
}

impl TableRecord for HpdComplaintProblem {
    fn cell(&self, field: &str) -> CellValue {
        match field {
            "problemid" => integer(Some(self.problemid)),
            "unittype" => text(self.unittype.as_deref()),
            "spacetype" => text(self.spacetype.as_deref()),
            "majorcategory" => text(self.majorcategory.as_deref()),
            "minorcategory" => text(self.minorcategory.as_deref()),
            "code" => text(self.code.as_deref()),
            "status" => text(self.status.as_deref()),
            "statusdescription" => text(self.statusdescription.as_deref()),
            "statusdate" => date(self.statusdate),
            _ => CellValue::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_field_is_empty() {
        let record = PlutoRecord {
            ownername: Some("ACME REALTY LLC".to_owned()),
            numfloors: Some(6.0),
            unitstotal: Some(24),
            yearbuilt: Some(1927),
        };
        assert_eq!(record.cell("bbl"), CellValue::Empty);
    }

    #[test]
    fn test_null_field_is_empty() {
        let record = PlutoRecord {
            ownername: None,
            numfloors: None,
            unitstotal: None,
            yearbuilt: None,
        };
        assert_eq!(record.cell("ownername"), CellValue::Empty);
        assert_eq!(record.cell("numfloors"), CellValue::Empty);
    }

    #[test]
    fn test_integer_fields_widen_to_number() {
        let record = PlutoRecord {
            ownername: None,
            numfloors: None,
            unitstotal: Some(24),
            yearbuilt: None,
        };
        assert_eq!(record.cell("unitstotal"), CellValue::Number(24.0));
    }
}
