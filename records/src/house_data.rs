//! The per-address API payload.

use serde::{Deserialize, Serialize};

use crate::dob::{DobComplaint, DobVacateOrder, DobViolation};
use crate::hpd::{HpdComplaint, HpdLitigation, HpdVacateOrder, HpdViolation};
use crate::pluto::PlutoRecord;

/// Everything the data API returns for one address.
///
/// The serde renames match the camelCase keys of the web API; those keys are
/// also the data-source keys used by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseData {
    /// The PLUTO row for the lot, when one exists.
    pub pluto_data: Option<PlutoRecord>,
    /// HPD violations recorded against the building.
    #[serde(default)]
    pub hpd_violations: Vec<HpdViolation>,
    /// HPD complaints filed for the building.
    #[serde(default)]
    pub hpd_complaints: Vec<HpdComplaint>,
    /// HPD litigation cases for the building.
    #[serde(default)]
    pub hpd_litigations: Vec<HpdLitigation>,
    /// HPD vacate orders for the building.
    #[serde(default)]
    pub hpd_vacate_orders: Vec<HpdVacateOrder>,
    /// DOB violations recorded against the building.
    #[serde(default)]
    pub dob_violations: Vec<DobViolation>,
    /// DOB complaints filed for the building.
    #[serde(default)]
    pub dob_complaints: Vec<DobComplaint>,
    /// DOB vacate orders for the building.
    #[serde(default)]
    pub dob_vacate_orders: Vec<DobVacateOrder>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_deserializes_api_payload() {
        let payload = r#"{
            "plutoData": {
                "ownername": "ACME REALTY LLC",
                "numfloors": 6.0,
                "unitstotal": 24,
                "yearbuilt": 1927
            },
            "hpdViolations": [
                {
                    "violationid": 10051234,
                    "inspectiondate": "2021-03-15T10:00:00Z",
                    "novdescription": "SECTION 27-2005 ADM CODE",
                    "violationstatus": "Open"
                }
            ],
            "hpdComplaints": [],
            "dobComplaints": [
                {
                    "complaintnumber": 4830145,
                    "complaintcategory": "45",
                    "status": "ACTIVE",
                    "dateentered": null
                }
            ]
        }"#;

        let house_data: HouseData = serde_json::from_str(payload).unwrap();

        let pluto = house_data.pluto_data.unwrap();
        assert_eq!(pluto.ownername.as_deref(), Some("ACME REALTY LLC"));
        assert_eq!(pluto.yearbuilt, Some(1927));

        assert_eq!(house_data.hpd_violations.len(), 1);
        assert_eq!(
            house_data.hpd_violations[0].inspectiondate,
            Some(Utc.with_ymd_and_hms(2021, 3, 15, 10, 0, 0).unwrap())
        );

        // Sections absent from the payload default to empty.
        assert!(house_data.hpd_litigations.is_empty());
        assert!(house_data.dob_vacate_orders.is_empty());

        assert_eq!(house_data.dob_complaints[0].dateentered, None);
    }
}
