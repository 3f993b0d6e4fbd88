//! DOB complaint category code table.
//!
//! DOB complaints carry a two-digit category code; the UI shows the code
//! together with its description. Each code also maps to the department's
//! inspection response priority. The table covers the categories that appear
//! in residential complaint data; codes outside it are shown as-is.

use std::fmt;

/// DOB inspection response priority for a complaint category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Emergency response.
    A,
    /// Priority response.
    B,
    /// Non-emergency response.
    C,
    /// Referred / administrative.
    D,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        };
        f.write_str(letter)
    }
}

/// Looks up the description and response priority for a DOB complaint
/// category code. Returns `None` for codes not in the table.
pub fn complaint_category(code: &str) -> Option<(&'static str, Priority)> {
    let entry = match code {
        "01" => ("Accident - Construction/Plumbing", Priority::A),
        "03" => ("Adjacent Buildings - Not Protected", Priority::A),
        "04" => ("After Hours Work - Illegal", Priority::B),
        "05" => ("Permit - None (Building/PA/Demo etc.)", Priority::B),
        "06" => ("Construction - Change Grade/Change Watercourse", Priority::B),
        "09" => ("Debris - Excessive", Priority::B),
        "10" => (
            "Debris/Building - Falling or In Danger of Falling",
            Priority::A,
        ),
        "12" => ("Demolition - Unsafe/Illegal/Mechanical Demo", Priority::A),
        "13" => ("Elevator In (FDNY) Readiness - None", Priority::A),
        "14" => ("Excavation - Undermining Adjacent Building", Priority::A),
        "15" => ("Fence - None/Inadequate/Illegal", Priority::B),
        "16" => ("Inadequate Support/Shoring", Priority::A),
        "18" => ("Material Storage - Unsafe", Priority::B),
        "20" => ("Landmark Building - Illegal Work", Priority::B),
        "21" => ("Safety Net/Guardrail - Damaged/Inadequate/None", Priority::A),
        "23" => (
            "Sidewalk Shed/Supported Scaffold - Defective/None/Illegal",
            Priority::B,
        ),
        "30" => (
            "Building Shaking/Vibrating/Structural Stability Affected",
            Priority::A,
        ),
        "31" => (
            "Certificate of Occupancy - None/Illegal/Contrary to CO",
            Priority::C,
        ),
        "35" => ("Curb Cut/Driveway/Carport - Illegal", Priority::C),
        "37" => (
            "Egress - Locked/Blocked/Improper/No Secondary Means",
            Priority::B,
        ),
        "45" => ("Illegal Conversion", Priority::B),
        "49" => (
            "Storefront or Business Sign/Awning/Marquee/Canopy - Illegal",
            Priority::C,
        ),
        "52" => ("Sprinkler System - Inadequate", Priority::B),
        "53" => ("Vent/Exhaust - Illegal/Improper", Priority::C),
        "55" => ("Zoning - Non-conforming", Priority::C),
        "56" => ("Boiler - Fumes/Smoke/Carbon Monoxide", Priority::A),
        "58" => ("Boiler - Defective/Non-operative/No Permit", Priority::C),
        "59" => ("Electrical Wiring - Defective/Exposed, In Progress", Priority::B),
        "62" => ("Elevator - Danger Condition/Shaft Open/Unguarded", Priority::A),
        "63" => ("Elevator - Defective/Non-operative", Priority::C),
        "73" => ("Failure to Maintain", Priority::C),
        "74" => ("Illegal Commercial/Manufacturing Use in Residential Zone", Priority::C),
        "83" => ("Construction - Contrary/Beyond Approved Plans/Permits", Priority::B),
        "91" => ("Site Conditions Endangering Workers", Priority::A),
        _ => return None,
    };
    Some(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_code_resolves() {
        let (description, priority) = complaint_category("45").unwrap();
        assert_eq!(description, "Illegal Conversion");
        assert_eq!(priority, Priority::B);
    }

    #[test]
    fn test_unknown_code_is_none() {
        assert_eq!(complaint_category("99"), None);
        assert_eq!(complaint_category(""), None);
    }

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::A.to_string(), "A");
        assert_eq!(Priority::D.to_string(), "D");
    }
}
