//! Date normalization and formatting for date-typed columns.

use chrono::{DateTime, Utc};

use crate::value::{CellValue, TableRecord};

/// Fixed minimum instant standing in for "no date".
///
/// Date columns never expose a missing value as an `Option`; absent dates
/// become this sentinel so they sort before every real date and format to an
/// empty string.
pub const NO_DATE: DateTime<Utc> = DateTime::<Utc>::MIN_UTC;

/// The date value of `field` on `row`, or [`NO_DATE`] when the field is
/// absent, null, or not a date.
pub fn date_accessor(row: &dyn TableRecord, field: &str) -> DateTime<Utc> {
    match row.cell(field) {
        CellValue::Date(date) => date,
        _ => NO_DATE,
    }
}

/// Formats a date as `YYYY-MM-DD` in UTC, discarding the time of day.
/// The [`NO_DATE`] sentinel formats to the empty string.
pub fn format_date(date: DateTime<Utc>) -> String {
    if date <= NO_DATE {
        return String::new();
    }
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use dwellings_records::HpdComplaint;

    fn complaint(receiveddate: Option<DateTime<Utc>>) -> HpdComplaint {
        HpdComplaint {
            complaintid: 312_504,
            apartment: None,
            receiveddate,
            status: None,
        }
    }

    #[test]
    fn test_missing_date_normalizes_to_sentinel() {
        let record = complaint(None);
        assert_eq!(date_accessor(&record, "receiveddate"), NO_DATE);
    }

    #[test]
    fn test_present_date_passes_through() {
        let received = Utc.with_ymd_and_hms(2019, 11, 2, 8, 30, 0).unwrap();
        let record = complaint(Some(received));
        assert_eq!(date_accessor(&record, "receiveddate"), received);
    }

    #[test]
    fn test_non_date_field_normalizes_to_sentinel() {
        let record = complaint(None);
        assert_eq!(date_accessor(&record, "complaintid"), NO_DATE);
    }

    #[test]
    fn test_format_drops_time_of_day() {
        let date = Utc.with_ymd_and_hms(2021, 3, 15, 10, 0, 0).unwrap();
        assert_eq!(format_date(date), "2021-03-15");

        let late = Utc.with_ymd_and_hms(2021, 3, 15, 23, 59, 59).unwrap();
        assert_eq!(format_date(late), "2021-03-15");
    }

    #[test]
    fn test_sentinel_formats_to_empty_string() {
        assert_eq!(format_date(NO_DATE), "");
    }
}
