//! Column builder: expands registry entries into render-ready descriptors.

use std::cmp::Ordering;

use dwellings_records::DataSource;
use log::debug;

use crate::dates::{date_accessor, format_date};
use crate::error::TabularError;
use crate::metadata::{Accessor, ColumnDataType, ColumnMetadata, Renderer, registry};
use crate::sort::SortStrategy;
use crate::value::{CellValue, RenderedCell, TableRecord};

/// A resolved, render-ready column.
///
/// Derived deterministically from a registry entry: the sort strategy comes
/// from the data type, date columns get the sentinel-normalizing accessor and
/// the calendar-date renderer, and any custom accessor/renderer from the
/// registry wins over those defaults.
#[derive(Debug, Clone, Copy)]
pub struct ColumnDescriptor {
    /// Record field name this column reads.
    pub field: &'static str,
    /// Header text shown above the column.
    pub header: &'static str,
    /// Data type the defaults were derived from.
    pub data_type: ColumnDataType,
    /// How the column orders its values.
    pub sort: SortStrategy,
    accessor: Option<Accessor>,
    renderer: Option<Renderer>,
}

impl ColumnDescriptor {
    fn from_metadata(metadata: &ColumnMetadata) -> Self {
        Self {
            field: metadata.field,
            header: metadata.header,
            data_type: metadata.data_type,
            sort: SortStrategy::for_data_type(metadata.data_type),
            accessor: metadata.accessor,
            renderer: metadata.renderer,
        }
    }

    /// The cell value of this column for `row`.
    ///
    /// Date columns normalize absent values to the no-date sentinel so the
    /// sort path never sees a hole.
    pub fn value(&self, row: &dyn TableRecord) -> CellValue {
        if let Some(accessor) = self.accessor {
            return accessor(row);
        }
        match self.data_type {
            ColumnDataType::Date => CellValue::Date(date_accessor(row, self.field)),
            ColumnDataType::Text | ColumnDataType::Number => row.cell(self.field),
        }
    }

    /// The rendered cell for `row`: the custom renderer when the registry
    /// declares one, the calendar-date format for date values, and the raw
    /// textual form otherwise.
    pub fn render(&self, row: &dyn TableRecord) -> RenderedCell {
        let value = self.value(row);
        if let Some(renderer) = self.renderer {
            return renderer(&value);
        }
        match value {
            CellValue::Date(date) => RenderedCell::Text(format_date(date)),
            other => RenderedCell::Text(other.to_string()),
        }
    }

    /// Orders two rows by this column.
    pub fn compare(&self, a: &dyn TableRecord, b: &dyn TableRecord) -> Ordering {
        self.sort.compare(&self.value(a), &self.value(b))
    }
}

/// The render-ready columns for a data source, in display order.
pub fn columns_for(source: DataSource) -> Vec<ColumnDescriptor> {
    registry(source)
        .iter()
        .map(ColumnDescriptor::from_metadata)
        .collect()
}

/// Resolves a data-source key and builds its columns.
///
/// Unknown keys are a hard failure: a caller asking for a table nobody
/// registered is a configuration bug, not a state to render through.
pub fn columns_for_data_source(key: &str) -> Result<Vec<ColumnDescriptor>, TabularError> {
    let source = key
        .parse::<DataSource>()
        .map_err(|_| TabularError::unknown_data_source(key))?;
    debug!("building columns for data source {key}");
    Ok(columns_for(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use dwellings_records::{HpdComplaint, HpdViolation};

    fn violation(inspectiondate: Option<chrono::DateTime<Utc>>) -> HpdViolation {
        HpdViolation {
            violationid: 10_051_234,
            inspectiondate,
            novdescription: Some("SECTION 27-2005 ADM CODE".to_owned()),
            violationstatus: Some("Open".to_owned()),
        }
    }

    fn column(source: DataSource, field: &str) -> ColumnDescriptor {
        columns_for(source)
            .into_iter()
            .find(|column| column.field == field)
            .expect("column not registered")
    }

    #[test]
    fn test_unknown_key_fails() {
        let err = columns_for_data_source("nonexistent").unwrap_err();
        assert_eq!(err, TabularError::unknown_data_source("nonexistent"));
    }

    #[test]
    fn test_known_key_builds_registry_order() {
        let columns = columns_for_data_source("hpdViolations").unwrap();
        let fields: Vec<&str> = columns.iter().map(|column| column.field).collect();
        assert_eq!(
            fields,
            [
                "violationid",
                "inspectiondate",
                "novdescription",
                "violationstatus"
            ]
        );
    }

    #[test]
    fn test_number_column_sorts_numerically() {
        let column = column(DataSource::HpdViolations, "violationid");
        assert_eq!(column.sort, SortStrategy::Basic);
    }

    #[test]
    fn test_date_column_renders_calendar_date() {
        let column = column(DataSource::HpdViolations, "inspectiondate");
        let record = violation(Some(Utc.with_ymd_and_hms(2021, 3, 15, 10, 0, 0).unwrap()));
        assert_eq!(
            column.render(&record),
            RenderedCell::Text("2021-03-15".to_owned())
        );
    }

    #[test]
    fn test_date_column_renders_missing_date_as_empty() {
        let column = column(DataSource::HpdViolations, "inspectiondate");
        let record = violation(None);
        assert_eq!(column.render(&record), RenderedCell::Text(String::new()));
    }

    #[test]
    fn test_date_column_sorts_missing_first() {
        let column = column(DataSource::HpdViolations, "inspectiondate");
        let dated = violation(Some(Utc.with_ymd_and_hms(1998, 6, 1, 0, 0, 0).unwrap()));
        let undated = violation(None);
        assert_eq!(column.compare(&undated, &dated), Ordering::Less);
        assert_eq!(column.compare(&dated, &undated), Ordering::Greater);
    }

    #[test]
    fn test_complaint_id_renders_as_link() {
        let column = column(DataSource::HpdComplaints, "complaintid");
        let record = HpdComplaint {
            complaintid: 312_504,
            apartment: Some("4A".to_owned()),
            receiveddate: None,
            status: Some("CLOSE".to_owned()),
        };
        assert_eq!(
            column.render(&record),
            RenderedCell::Link {
                label: "312504".to_owned(),
                href: "/hpdcomplaint/312504".to_owned(),
            }
        );
    }
}
