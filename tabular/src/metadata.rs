//! Per-source column metadata registries.
//!
//! Each data source has an ordered list of [`ColumnMetadata`] entries; list
//! order is display order. The registries are const data, built once and
//! never mutated: adding a column to a table means adding an entry here and
//! answering the field name in the record's [`TableRecord`] implementation.

use dwellings_records::{DataSource, complaint_category};

use crate::value::{CellValue, RenderedCell, TableRecord};

/// The coarse type of a column's values, driving sort and render defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnDataType {
    /// Free-form text.
    Text,
    /// Numeric values, including ids and counts.
    Number,
    /// Calendar dates.
    Date,
}

/// A custom value accessor for a column.
pub type Accessor = fn(&dyn TableRecord) -> CellValue;

/// A custom cell renderer for a column.
pub type Renderer = fn(&CellValue) -> RenderedCell;

/// Display metadata for one column of one data source.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMetadata {
    /// Record field name; must exist on the source's record shape.
    pub field: &'static str,
    /// Header text shown above the column.
    pub header: &'static str,
    /// Data type, from which sort and render defaults derive.
    pub data_type: ColumnDataType,
    /// Custom value accessor, overriding the plain field lookup.
    pub accessor: Option<Accessor>,
    /// Custom cell renderer, overriding the data-type default.
    pub renderer: Option<Renderer>,
}

impl ColumnMetadata {
    const fn new(field: &'static str, header: &'static str, data_type: ColumnDataType) -> Self {
        Self {
            field,
            header,
            data_type,
            accessor: None,
            renderer: None,
        }
    }

    const fn with_accessor(mut self, accessor: Accessor) -> Self {
        self.accessor = Some(accessor);
        self
    }

    const fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = Some(renderer);
        self
    }
}

/// Renders an HPD complaint id as a link to the complaint detail page.
fn hpd_complaint_link(value: &CellValue) -> RenderedCell {
    let label = value.to_string();
    RenderedCell::Link {
        href: format!("/hpdcomplaint/{label}"),
        label,
    }
}

/// Enriches a DOB complaint category code with its description, e.g.
/// `45` becomes `45 - Illegal Conversion`. Unknown codes pass through bare.
fn dob_complaint_category(row: &dyn TableRecord) -> CellValue {
    let value = row.cell("complaintcategory");
    let CellValue::Text(code) = &value else {
        return value;
    };
    match complaint_category(code) {
        Some((description, _priority)) => CellValue::Text(format!("{code} - {description}")),
        None => value,
    }
}

const PLUTO_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::new("ownername", "Owner", ColumnDataType::Text),
    ColumnMetadata::new("numfloors", "# floors", ColumnDataType::Number),
    ColumnMetadata::new("unitstotal", "# units", ColumnDataType::Number),
    ColumnMetadata::new("yearbuilt", "Year built", ColumnDataType::Number),
];

const HPD_VIOLATION_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::new("violationid", "Violation ID", ColumnDataType::Number),
    ColumnMetadata::new("inspectiondate", "Inspection date", ColumnDataType::Date),
    ColumnMetadata::new("novdescription", "Description", ColumnDataType::Text),
    ColumnMetadata::new("violationstatus", "Status", ColumnDataType::Text),
];

const HPD_COMPLAINT_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::new("complaintid", "Complaint ID", ColumnDataType::Number)
        .with_renderer(hpd_complaint_link),
    ColumnMetadata::new("apartment", "Apartment", ColumnDataType::Text),
    ColumnMetadata::new("receiveddate", "Received date", ColumnDataType::Date),
    ColumnMetadata::new("status", "Status", ColumnDataType::Text),
];

const HPD_LITIGATION_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::new("litigationid", "Litigation ID", ColumnDataType::Number),
    ColumnMetadata::new("casetype", "Case type", ColumnDataType::Text),
    ColumnMetadata::new("casestatus", "Status", ColumnDataType::Text),
    ColumnMetadata::new("caseopendate", "Opened", ColumnDataType::Date),
    ColumnMetadata::new("penalty", "Penalty", ColumnDataType::Text),
    ColumnMetadata::new(
        "findingofharassment",
        "Finding of harassment",
        ColumnDataType::Text,
    ),
];

const HPD_VACATE_ORDER_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::new(
        "vacateordernumber",
        "Vacate order number",
        ColumnDataType::Number,
    ),
    ColumnMetadata::new("vacateeffectivedate", "Effective date", ColumnDataType::Date),
    ColumnMetadata::new("vacatetype", "Type", ColumnDataType::Text),
    ColumnMetadata::new("primaryvacatereason", "Reason", ColumnDataType::Text),
    ColumnMetadata::new("rescinddate", "Rescind date", ColumnDataType::Date),
    ColumnMetadata::new("numberofvacatedunits", "# units", ColumnDataType::Number),
];

const DOB_VIOLATION_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::new("number", "Number", ColumnDataType::Text),
    ColumnMetadata::new("issuedate", "Issue date", ColumnDataType::Date),
    ColumnMetadata::new("violationnumber", "Violation number", ColumnDataType::Text),
    ColumnMetadata::new(
        "violationtypecode",
        "Violation type code",
        ColumnDataType::Text,
    ),
    ColumnMetadata::new(
        "violationcategory",
        "Violation category",
        ColumnDataType::Text,
    ),
    ColumnMetadata::new("violationtype", "Violation type", ColumnDataType::Text),
    ColumnMetadata::new("description", "Description", ColumnDataType::Text),
];

const DOB_COMPLAINT_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::new("complaintnumber", "Number", ColumnDataType::Number),
    ColumnMetadata::new("complaintcategory", "Category", ColumnDataType::Text)
        .with_accessor(dob_complaint_category),
    ColumnMetadata::new("status", "Status", ColumnDataType::Text),
    ColumnMetadata::new("dateentered", "Date entered", ColumnDataType::Date),
];

const DOB_VACATE_ORDER_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::new(
        "lastdispositiondate",
        "Last disposition date",
        ColumnDataType::Date,
    ),
    ColumnMetadata::new(
        "lastdispositioncodedescription",
        "Last disposition description",
        ColumnDataType::Text,
    ),
    ColumnMetadata::new(
        "complaintcategorydescription",
        "Complaint category description",
        ColumnDataType::Text,
    ),
];

const HPD_COMPLAINT_PROBLEM_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::new("problemid", "Problem ID", ColumnDataType::Number),
    ColumnMetadata::new("unittype", "Unit type", ColumnDataType::Text),
    ColumnMetadata::new("spacetype", "Space type", ColumnDataType::Text),
    ColumnMetadata::new("majorcategory", "Major category", ColumnDataType::Text),
    ColumnMetadata::new("minorcategory", "Minor category", ColumnDataType::Text),
    ColumnMetadata::new("code", "Code", ColumnDataType::Text),
    ColumnMetadata::new("status", "Status", ColumnDataType::Text),
    ColumnMetadata::new(
        "statusdescription",
        "Status description",
        ColumnDataType::Text,
    ),
    ColumnMetadata::new("statusdate", "Status date", ColumnDataType::Date),
];

/// The ordered column registry for a data source.
pub fn registry(source: DataSource) -> &'static [ColumnMetadata] {
    match source {
        DataSource::Pluto => PLUTO_COLUMNS,
        DataSource::HpdViolations => HPD_VIOLATION_COLUMNS,
        DataSource::HpdComplaints => HPD_COMPLAINT_COLUMNS,
        DataSource::HpdLitigations => HPD_LITIGATION_COLUMNS,
        DataSource::HpdVacateOrders => HPD_VACATE_ORDER_COLUMNS,
        DataSource::DobViolations => DOB_VIOLATION_COLUMNS,
        DataSource::DobComplaints => DOB_COMPLAINT_COLUMNS,
        DataSource::DobVacateOrders => DOB_VACATE_ORDER_COLUMNS,
        DataSource::HpdComplaintProblems => HPD_COMPLAINT_PROBLEM_COLUMNS,
    }
}
