//! Cell values and the record-access seam.

use std::fmt;

use chrono::{DateTime, Utc};

/// The value of one table cell, detached from the record it came from.
///
/// Accessors produce these; sort strategies and renderers consume them.
/// Absent fields are `Empty` rather than an `Option` so downstream code never
/// sees a null.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// No value present.
    Empty,
    /// A textual value.
    Text(String),
    /// A numeric value; integer columns are widened to `f64`.
    Number(f64),
    /// A calendar instant in UTC.
    Date(DateTime<Utc>),
}

impl CellValue {
    /// The numeric view of the value, when it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// The date view of the value, when it has one.
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(date) => Some(*date),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    /// Raw textual form, before any column renderer runs. Whole numbers drop
    /// the trailing `.0` so ids and counts read naturally.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => {
                if number.fract() == 0.0 && number.abs() < 9e15 {
                    write!(f, "{}", *number as i64)
                } else {
                    write!(f, "{number}")
                }
            }
            Self::Date(date) => write!(f, "{}", date.to_rfc3339()),
        }
    }
}

/// Output of a cell renderer.
///
/// Most cells render as plain text; id cells that navigate to a detail page
/// render as links. Links are expressed as data so the table component in use
/// decides the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedCell {
    /// Plain display text.
    Text(String),
    /// A navigation link.
    Link {
        /// Visible label.
        label: String,
        /// Application-relative target, e.g. `/hpdcomplaint/123`.
        href: String,
    },
}

impl RenderedCell {
    /// The visible text regardless of cell kind.
    pub fn label(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Link { label, .. } => label,
        }
    }
}

/// Field access by registered column name.
///
/// Every record shape that appears in a table implements this; the
/// implementation must answer every field name its registry declares.
/// Unregistered names yield [`CellValue::Empty`] rather than an error.
pub trait TableRecord {
    /// The value of the named field.
    fn cell(&self, field: &str) -> CellValue;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_number_display_drops_trailing_zero() {
        assert_eq!(CellValue::Number(24.0).to_string(), "24");
        assert_eq!(CellValue::Number(6.5).to_string(), "6.5");
    }

    #[test]
    fn test_empty_displays_as_empty_string() {
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn test_date_displays_as_rfc3339() {
        let date = Utc.with_ymd_and_hms(2021, 3, 15, 10, 0, 0).unwrap();
        assert_eq!(CellValue::Date(date).to_string(), "2021-03-15T10:00:00+00:00");
    }

    #[test]
    fn test_rendered_cell_label() {
        let link = RenderedCell::Link {
            label: "123".to_owned(),
            href: "/hpdcomplaint/123".to_owned(),
        };
        assert_eq!(link.label(), "123");
        assert_eq!(RenderedCell::Text("Open".to_owned()).label(), "Open");
    }
}
