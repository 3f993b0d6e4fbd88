//! Presentation metadata for the housing-records tables.
//!
//! This crate maps each housing dataset to the columns its table shows: for a
//! data-source key it produces render-ready [`ColumnDescriptor`]s (header,
//! value accessor, sort strategy, cell renderer) plus the section heading and
//! empty-state text. It owns no data fetching and no rendering; records come
//! from `dwellings-records` and the descriptors are consumed by whatever
//! table component the application renders with.
//!
//! The interesting seams:
//! - [`columns_for_data_source`]: registry lookup + data-type defaults.
//!   Unknown keys are a hard error.
//! - [`section_metadata_for_data_source`]: static display text. Unknown
//!   keys degrade to empty strings.
//! - [`date_accessor`] / [`format_date`]: absent dates become a fixed
//!   sentinel minimum so sorting and display never deal with nulls.

mod columns;
mod dates;
mod error;
mod metadata;
mod rows;
mod sections;
mod sort;
mod value;


pub use columns::{ColumnDescriptor, columns_for, columns_for_data_source};
pub use dates::{NO_DATE, date_accessor, format_date};
pub use error::TabularError;
pub use metadata::{Accessor, ColumnDataType, ColumnMetadata, Renderer, registry};
pub use sections::{SectionMetadata, section_metadata, section_metadata_for_data_source};
pub use sort::SortStrategy;
pub use value::{CellValue, RenderedCell, TableRecord};
