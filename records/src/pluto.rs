//! PLUTO land-use / property characteristics records.

use serde::{Deserialize, Serialize};

/// A PLUTO row for a single tax lot.
///
/// Field names match the municipal open-data column names so the structs
/// deserialize straight from the API payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlutoRecord {
    /// Name of the owner of record.
    pub ownername: Option<String>,
    /// Number of floors in the primary building.
    pub numfloors: Option<f64>,
    /// Total number of units on the lot.
    pub unitstotal: Option<i64>,
    /// Year the primary building was built.
    pub yearbuilt: Option<i64>,
}
