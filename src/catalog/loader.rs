//! Catalog loading from the JSON descriptor format.
//!
//! A catalog source is an ordered array of records, each carrying a
//! `type`, an exact `length`, an optional `region`, and the display
//! `format` template. The loader deserializes the records and compiles
//! them into validated [`FormatDescriptor`]s, rejecting the whole catalog
//! when any record is malformed.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{Catalog, FormatDescriptor};
use crate::error::{CatalogError, CatalogResult};

/// Raw descriptor record as it appears in catalog JSON.
#[derive(Debug, Deserialize)]
struct DescriptorRecord {
    #[serde(rename = "type")]
    kind: String,
    length: usize,
    #[serde(default)]
    region: Option<String>,
    format: String,
}

impl Catalog {
    /// Parses a catalog from a JSON string.
    pub fn from_json(json: &str) -> CatalogResult<Catalog> {
        let records: Vec<DescriptorRecord> = serde_json::from_str(json)?;

        let entries = records
            .iter()
            .map(|record| {
                FormatDescriptor::new(
                    &record.kind,
                    record.length,
                    record.region.as_deref(),
                    &record.format,
                )
            })
            .collect::<CatalogResult<Vec<_>>>()?;

        Ok(Catalog::from_descriptors(entries))
    }

    /// Reads and parses a catalog file.
    pub fn from_path(path: &Path) -> CatalogResult<Catalog> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Catalog::from_json(&json)
    }
}
