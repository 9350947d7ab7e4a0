//! Agency catalog: read-only records loaded once per session from a JSON
//! source. Every accessor applies a permissive default so structurally
//! incomplete records degrade scoring instead of aborting it.

mod parser;

pub use parser::parse_bedroom_range;

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::info;

/// One housing-provider catalog entry as it appears in the source JSON.
/// Field names mirror the upstream export; everything is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyRecord {
    #[serde(rename = "Organization", default)]
    pub organization: Option<String>,
    #[serde(rename = "Phone", default)]
    pub phone: Option<String>,
    #[serde(rename = "Address", default)]
    pub address: Option<String>,
    #[serde(rename = "Min_Rent", default)]
    pub min_rent: Option<f64>,
    #[serde(rename = "Max_Rent", default)]
    pub max_rent: Option<f64>,
    #[serde(rename = "Bedrooms", default)]
    pub bedrooms: Option<BedroomsField>,
    #[serde(rename = "Pet_Friendly", default)]
    pub pet_friendly: Option<String>,
    #[serde(rename = "Match_Tags", default)]
    pub match_tags: Vec<String>,
    #[serde(rename = "Notes", default)]
    pub notes: Option<String>,
}

/// The bedrooms column arrives as an integer, a float, or a range string
/// ("2", "2.0", "1-3"); every form is handed to the range parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BedroomsField {
    Number(i64),
    Float(f64),
    Text(String),
}

impl AgencyRecord {
    /// Sentinel upper bound so an absent max rent never rejects a match.
    pub const MAX_RENT_SENTINEL: f64 = 1_000_000_000.0;

    pub fn organization(&self) -> &str {
        self.organization.as_deref().unwrap_or("Unknown")
    }

    pub fn phone(&self) -> &str {
        self.phone.as_deref().unwrap_or("N/A")
    }

    pub fn address(&self) -> &str {
        self.address.as_deref().unwrap_or("N/A")
    }

    /// Rents are kept as raw numerics; source data mixes integers and
    /// fractional dollar amounts.
    pub fn min_rent(&self) -> f64 {
        self.min_rent.unwrap_or(0.0)
    }

    pub fn max_rent(&self) -> f64 {
        self.max_rent.unwrap_or(Self::MAX_RENT_SENTINEL)
    }

    /// Derived from case-insensitive equality to "yes"; anything else
    /// (including a missing field) counts as not pet friendly.
    pub fn is_pet_friendly(&self) -> bool {
        self.pet_friendly
            .as_deref()
            .map(|value| value.trim().eq_ignore_ascii_case("yes"))
            .unwrap_or(false)
    }

    pub fn pet_friendly_label(&self) -> &str {
        self.pet_friendly.as_deref().unwrap_or("Unknown")
    }

    /// Parsed bedroom bounds; a missing or malformed field falls back to
    /// the widest range so the agency stays eligible.
    pub fn bedroom_range(&self) -> (i64, i64) {
        match &self.bedrooms {
            Some(field) => parse_bedroom_range(field),
            None => (0, 10),
        }
    }

    pub fn bedrooms_label(&self) -> String {
        match &self.bedrooms {
            Some(BedroomsField::Number(value)) => value.to_string(),
            Some(BedroomsField::Float(value)) => value.to_string(),
            Some(BedroomsField::Text(text)) => text.clone(),
            None => "N/A".to_string(),
        }
    }

    /// Case-folded membership test over the free-form match tags.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.match_tags
            .iter()
            .any(|candidate| candidate.trim().eq_ignore_ascii_case(tag))
    }

    pub fn notes(&self) -> &str {
        self.notes.as_deref().unwrap_or("")
    }
}

/// Error raised while loading the agency catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("catalog is not a valid JSON array of agencies: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load the catalog from a JSON file on disk.
pub fn load_catalog(path: &Path) -> Result<Vec<AgencyRecord>, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let agencies = read_catalog(BufReader::new(file))?;
    info!(count = agencies.len(), path = %path.display(), "agency catalog loaded");
    Ok(agencies)
}

/// Deserialize a catalog from any reader; used by tests and the loader.
pub fn read_catalog<R: Read>(reader: R) -> Result<Vec<AgencyRecord>, CatalogError> {
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_permissive_defaults() {
        let agencies = read_catalog("[{}]".as_bytes()).expect("empty record parses");
        let agency = &agencies[0];
        assert_eq!(agency.organization(), "Unknown");
        assert_eq!(agency.min_rent(), 0.0);
        assert_eq!(agency.max_rent(), AgencyRecord::MAX_RENT_SENTINEL);
        assert_eq!(agency.bedroom_range(), (0, 10));
        assert!(!agency.is_pet_friendly());
        assert!(!agency.has_tag("family-friendly"));
        assert_eq!(agency.notes(), "");
    }

    #[test]
    fn reads_source_field_names() {
        let json = r#"[{
            "Organization": "Riverbend Housing",
            "Phone": "555-0100",
            "Address": "12 River St",
            "Min_Rent": 600,
            "Max_Rent": 900,
            "Bedrooms": "1-3",
            "Pet_Friendly": "Yes",
            "Match_Tags": ["Family-Friendly", "voucher-friendly"],
            "Notes": "Accepts applications weekly"
        }]"#;
        let agencies = read_catalog(json.as_bytes()).expect("catalog parses");
        let agency = &agencies[0];
        assert_eq!(agency.organization(), "Riverbend Housing");
        assert_eq!(agency.min_rent(), 600.0);
        assert_eq!(agency.bedroom_range(), (1, 3));
        assert!(agency.is_pet_friendly());
        assert!(agency.has_tag("family-friendly"));
        assert!(agency.has_tag("VOUCHER-FRIENDLY"));
    }

    #[test]
    fn numeric_bedrooms_field_is_accepted() {
        let agencies =
            read_catalog(r#"[{"Bedrooms": 2}]"#.as_bytes()).expect("numeric bedrooms parse");
        assert_eq!(agencies[0].bedroom_range(), (2, 2));
        assert_eq!(agencies[0].bedrooms_label(), "2");
    }

    #[test]
    fn float_valued_fields_parse_without_aborting_the_load() {
        let json = r#"[{"Bedrooms": 2.0, "Min_Rent": 400.5, "Max_Rent": 900.0}]"#;
        let agencies = read_catalog(json.as_bytes()).expect("float-valued record parses");
        let agency = &agencies[0];
        assert_eq!(agency.bedroom_range(), (2, 2));
        assert_eq!(agency.min_rent(), 400.5);
        assert_eq!(agency.max_rent(), 900.0);
    }
}
