// crates/countrypick-core/src/home.rs

//! # Home Region
//!
//! The deployment's default country and its territories, pinned to a leading
//! section of the picker. Kept as data so each deployment can swap it.

use crate::error::{PickerError, Result};
use crate::model::Country;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Key of the synthetic home section.
pub const HOME_SECTION_KEY: &str = "home";

/// Home section configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeRegion {
    /// Header shown above the home section.
    pub title: String,
    /// Label used for the home section in the index bar.
    #[serde(default = "default_index_label")]
    pub index_label: String,
    /// Entries in display order: the home country first, then territories.
    pub entries: Vec<Country>,
}

fn default_index_label() -> String {
    " ".to_string()
}

impl HomeRegion {
    pub fn new(title: impl Into<String>, entries: Vec<Country>) -> Self {
        HomeRegion {
            title: title.into(),
            index_label: default_index_label(),
            entries,
        }
    }

    /// Australia (+61) with Norfolk Island (+672) under the Australian flag.
    pub fn australia() -> Self {
        let entries = vec![
            Country::builtin("Australia", "AU", "61", "AU"),
            Country::builtin("Norfolk Island", "NF", "672", "AU"),
        ];
        HomeRegion::new("Australia", entries)
    }

    /// Whether `country` is one of the home entries, by ISO code.
    pub fn contains(&self, country: &Country) -> bool {
        self.entries
            .iter()
            .any(|e| e.iso_code() == country.iso_code())
    }

    /// Reads a home region from JSON.
    ///
    /// ```json
    /// { "title": "New Zealand",
    ///   "entries": [ { "name": "New Zealand", "iso2": "NZ", "phone_code": "64" } ] }
    /// ```
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let home: HomeRegion = serde_json::from_reader(reader)?;
        if home.entries.is_empty() {
            return Err(PickerError::EmptyDataset);
        }
        Ok(home)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            PickerError::NotFound(format!("Home region not found at {}: {}", path.display(), e))
        })?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }
}

impl Default for HomeRegion {
    fn default() -> Self {
        HomeRegion::australia()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn australia_lists_norfolk_island_second() {
        let home = HomeRegion::australia();
        let codes: Vec<_> = home.entries.iter().map(|c| c.iso_code().as_str()).collect();
        assert_eq!(codes, ["AU", "NF"]);
        assert_eq!(home.entries[1].formatted_dial_code(), "+672");
        assert_eq!(home.entries[1].flag().map(|f| f.code()), Some("AU"));
        assert_eq!(home.index_label, " ");
    }

    #[test]
    fn membership_is_by_iso_code() {
        let home = HomeRegion::australia();
        let dataset_norfolk = Country::new("Norfolk Island", "NF", "672", Some("NF")).unwrap();
        let austria = Country::new("Austria", "AT", "43", None).unwrap();
        assert!(home.contains(&dataset_norfolk));
        assert!(!home.contains(&austria));
    }

    #[test]
    fn parses_home_region_json() {
        let json = r#"{
            "title": "New Zealand",
            "entries": [
                { "name": "New Zealand", "iso2": "NZ", "phone_code": "64", "flag": "NZ" },
                { "name": "Tokelau", "iso2": "TK", "phone_code": "690" }
            ]
        }"#;
        let home = HomeRegion::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(home.title, "New Zealand");
        assert_eq!(home.index_label, " ");
        assert_eq!(home.entries.len(), 2);
    }

    #[test]
    fn rejects_home_region_without_entries() {
        let json = r#"{ "title": "Nowhere", "entries": [] }"#;
        assert!(matches!(
            HomeRegion::from_json_reader(json.as_bytes()),
            Err(PickerError::EmptyDataset)
        ));
    }
}
