// crates/countrypick-core/src/model/table.rs
use super::Country;
use crate::error::{PickerError, Result};
use crate::text::fold_key;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The full, validated country list.
///
/// Always sorted by display name (accent-folded, then raw) so that bucketing
/// by first letter yields sections in alphabetical order. ISO codes are
/// unique within a table.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<Country>", into = "Vec<Country>")]
pub struct CountryTable {
    countries: Vec<Country>,
}

impl CountryTable {
    pub fn new(mut countries: Vec<Country>) -> Result<Self> {
        if countries.is_empty() {
            return Err(PickerError::EmptyDataset);
        }

        let mut seen = HashSet::with_capacity(countries.len());
        for c in &countries {
            if !seen.insert(c.iso_code().clone()) {
                return Err(PickerError::DuplicateIsoCode(c.iso_code().to_string()));
            }
        }

        countries.sort_by_cached_key(|c| (fold_key(c.name()), c.name().to_string()));
        Ok(CountryTable { countries })
    }

    /// All countries, sorted by name.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Country> {
        self.countries.iter()
    }
}

impl TryFrom<Vec<Country>> for CountryTable {
    type Error = PickerError;

    fn try_from(value: Vec<Country>) -> Result<Self> {
        CountryTable::new(value)
    }
}

impl From<CountryTable> for Vec<Country> {
    fn from(value: CountryTable) -> Self {
        value.countries
    }
}

impl<'a> IntoIterator for &'a CountryTable {
    type Item = &'a Country;
    type IntoIter = std::slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.countries.iter()
    }
}
