// crates/countrypick-core/src/model/convert.rs
use super::raw::CountryRaw;
use super::table::CountryTable;
use super::Country;
use crate::error::{PickerError, Result};

impl TryFrom<CountryRaw> for Country {
    type Error = PickerError;

    fn try_from(raw: CountryRaw) -> Result<Self> {
        Country::new(&raw.name, &raw.iso2, &raw.phone_code, raw.flag.as_deref())
    }
}

/// **Standard Converter:** Raw rows -> validated, sorted table.
///
/// Fails on the first invalid row; a dataset is either fully valid or not
/// loaded at all.
pub fn from_raw(raw_countries: Vec<CountryRaw>) -> Result<CountryTable> {
    let countries = raw_countries
        .into_iter()
        .map(Country::try_from)
        .collect::<Result<Vec<_>>>()?;
    CountryTable::new(countries)
}
