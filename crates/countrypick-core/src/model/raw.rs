// crates/countrypick-core/src/model/raw.rs
use serde::{Deserialize, Serialize};

/// Raw country row as it comes from a JSON dataset.
///
/// Every field is taken verbatim; validation happens when converting into a
/// [`Country`](super::Country). Accepts the `phonecode` spelling used by
/// common public country datasets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryRaw {
    pub name: String,
    pub iso2: String,
    #[serde(alias = "phonecode")]
    pub phone_code: String,
    #[serde(default)]
    pub flag: Option<String>,
}

pub type CountriesRaw = Vec<CountryRaw>;
