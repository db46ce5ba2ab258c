// crates/countrypick-core/src/model/country.rs
use super::raw::CountryRaw;
use crate::error::{PickerError, Result};
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ISO country code, e.g. `"AU"`.
///
/// Two or three ASCII alphanumerics, stored upper-case. The third character
/// allows non-standard deployment codes alongside ISO 3166-1 alpha-2.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IsoCode(String);

impl IsoCode {
    pub fn parse(code: &str) -> Result<Self> {
        let code = code.trim();
        if !(2..=3).contains(&code.len()) || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(PickerError::invalid(
                code,
                "ISO code must be 2-3 ASCII alphanumeric characters",
            ));
        }
        Ok(IsoCode(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw code.
    pub fn matches(&self, code: &str) -> bool {
        self.0.eq_ignore_ascii_case(code.trim())
    }
}

impl TryFrom<String> for IsoCode {
    type Error = PickerError;

    fn try_from(value: String) -> Result<Self> {
        IsoCode::parse(&value)
    }
}

impl From<IsoCode> for String {
    fn from(value: IsoCode) -> Self {
        value.0
    }
}

impl fmt::Display for IsoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// International dialing code, digits only (e.g. `"61"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DialCode(String);

impl DialCode {
    pub const MAX_DIGITS: usize = 6;

    /// Parses a dial code, accepting a single optional leading `+`.
    pub fn parse(code: &str) -> Result<Self> {
        let trimmed = code.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if digits.is_empty()
            || digits.len() > Self::MAX_DIGITS
            || !digits.chars().all(|c| c.is_ascii_digit())
        {
            return Err(PickerError::invalid(
                code,
                format!("dial code must be 1-{} ASCII digits", Self::MAX_DIGITS),
            ));
        }
        Ok(DialCode(digits.to_string()))
    }

    /// The bare digits, without a `+`.
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// The dial code as shown in a cell, e.g. `"+61"`.
    pub fn formatted(&self) -> String {
        format!("+{}", self.0)
    }
}

impl TryFrom<String> for DialCode {
    type Error = PickerError;

    fn try_from(value: String) -> Result<Self> {
        DialCode::parse(&value)
    }
}

impl From<DialCode> for String {
    fn from(value: DialCode) -> Self {
        value.0
    }
}

impl fmt::Display for DialCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.0)
    }
}

/// Reference to a flag image asset, keyed by a 2-letter region code.
///
/// Hosts with an image catalogue look the asset up by [`Flag::code`]; text
/// hosts can fall back to [`Flag::emoji`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Flag(String);

impl Flag {
    pub fn parse(code: &str) -> Result<Self> {
        let code = code.trim();
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(PickerError::invalid(
                code,
                "flag code must be 2 ASCII letters",
            ));
        }
        Ok(Flag(code.to_ascii_uppercase()))
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    /// The flag as a pair of regional indicator symbols.
    pub fn emoji(&self) -> String {
        self.0
            .chars()
            .filter_map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
            .collect()
    }
}

impl TryFrom<String> for Flag {
    type Error = PickerError;

    fn try_from(value: String) -> Result<Self> {
        Flag::parse(&value)
    }
}

impl From<Flag> for String {
    fn from(value: Flag) -> Self {
        value.0
    }
}

/// A selectable country entry.
///
/// All fields but the flag are required; instances only come out of
/// [`Country::new`] or the validating raw conversion, so a `Country` with a
/// blank name or malformed code cannot exist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CountryRaw")]
pub struct Country {
    name: String,
    #[serde(rename = "iso2")]
    iso_code: IsoCode,
    phone_code: DialCode,
    flag: Option<Flag>,
}

impl Country {
    pub fn new(
        name: &str,
        iso_code: &str,
        phone_code: &str,
        flag: Option<&str>,
    ) -> Result<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(PickerError::invalid(name, "name must not be empty"));
        }
        let iso_code = IsoCode::parse(iso_code).map_err(|e| e.for_country(trimmed))?;
        let phone_code = DialCode::parse(phone_code).map_err(|e| e.for_country(trimmed))?;
        let flag = flag
            .map(Flag::parse)
            .transpose()
            .map_err(|e| e.for_country(trimmed))?;

        Ok(Country {
            name: trimmed.to_string(),
            iso_code,
            phone_code,
            flag,
        })
    }

    /// Constructs a record from literals known to pass validation.
    pub(crate) fn builtin(name: &str, iso_code: &str, phone_code: &str, flag: &str) -> Self {
        Country {
            name: name.to_string(),
            iso_code: IsoCode(iso_code.to_string()),
            phone_code: DialCode(phone_code.to_string()),
            flag: Some(Flag(flag.to_string())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn iso_code(&self) -> &IsoCode {
        &self.iso_code
    }

    pub fn phone_code(&self) -> &DialCode {
        &self.phone_code
    }

    pub fn flag(&self) -> Option<&Flag> {
        self.flag.as_ref()
    }

    /// Dial code with its `+` prefix, as rendered in a list cell.
    pub fn formatted_dial_code(&self) -> String {
        self.phone_code.formatted()
    }
}

impl NameMatch for Country {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.name, self.iso_code, self.phone_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_valid_country() {
        let c = Country::new(" Australia ", "au", "+61", Some("AU")).unwrap();
        assert_eq!(c.name(), "Australia");
        assert_eq!(c.iso_code().as_str(), "AU");
        assert_eq!(c.phone_code().digits(), "61");
        assert_eq!(c.formatted_dial_code(), "+61");
        assert_eq!(c.flag().map(Flag::code), Some("AU"));
    }

    #[test]
    fn rejects_missing_or_malformed_fields() {
        assert!(Country::new("  ", "AU", "61", None).is_err());
        assert!(Country::new("Australia", "A", "61", None).is_err());
        assert!(Country::new("Australia", "AU-X", "61", None).is_err());
        assert!(Country::new("Australia", "AU", "", None).is_err());
        assert!(Country::new("Australia", "AU", "6l", None).is_err());
        assert!(Country::new("Australia", "AU", "1234567", None).is_err());
        assert!(Country::new("Australia", "AU", "61", Some("AUS")).is_err());
    }

    #[test]
    fn error_names_the_offending_country() {
        let err = Country::new("Atlantis", "AT", "xx", None).unwrap_err();
        assert!(matches!(err, PickerError::InvalidCountry { ref name, .. } if name == "Atlantis"));
    }

    #[test]
    fn flag_renders_regional_indicators() {
        let flag = Flag::parse("au").unwrap();
        assert_eq!(flag.emoji(), "\u{1F1E6}\u{1F1FA}");
    }

    #[test]
    fn iso_code_matches_case_insensitively() {
        let code = IsoCode::parse("nf").unwrap();
        assert!(code.matches("NF"));
        assert!(code.matches(" nf "));
        assert!(!code.matches("AU"));
    }

    #[test]
    fn serde_rejects_invalid_codes() {
        let bad: std::result::Result<DialCode, _> = serde_json::from_str("\"abc\"");
        assert!(bad.is_err());
        let good: DialCode = serde_json::from_str("\"+672\"").unwrap();
        assert_eq!(good.digits(), "672");
    }
}
