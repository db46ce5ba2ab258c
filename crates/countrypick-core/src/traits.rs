// crates/countrypick-core/src/traits.rs
use crate::model::Country;
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a display name.
///
/// Comparisons run on the [`fold_key`] form, so they ignore accents and case.
/// Implementors only provide a `&str` view of their display name.
///
/// # Examples
/// ```rust
/// use countrypick_core::text::fold_key;
/// use countrypick_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Réunion").name_contains_folded(&fold_key("UNI")));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    /// Substring match against an already folded query.
    #[inline]
    fn name_contains_folded(&self, folded: &str) -> bool {
        fold_key(self.name_str()).contains(folded)
    }
}

/// Lookup operations over a country collection.
pub trait CountrySearch {
    /// Find a country by ISO code, case-insensitive (e.g. "AU", "nf").
    fn find_by_iso_code(&self, code: &str) -> Option<&Country>;

    /// Countries whose dial code starts with `prefix` (e.g. "+6", "61").
    fn find_by_dial_code(&self, prefix: &str) -> Vec<&Country>;

    /// Countries whose name contains `query`, in table order.
    ///
    /// Returns `None` for an empty or whitespace-only query, meaning "not
    /// filtering", as opposed to `Some(vec![])` for a query with no matches.
    fn filter_by_name(&self, query: &str) -> Option<Vec<&Country>>;
}

/// Receiver of the picker's result.
///
/// Implemented by whatever presented the picker. The picker only holds a weak
/// reference, so a receiver that has gone away is simply not notified.
pub trait CountrySelectionDelegate {
    fn set_country(&self, country: &Country);
}

impl CountrySelectionDelegate for crossbeam_channel::Sender<Country> {
    fn set_country(&self, country: &Country) {
        if self.send(country.clone()).is_err() {
            tracing::warn!(country = country.name(), "selection receiver disconnected");
        }
    }
}
