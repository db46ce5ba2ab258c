// crates/countrypick-core/src/text.rs

/// Section key used for names that do not start with an ASCII letter.
pub const OTHER_SECTION_KEY: &str = "#";

/// Convert a string into a folded key suitable for sorting and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Åland` -> `Aland`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use countrypick_core::text::fold_key;
///
/// assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
/// assert_eq!(fold_key("Réunion"), "reunion");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// The section key a display name is bucketed under.
///
/// The first character of the folded name, upper-cased. Names whose folded
/// form does not start with an ASCII letter share [`OTHER_SECTION_KEY`].
///
/// ```rust
/// use countrypick_core::text::section_initial;
///
/// assert_eq!(section_initial("Belgium"), "B");
/// assert_eq!(section_initial("Åland Islands"), "A");
/// assert_eq!(section_initial("123"), "#");
/// ```
pub fn section_initial(name: &str) -> String {
    match fold_key(name.trim()).chars().next() {
        Some(c) if c.is_ascii_alphabetic() => c.to_ascii_uppercase().to_string(),
        _ => OTHER_SECTION_KEY.to_string(),
    }
}

/// Normalizes a raw search query.
///
/// Returns `None` for an empty or whitespace-only query, which callers treat
/// as "not filtering". A query made only of marks or invisible characters
/// can fold to a blank string; that is still `Some` and matches nothing
/// (see [`is_blank_folded`]).
pub fn normalize_query(query: &str) -> Option<String> {
    let q = query.trim();
    if q.is_empty() {
        None
    } else {
        Some(fold_key(q))
    }
}

/// True when a folded query has nothing left to match on.
pub fn is_blank_folded(folded: &str) -> bool {
    folded.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_and_case() {
        assert_eq!(fold_key("SÃO TOMÉ"), "sao tome");
        assert_eq!(fold_key("Curaçao"), "curacao");
    }

    #[test]
    fn initials_use_folded_first_letter() {
        assert_eq!(section_initial("zambia"), "Z");
        assert_eq!(section_initial("Réunion"), "R");
        assert_eq!(section_initial("  Chad"), "C");
        assert_eq!(section_initial(""), OTHER_SECTION_KEY);
    }

    #[test]
    fn blank_queries_normalize_to_none() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query(" \t "), None);
        assert_eq!(normalize_query(" RAL "), Some("ral".to_string()));
        assert_eq!(normalize_query("new z"), Some("new z".to_string()));
    }

    #[test]
    fn blank_folded_detects_empty_and_spaces() {
        assert!(is_blank_folded(""));
        assert!(is_blank_folded(" "));
        assert!(!is_blank_folded("a"));
    }
}
