// crates/countrypick-core/src/search.rs

use crate::model::{Country, CountryTable};
use crate::text::{is_blank_folded, normalize_query};
use crate::traits::{CountrySearch, NameMatch};

impl CountrySearch for CountryTable {
    fn find_by_iso_code(&self, code: &str) -> Option<&Country> {
        // Linear scan is fine for a few hundred countries
        self.iter().find(|c| c.iso_code().matches(code))
    }

    fn find_by_dial_code(&self, prefix: &str) -> Vec<&Country> {
        let prefix = prefix.trim();
        let prefix = prefix.strip_prefix('+').unwrap_or(prefix);
        if prefix.is_empty() {
            return Vec::new();
        }
        self.iter()
            .filter(|c| c.phone_code().digits().starts_with(prefix))
            .collect()
    }

    fn filter_by_name(&self, query: &str) -> Option<Vec<&Country>> {
        let q = normalize_query(query)?;
        if is_blank_folded(&q) {
            tracing::debug!(query, "query folds to nothing; no matches");
            return Some(Vec::new());
        }
        let out: Vec<&Country> = self
            .iter()
            .filter(|c| c.name_contains_folded(&q))
            .collect();
        tracing::debug!(query = %q, matches = out.len(), "filtered countries");
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CountryTable {
        CountryTable::new(vec![
            Country::new("Belgium", "BE", "32", Some("BE")).unwrap(),
            Country::new("Austria", "AT", "43", Some("AT")).unwrap(),
            Country::new("Australia", "AU", "61", Some("AU")).unwrap(),
            Country::new("Côte d'Ivoire", "CI", "225", Some("CI")).unwrap(),
            Country::new("Norfolk Island", "NF", "672", Some("NF")).unwrap(),
        ])
        .unwrap()
    }

    fn names(found: &[&Country]) -> Vec<String> {
        found.iter().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let t = table();
        assert_eq!(names(&t.filter_by_name("ral").unwrap()), ["Australia"]);
        assert_eq!(names(&t.filter_by_name("AUS").unwrap()), ["Australia", "Austria"]);
    }

    #[test]
    fn filter_ignores_accents() {
        let t = table();
        assert_eq!(names(&t.filter_by_name("cote").unwrap()), ["Côte d'Ivoire"]);
    }

    #[test]
    fn blank_query_is_not_filtering() {
        let t = table();
        assert!(t.filter_by_name("").is_none());
        assert!(t.filter_by_name("   ").is_none());
        assert_eq!(t.filter_by_name("zzz"), Some(Vec::new()));
    }

    #[test]
    fn invisible_queries_match_nothing() {
        let t = table();
        for q in ["\u{301}", "\u{fe0f}", "\u{200b}", " \u{200b} "] {
            assert_eq!(t.filter_by_name(q), Some(Vec::new()), "query {q:?}");
        }
    }

    #[test]
    fn builtin_table_has_no_match_for_combining_accent() {
        let t = CountryTable::builtin().unwrap();
        assert_eq!(t.filter_by_name("\u{301}"), Some(Vec::new()));
        assert_eq!(t.filter_by_name("\u{200b}"), Some(Vec::new()));
    }

    #[test]
    fn lookups_by_code() {
        let t = table();
        assert_eq!(t.find_by_iso_code("nf").map(Country::name), Some("Norfolk Island"));
        assert!(t.find_by_iso_code("XX").is_none());
        assert_eq!(names(&t.find_by_dial_code("+6")), ["Australia", "Norfolk Island"]);
        assert!(t.find_by_dial_code("+").is_empty());
    }
}
