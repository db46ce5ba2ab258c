// crates/countrypick-core/src/index.rs

//! # Section Index
//!
//! Groups a name-sorted country list into letter sections, with an optional
//! synthetic home section pinned first. Built once per picker; read-only
//! afterwards.

use crate::home::{HomeRegion, HOME_SECTION_KEY};
use crate::model::Country;
use crate::text::section_initial;
use serde::Serialize;
use std::collections::HashMap;

/// One contiguous group of rows.
#[derive(Clone, Debug, Serialize)]
pub struct Section {
    /// Lookup key: a single upper-case letter, `#`, or [`HOME_SECTION_KEY`].
    pub key: String,
    /// Header text.
    pub title: String,
    /// Label in the index bar.
    pub index_label: String,
    pub countries: Vec<Country>,
}

impl Section {
    pub fn is_home(&self) -> bool {
        self.key == HOME_SECTION_KEY
    }
}

/// The grouped view of a country list.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SectionIndex {
    sections: Vec<Section>,
    #[serde(skip)]
    by_key: HashMap<String, usize>,
}

impl SectionIndex {
    /// Buckets `sorted` by first letter.
    ///
    /// `sorted` must already be ordered by name; section order is first-seen
    /// order, so no key sort happens here. Home entries are pulled into the
    /// leading section and skipped in their alphabetical one.
    pub fn build<'a, I>(sorted: I, home: Option<&HomeRegion>) -> Self
    where
        I: IntoIterator<Item = &'a Country>,
    {
        let mut index = SectionIndex::default();

        if let Some(home) = home {
            index.push(Section {
                key: HOME_SECTION_KEY.to_string(),
                title: home.title.clone(),
                index_label: home.index_label.clone(),
                countries: home.entries.clone(),
            });
        }

        for country in sorted {
            if home.is_some_and(|h| h.contains(country)) {
                continue;
            }
            let initial = section_initial(country.name());
            match index.by_key.get(&initial).copied() {
                Some(pos) => index.sections[pos].countries.push(country.clone()),
                None => index.push(Section {
                    key: initial.clone(),
                    title: initial.clone(),
                    index_label: initial,
                    countries: vec![country.clone()],
                }),
            }
        }

        tracing::debug!(
            sections = index.sections.len(),
            rows = index.row_total(),
            home = home.is_some(),
            "built section index"
        );
        index
    }

    fn push(&mut self, section: Section) {
        self.by_key.insert(section.key.clone(), self.sections.len());
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section(&self, pos: usize) -> Option<&Section> {
        self.sections.get(pos)
    }

    /// Countries in section `pos`; empty for an unknown position.
    pub fn countries_at(&self, pos: usize) -> &[Country] {
        self.sections
            .get(pos)
            .map(|s| s.countries.as_slice())
            .unwrap_or(&[])
    }

    /// Countries under `key`; empty for an unknown key.
    pub fn countries_for_key(&self, key: &str) -> &[Country] {
        self.by_key
            .get(key)
            .map(|&pos| self.sections[pos].countries.as_slice())
            .unwrap_or(&[])
    }

    /// Position of the section stored under `key`.
    pub fn position_of(&self, key: &str) -> Option<usize> {
        self.by_key.get(key).copied()
    }

    /// Section keys in display order.
    pub fn keys(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.key.as_str()).collect()
    }

    /// Index-bar labels in display order.
    pub fn index_titles(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.index_label.clone()).collect()
    }

    /// Total number of rows over all sections.
    pub fn row_total(&self) -> usize {
        self.sections.iter().map(|s| s.countries.len()).sum()
    }
}
