// crates/countrypick-core/src/picker.rs

//! # Country Picker
//!
//! The list-view model behind a searchable, sectioned country picker. A host
//! widget asks it for section and row counts, headers and cell content, feeds
//! it search text, and forwards row taps to [`CountryPicker::select`].
//!
//! While a non-empty query is active every answer comes from the flat filtered
//! list; otherwise from the grouped [`SectionIndex`]. The two never mix.
//!
//! ```rust
//! use countrypick_core::prelude::*;
//! use std::rc::Rc;
//!
//! let table = CountryTable::builtin().unwrap();
//! let mut picker = CountryPicker::new(table.clone(), Some(HomeRegion::australia()));
//!
//! let (tx, rx) = crossbeam_channel::unbounded();
//! let delegate: Rc<dyn CountrySelectionDelegate> = Rc::new(tx);
//! picker.set_delegate(&delegate);
//!
//! picker.update_search("ral");
//! assert!(picker.is_filtering());
//! assert_eq!(picker.section_count(), 1);
//!
//! let chosen = picker.select(0, 0).unwrap();
//! assert_eq!(rx.try_recv().unwrap(), chosen);
//! assert!(picker.is_closed());
//! ```

use crate::home::HomeRegion;
use crate::index::SectionIndex;
use crate::model::{Country, CountryTable, Flag};
use crate::traits::{CountrySearch, CountrySelectionDelegate};
use serde::Serialize;
use std::rc::{Rc, Weak};

/// Content of one list row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CountryCell {
    pub title: String,
    /// Dial code with `+`, e.g. `"+61"`.
    pub phone: String,
    pub flag: Option<Flag>,
}

impl From<&Country> for CountryCell {
    fn from(country: &Country) -> Self {
        CountryCell {
            title: country.name().to_string(),
            phone: country.formatted_dial_code(),
            flag: country.flag().cloned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerState {
    Open,
    Closed,
}

pub struct CountryPicker {
    table: CountryTable,
    index: SectionIndex,
    query: String,
    search_active: bool,
    filtered: Option<Vec<Country>>,
    delegate: Option<Weak<dyn CountrySelectionDelegate>>,
    state: PickerState,
}

impl CountryPicker {
    /// Builds the grouped index for `table`. The search starts active, so
    /// typing filters immediately.
    pub fn new(table: CountryTable, home: Option<HomeRegion>) -> Self {
        let index = SectionIndex::build(table.iter(), home.as_ref());
        CountryPicker {
            table,
            index,
            query: String::new(),
            search_active: true,
            filtered: None,
            delegate: None,
            state: PickerState::Open,
        }
    }

    /// Picker over `table` with the default (Australian) home section.
    pub fn with_default_home(table: CountryTable) -> Self {
        Self::new(table, Some(HomeRegion::default()))
    }

    /// Registers the receiver of the selection. Only a weak reference is kept.
    pub fn set_delegate(&mut self, delegate: &Rc<dyn CountrySelectionDelegate>) {
        self.delegate = Some(Rc::downgrade(delegate));
    }

    pub fn table(&self) -> &CountryTable {
        &self.table
    }

    pub fn index(&self) -> &SectionIndex {
        &self.index
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == PickerState::Closed
    }

    // -----------------------------------------------------------------------
    // SEARCH
    // -----------------------------------------------------------------------

    /// Replaces the search text and recomputes the filtered list.
    pub fn update_search(&mut self, query: &str) {
        self.query = query.to_string();
        self.refilter();
    }

    /// Mirrors the search field being shown or hidden. An inactive search
    /// never filters, whatever its text.
    pub fn set_search_active(&mut self, active: bool) {
        self.search_active = active;
        self.refilter();
    }

    /// Dismisses the search: clears the text and restores the grouped view.
    pub fn cancel_search(&mut self) {
        self.query.clear();
        self.search_active = false;
        self.filtered = None;
    }

    fn refilter(&mut self) {
        self.filtered = if self.search_active {
            self.table
                .filter_by_name(&self.query)
                .map(|found| found.into_iter().cloned().collect())
        } else {
            None
        };
    }

    pub fn is_filtering(&self) -> bool {
        self.filtered.is_some()
    }

    /// The current filtered rows, if filtering.
    pub fn filtered(&self) -> Option<&[Country]> {
        self.filtered.as_deref()
    }

    // -----------------------------------------------------------------------
    // DATASOURCE
    // -----------------------------------------------------------------------

    /// Number of sections; a filtered list is a single pseudo-section.
    pub fn section_count(&self) -> usize {
        match self.filtered {
            Some(_) => 1,
            None => self.index.len(),
        }
    }

    pub fn row_count(&self, section: usize) -> usize {
        self.rows(section).len()
    }

    /// Header for `section`; `None` while filtering.
    pub fn section_title(&self, section: usize) -> Option<&str> {
        if self.is_filtering() {
            return None;
        }
        self.index.section(section).map(|s| s.title.as_str())
    }

    /// Labels for the index bar; `None` while filtering.
    pub fn section_index_titles(&self) -> Option<Vec<String>> {
        if self.is_filtering() {
            None
        } else {
            Some(self.index.index_titles())
        }
    }

    /// The rows backing `section` in the active view.
    pub fn rows(&self, section: usize) -> &[Country] {
        match &self.filtered {
            Some(list) if section == 0 => list,
            Some(_) => &[],
            None => self.index.countries_at(section),
        }
    }

    pub fn country_at(&self, section: usize, row: usize) -> Option<&Country> {
        self.rows(section).get(row)
    }

    pub fn cell(&self, section: usize, row: usize) -> Option<CountryCell> {
        self.country_at(section, row).map(CountryCell::from)
    }

    // -----------------------------------------------------------------------
    // SELECTION
    // -----------------------------------------------------------------------

    /// Resolves the tapped row, notifies the delegate and closes the picker.
    ///
    /// Returns `None` without side effects when the picker is already closed
    /// or the position does not exist.
    pub fn select(&mut self, section: usize, row: usize) -> Option<Country> {
        if self.is_closed() {
            tracing::debug!(section, row, "selection ignored: picker closed");
            return None;
        }
        let country = self.country_at(section, row)?.clone();

        match self.delegate.take().and_then(|weak| weak.upgrade()) {
            Some(delegate) => delegate.set_country(&country),
            None => tracing::warn!(country = country.name(), "no live selection delegate"),
        }
        tracing::info!(
            country = country.name(),
            iso = %country.iso_code(),
            dial = %country.phone_code(),
            filtering = self.is_filtering(),
            "country selected"
        );

        self.close();
        Some(country)
    }

    /// Closes without a selection.
    pub fn dismiss(&mut self) {
        self.delegate = None;
        self.close();
    }

    fn close(&mut self) {
        self.state = PickerState::Closed;
        self.cancel_search();
    }
}

impl std::fmt::Debug for CountryPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountryPicker")
            .field("countries", &self.table.len())
            .field("sections", &self.index.len())
            .field("query", &self.query)
            .field("filtering", &self.is_filtering())
            .field("state", &self.state)
            .finish()
    }
}
