// crates/countrypick-core/src/lib.rs

//! countrypick-core
//! ================
//!
//! The view model of a searchable, alphabetically sectioned country picker
//! used to choose a phone dialing code.
//!
//! - [`CountryTable`]: the validated, name-sorted country list (bundled or
//!   loaded from JSON / snapshot files).
//! - [`SectionIndex`]: countries bucketed by first letter, with the
//!   deployment's [`HomeRegion`] pinned first.
//! - [`CountryPicker`]: section/row datasource for a list widget, search
//!   filtering and the one-shot selection callback.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod home;
pub mod index;
pub mod loader;
pub mod model;
pub mod picker;
pub mod prelude;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::PickerStats;
pub use crate::error::{PickerError, Result};
pub use crate::home::HomeRegion;
pub use crate::index::{Section, SectionIndex};
pub use crate::model::{Country, CountryTable, DialCode, Flag, IsoCode};
pub use crate::picker::{CountryCell, CountryPicker, PickerState};
pub use crate::traits::{CountrySearch, CountrySelectionDelegate, NameMatch};
