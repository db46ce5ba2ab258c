//! countrypick prelude: bring common types and traits into scope for demos.

pub use crate::common::PickerStats;
pub use crate::error::{PickerError, Result};
pub use crate::home::{HomeRegion, HOME_SECTION_KEY};
pub use crate::index::{Section, SectionIndex};
pub use crate::loader::CompressionMode;
pub use crate::model::{Country, CountryTable, DialCode, Flag, IsoCode};
pub use crate::picker::{CountryCell, CountryPicker, PickerState};
pub use crate::traits::{CountrySearch, CountrySelectionDelegate, NameMatch};
