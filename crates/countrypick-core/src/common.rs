// crates/countrypick-core/src/common.rs
use crate::picker::CountryPicker;
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a picker.
///
/// `rows` counts grouped rows, home entries included, so it can exceed
/// `countries` by the number of home entries missing from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerStats {
    pub countries: usize,
    pub sections: usize,
    pub rows: usize,
}

impl CountryPicker {
    pub fn stats(&self) -> PickerStats {
        PickerStats {
            countries: self.table().len(),
            sections: self.index().len(),
            rows: self.index().row_total(),
        }
    }
}
