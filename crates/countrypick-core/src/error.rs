// crates/countrypick-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading or validating a country table.
///
/// Picker operations themselves never fail; only the data-load path does.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("Dataset not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Invalid country {name:?}: {reason}")]
    InvalidCountry { name: String, reason: String },

    #[error("Duplicate ISO code in dataset: {0}")]
    DuplicateIsoCode(String),

    #[error("Dataset contains no countries")]
    EmptyDataset,
}

impl PickerError {
    pub(crate) fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        PickerError::InvalidCountry {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Re-attributes a field validation error to the country it came from.
    pub(crate) fn for_country(self, name: &str) -> Self {
        match self {
            PickerError::InvalidCountry { reason, .. } => PickerError::invalid(name, reason),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, PickerError>;
