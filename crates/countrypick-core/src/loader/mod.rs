// crates/countrypick-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! specific parsers (Binary snapshot vs JSON).

use crate::error::Result;
use crate::model::{convert, CountriesRaw, CountryTable};
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::Path;

pub mod common_io;
mod snapshot;

pub use snapshot::CompressionMode;

/// The bundled country table.
pub const BUILTIN_JSON: &str = include_str!("../../data/countries.json");

static BUILTIN_TABLE: OnceCell<CountryTable> = OnceCell::new();

impl CountryTable {
    /// The bundled table, parsed and validated once per process.
    pub fn builtin() -> Result<Self> {
        BUILTIN_TABLE
            .get_or_try_init(|| -> Result<Self> {
                let table = Self::from_json_str(BUILTIN_JSON)?;
                tracing::info!(countries = table.len(), "loaded built-in country table");
                Ok(table)
            })
            .cloned()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: CountriesRaw = serde_json::from_str(json)?;
        convert::from_raw(raw)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: CountriesRaw = serde_json::from_reader(reader)?;
        convert::from_raw(raw)
    }

    /// Loads a table from disk.
    ///
    /// `*.bin` / `*.bin.gz` are read as snapshots, anything else as a JSON
    /// array of rows (`*.gz` transparently decompressed).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = common_io::open_stream(path)?;

        let table = if is_snapshot(path) {
            let mut data = Vec::new();
            reader.read_to_end(&mut data)?;
            Self::from_bytes(&data)?
        } else {
            Self::from_json_reader(reader)?
        };

        tracing::info!(path = %path.display(), countries = table.len(), "loaded country table");
        Ok(table)
    }
}

fn is_snapshot(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    name.ends_with(".bin") || name.ends_with(".bin.gz")
}
