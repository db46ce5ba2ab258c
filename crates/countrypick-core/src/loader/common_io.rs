// crates/countrypick-core/src/loader/common_io.rs
use crate::error::{PickerError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Whether `path` names a gzip file (`*.gz`).
pub fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it and unwraps gzip when the name ends in `.gz`.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        PickerError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(PickerError::NotFound(format!(
                "{} is gzip-compressed; enable the `compact` feature",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

/// Default snapshot location next to a source table. The source extension
/// (and a trailing `.gz`) is replaced: `countries.json` and
/// `countries.json.gz` both map to `countries.bin(.gz)`.
pub fn snapshot_path_for(source: &Path, suffix: &str) -> PathBuf {
    if source.file_name().is_none() {
        return source.join(format!("countries{suffix}"));
    }
    let base = if is_gzip(source) {
        source.with_extension("")
    } else {
        source.to_path_buf()
    };
    base.with_extension(suffix.trim_start_matches('.'))
}
