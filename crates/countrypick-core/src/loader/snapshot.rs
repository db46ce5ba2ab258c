// crates/countrypick-core/src/loader/snapshot.rs
use crate::error::Result;
use crate::model::CountryTable;
use bincode::Options;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

/// Upper bound for a decoded snapshot. A real table is a few kilobytes.
const SNAPSHOT_LIMIT: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// Gzip when the `compact` feature is on.
    pub fn preferred() -> Self {
        #[cfg(feature = "compact")]
        {
            CompressionMode::Gzip
        }
        #[cfg(not(feature = "compact"))]
        {
            CompressionMode::None
        }
    }
}

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

impl CountryTable {
    /// Reconstructs a table from a bincode snapshot.
    ///
    /// Rows are re-validated on the way in, so a tampered snapshot fails the
    /// same way a bad JSON table does.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(options().deserialize(data)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(options().serialize(self)?)
    }

    /// Writes a snapshot to `path`, creating parent directories.
    pub fn write_snapshot(&self, path: &Path, compression: CompressionMode) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let bytes = self.to_bytes()?;
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        match compression {
            #[cfg(feature = "compact")]
            CompressionMode::Gzip => {
                let mut encoder = GzEncoder::new(writer, Compression::best());
                encoder.write_all(&bytes)?;
                encoder.finish()?.flush()?;
            }
            #[cfg(not(feature = "compact"))]
            CompressionMode::Gzip => {
                tracing::warn!("gzip requested without the `compact` feature; writing plain");
                writer.write_all(&bytes)?;
                writer.flush()?;
            }
            CompressionMode::None => {
                writer.write_all(&bytes)?;
                writer.flush()?;
            }
        }

        tracing::info!(
            path = %path.display(),
            countries = self.len(),
            ?compression,
            "wrote snapshot"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Country;

    fn table() -> CountryTable {
        CountryTable::new(vec![
            Country::new("Belgium", "BE", "32", Some("BE")).unwrap(),
            Country::new("Norfolk Island", "NF", "672", None).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn snapshot_bytes_restore_the_table() {
        let original = table();
        let restored = CountryTable::from_bytes(&original.to_bytes().unwrap()).unwrap();
        assert_eq!(restored.countries(), original.countries());
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        assert!(CountryTable::from_bytes(&[0xff, 0x01, 0x02]).is_err());
    }
}
