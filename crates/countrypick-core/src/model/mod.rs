// crates/countrypick-core/src/model/mod.rs
pub mod convert;
pub mod country;
pub mod raw;
pub mod table;

pub use country::{Country, DialCode, Flag, IsoCode};
pub use raw::{CountriesRaw, CountryRaw};
pub use table::CountryTable;

/// File suffix used for binary snapshots written by the loader.
#[cfg(not(feature = "compact"))]
pub const SNAPSHOT_SUFFIX: &str = ".bin";
#[cfg(feature = "compact")]
pub const SNAPSHOT_SUFFIX: &str = ".bin.gz";
