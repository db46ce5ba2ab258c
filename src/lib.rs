//! countrypick-rs: umbrella crate re-exporting [`countrypick_core`] for the
//! workspace demos.
pub use countrypick_core::*;
