//! countrypick-cli
//! ===============
//!
//! Command-line host for the `countrypick-core` country picker.
//!
//! This crate primarily provides a binary (`countrypick`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! countrypick sections
//! countrypick search ral
//! countrypick select --query aus 0 1
//! countrypick dial +672
//! ```
//!
//! For programmatic access use the [`countrypick-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
