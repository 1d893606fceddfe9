//! crgeo-cli
//! ==========
//!
//! Command-line interface for the `crgeo-core` Costa Rica administrative
//! divisions dataset.
//!
//! This crate primarily provides a binary (`crgeo`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! crgeo --help
//! crgeo merge --store districts.json seeds/alajuela-additional.json
//! crgeo summary --store districts.json
//! crgeo lookup 2 202 20208
//! ```
//!
//! For programmatic access to the merge, the stores and the catalog, use the
//! [`crgeo-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
