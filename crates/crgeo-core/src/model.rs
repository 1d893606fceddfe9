// crates/crgeo-core/src/model.rs

//! # Data Model
//!
//! Three tiers of records (`Province` → `Canton` → `District`) and the
//! in-memory [`Catalog`] that holds one store of each.

pub mod catalog;
pub mod records;

pub use catalog::Catalog;
pub use records::{Canton, District, Location, Province};
