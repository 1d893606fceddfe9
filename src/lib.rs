//! crgeo-rs
//!
//! Workspace crate: re-exports `crgeo-core` so the demos can
//! `use crgeo_rs::prelude::*`.

pub use crgeo_core::*;
