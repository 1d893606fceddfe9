// crates/crgeo-core/src/lib.rs

//! # crgeo-core
//!
//! Reference data for Costa Rica's administrative divisions
//! (provinces → cantons → districts) and the tooling that maintains it.
//!
//! - [`merge`]: the idempotent keyed merge. Candidates whose key is already
//!   present are skipped; survivors are appended in input order.
//! - [`loader`]: JSON stores (optionally gzip-compressed) rewritten atomically,
//!   declarative seed batches, and catalog loading.
//! - [`CatalogSearch`]: lookups over the three tiers.
//!
//! ```no_run
//! use crgeo_core::prelude::*;
//!
//! let mut store = Store::<District>::open("data/costa-rica/districts.json")?;
//! let seed = SeedBatch::load_from_path("data/seeds/alajuela.json")?;
//! let report = store.apply_seed(seed)?;
//! store.save()?;
//! println!("added {}, skipped {}", report.added, report.skipped);
//! # Ok::<(), crgeo_core::GeoError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
#[cfg(feature = "json")]
pub mod loader;
pub mod merge;
pub mod model;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::{CatalogStats, LocationNames, Orphans, ProvinceSummary, PROVINCES};
pub use crate::error::{GeoError, Result};
pub use crate::merge::{merge, merge_batches, MergeReport, Merged};
pub use crate::model::{Canton, Catalog, District, Location, Province};
pub use crate::traits::{CatalogSearch, Keyed, NameMatch};

#[cfg(feature = "json")]
pub use crate::loader::{SeedBatch, SeedRecords, Store, Tier, TierRecord};

pub mod prelude {
    pub use crate::common::{CatalogStats, LocationNames, ProvinceSummary};
    pub use crate::error::{GeoError, Result};
    #[cfg(feature = "json")]
    pub use crate::loader::{SeedBatch, Store, Tier};
    pub use crate::merge::{merge, merge_batches, MergeReport};
    pub use crate::model::{Canton, Catalog, District, Location, Province};
    pub use crate::traits::{CatalogSearch, Keyed, NameMatch};
}
