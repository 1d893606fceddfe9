// crates/crgeo-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression, atomic rewrite) for the
//! record stores and seed batches, and assembles a [`Catalog`] from a data
//! directory.

use crate::error::Result;
use crate::model::Catalog;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod common_io;
pub mod seed;
pub mod store;

pub use seed::{SeedBatch, SeedRecords, Tier, TierRecord};
pub use store::{load_records, save_records, Store};

static CATALOG_CACHE: OnceCell<Catalog> = OnceCell::new();

pub const PROVINCES_FILE: &str = "provinces.json";
pub const CANTONS_FILE: &str = "cantons.json";
pub const DISTRICTS_FILE: &str = "districts.json";

impl Catalog {
    /// Directory of the dataset bundled with this crate.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("data")
            .join("costa-rica")
    }

    /// Store file of one tier inside a data directory.
    pub fn store_path(dir: impl AsRef<Path>, tier: Tier) -> PathBuf {
        let file = match tier {
            Tier::Provinces => PROVINCES_FILE,
            Tier::Cantons => CANTONS_FILE,
            Tier::Districts => DISTRICTS_FILE,
        };
        dir.as_ref().join(file)
    }

    /// The bundled catalog, read from disk once per process.
    pub fn load() -> Result<Self> {
        CATALOG_CACHE
            .get_or_try_init(|| Self::load_from_dir(Self::default_data_dir()))
            .cloned()
    }

    /// Reads the three stores of a data directory. All three must exist.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let catalog = Catalog {
            provinces: load_records(Self::store_path(dir, Tier::Provinces))?,
            cantons: load_records(Self::store_path(dir, Tier::Cantons))?,
            districts: load_records(Self::store_path(dir, Tier::Districts))?,
        };
        debug!(
            dir = %dir.display(),
            provinces = catalog.provinces.len(),
            cantons = catalog.cantons.len(),
            districts = catalog.districts.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Writes the three stores into `dir`, each one atomically.
    pub fn save_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        save_records(Self::store_path(dir, Tier::Provinces), &self.provinces)?;
        save_records(Self::store_path(dir, Tier::Cantons), &self.cantons)?;
        save_records(Self::store_path(dir, Tier::Districts), &self.districts)
    }
}
