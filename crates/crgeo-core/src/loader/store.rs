// crates/crgeo-core/src/loader/store.rs

//! # File-backed Store
//!
//! A store is one JSON array of records in one file. Its whole lifetime is
//! load-all → merge → save-all; records are only ever appended.

use super::common_io;
use super::seed::{SeedBatch, TierRecord};
use crate::error::{GeoError, Result};
use crate::merge::{merge_batches, MergeReport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Reads a whole store. A missing file or malformed JSON is an error.
pub fn load_records<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let reader = common_io::open_stream(path)?;
    serde_json::from_reader(reader).map_err(GeoError::Json)
}

/// Serializes records the way the stores are kept on disk: UTF-8, two-space
/// indentation, non-ASCII written literally, trailing newline.
pub fn to_store_bytes<T: Serialize>(records: &[T]) -> Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(records)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Replaces the store at `path` with `records` (atomically, see
/// [`common_io::write_atomic`]).
pub fn save_records<T: Serialize>(path: impl AsRef<Path>, records: &[T]) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_store_bytes(records)?;
    common_io::write_atomic(path, &bytes)?;
    info!(path = %path.display(), records = records.len(), "store written");
    Ok(())
}

/// An in-memory copy of one store file.
#[derive(Debug, Clone)]
pub struct Store<T> {
    path: PathBuf,
    records: Vec<T>,
}

impl<T: TierRecord> Store<T> {
    /// Loads the store at `path`. Fails if it is missing or malformed, before
    /// anything can be merged or written.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let records: Vec<T> = load_records(&path)?;
        let tier = T::TIER;
        info!(path = %path.display(), %tier, records = records.len(), "store loaded");
        Ok(Store { path, records })
    }

    /// Like [`Store::open`], but a missing file starts an empty store.
    /// A file that exists and does not parse is still an error.
    pub fn open_or_create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            let tier = T::TIER;
            info!(path = %path.display(), %tier, "starting an empty store");
            Ok(Store {
                path: path.to_path_buf(),
                records: Vec::new(),
            })
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    /// Merges candidate records into memory. Nothing is written.
    pub fn apply<I>(&mut self, candidates: I) -> MergeReport
    where
        I: IntoIterator<Item = T>,
    {
        self.apply_batches(std::iter::once(candidates))
    }

    /// Merges several candidate sets in order, sharing one key set.
    pub fn apply_batches<B, I>(&mut self, batches: B) -> MergeReport
    where
        B: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let existing = std::mem::take(&mut self.records);
        let merged = merge_batches(existing, batches);
        self.records = merged.records;
        merged.report
    }

    /// Merges one seed batch. A batch of another tier is rejected untouched.
    pub fn apply_seed(&mut self, seed: SeedBatch) -> Result<MergeReport> {
        let name = seed.name.clone();
        let candidates: Vec<T> = seed.into_records()?;
        let offered = candidates.len();
        let report = self.apply(candidates);
        info!(
            seed = %name,
            offered,
            added = report.added,
            skipped = report.skipped,
            "seed applied"
        );
        Ok(report)
    }

    /// Writes every record back to the store file.
    pub fn save(&self) -> Result<()> {
        save_records(&self.path, &self.records)
    }
}
