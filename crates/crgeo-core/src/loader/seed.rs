// crates/crgeo-core/src/loader/seed.rs

//! # Seed Batches
//!
//! A seed batch is one declarative candidate set for one tier:
//!
//! ```json
//! { "name": "alajuela-additional", "tier": "districts", "records": [ ... ] }
//! ```
//!
//! `tier` defaults to `districts`. A bare JSON array is also accepted and read
//! as a district batch named after the file stem.

use super::common_io;
use crate::error::{GeoError, Result};
use crate::model::{Canton, District, Province};
use crate::traits::Keyed;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Administrative tier a store or seed holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Provinces,
    Cantons,
    #[default]
    Districts,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tier::Provinces => "provinces",
            Tier::Cantons => "cantons",
            Tier::Districts => "districts",
        })
    }
}

impl FromStr for Tier {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "provinces" | "province" => Ok(Tier::Provinces),
            "cantons" | "canton" => Ok(Tier::Cantons),
            "districts" | "district" => Ok(Tier::Districts),
            other => Err(GeoError::InvalidData(format!("unknown tier: {other}"))),
        }
    }
}

/// The typed records of a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedRecords {
    Provinces(Vec<Province>),
    Cantons(Vec<Canton>),
    Districts(Vec<District>),
}

impl SeedRecords {
    pub fn tier(&self) -> Tier {
        match self {
            SeedRecords::Provinces(_) => Tier::Provinces,
            SeedRecords::Cantons(_) => Tier::Cantons,
            SeedRecords::Districts(_) => Tier::Districts,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SeedRecords::Provinces(v) => v.len(),
            SeedRecords::Cantons(v) => v.len(),
            SeedRecords::Districts(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A record type that can live in a store and be seeded.
pub trait TierRecord: Keyed + Clone + Serialize + DeserializeOwned {
    const TIER: Tier;

    /// Takes the records out of a batch of the same tier; hands the batch
    /// back otherwise.
    fn from_seed(records: SeedRecords) -> std::result::Result<Vec<Self>, SeedRecords>;
}

impl TierRecord for Province {
    const TIER: Tier = Tier::Provinces;
    fn from_seed(records: SeedRecords) -> std::result::Result<Vec<Self>, SeedRecords> {
        match records {
            SeedRecords::Provinces(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl TierRecord for Canton {
    const TIER: Tier = Tier::Cantons;
    fn from_seed(records: SeedRecords) -> std::result::Result<Vec<Self>, SeedRecords> {
        match records {
            SeedRecords::Cantons(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl TierRecord for District {
    const TIER: Tier = Tier::Districts;
    fn from_seed(records: SeedRecords) -> std::result::Result<Vec<Self>, SeedRecords> {
        match records {
            SeedRecords::Districts(v) => Ok(v),
            other => Err(other),
        }
    }
}

#[derive(Deserialize)]
struct SeedFile {
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tier: Tier,
    records: serde_json::Value,
}

/// One named candidate set.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedBatch {
    pub name: String,
    pub description: Option<String>,
    pub records: SeedRecords,
}

impl SeedBatch {
    pub fn districts(name: impl Into<String>, records: Vec<District>) -> Self {
        SeedBatch {
            name: name.into(),
            description: None,
            records: SeedRecords::Districts(records),
        }
    }

    pub fn tier(&self) -> Tier {
        self.records.tier()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Reads a seed file (`.json` or `.json.gz`).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let value: serde_json::Value = serde_json::from_reader(reader)?;
        Self::from_value(value, &stem_of(path))
    }

    /// Parses an already-decoded seed document. `fallback_name` names bare
    /// arrays and documents without a `name`.
    pub fn from_value(value: serde_json::Value, fallback_name: &str) -> Result<Self> {
        match value {
            serde_json::Value::Array(_) => Ok(SeedBatch {
                name: fallback_name.to_string(),
                description: None,
                records: SeedRecords::Districts(serde_json::from_value(value)?),
            }),
            serde_json::Value::Object(_) => {
                let file: SeedFile = serde_json::from_value(value)?;
                let raw = file.records;
                let records = match file.tier {
                    Tier::Provinces => SeedRecords::Provinces(serde_json::from_value(raw)?),
                    Tier::Cantons => SeedRecords::Cantons(serde_json::from_value(raw)?),
                    Tier::Districts => SeedRecords::Districts(serde_json::from_value(raw)?),
                };
                Ok(SeedBatch {
                    name: file.name.unwrap_or_else(|| fallback_name.to_string()),
                    description: file.description,
                    records,
                })
            }
            _ => Err(GeoError::InvalidData(format!(
                "seed '{fallback_name}' must be a JSON object or array"
            ))),
        }
    }

    /// Typed records for a store of tier `T`, or an error naming both tiers.
    pub fn into_records<T: TierRecord>(self) -> Result<Vec<T>> {
        let name = self.name;
        T::from_seed(self.records).map_err(|records| {
            GeoError::InvalidData(format!(
                "seed '{name}' carries {}, store holds {}",
                records.tier(),
                T::TIER
            ))
        })
    }
}

/// File stem with every extension stripped (`a.json.gz` -> `a`).
fn stem_of(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.split_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_array_is_a_district_batch() {
        let v = json!([
            {"codigo": 41001, "nombre": "Puerto Viejo", "cantonCodigo": 410, "area": 428.52}
        ]);
        let batch = SeedBatch::from_value(v, "sarapiqui").unwrap();
        assert_eq!(batch.name, "sarapiqui");
        assert_eq!(batch.tier(), Tier::Districts);
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn object_with_tier() {
        let v = json!({
            "name": "limon-cantons",
            "tier": "cantons",
            "records": [{"code": 701, "name": "Limón", "province_code": 7}]
        });
        let batch = SeedBatch::from_value(v, "ignored").unwrap();
        assert_eq!(batch.name, "limon-cantons");
        assert_eq!(
            batch.records,
            SeedRecords::Cantons(vec![Canton::new(701, "Limón", 7)])
        );
    }

    #[test]
    fn tier_mismatch_is_reported() {
        let batch = SeedBatch::districts("d", vec![District::new(10101, "Carmen", 101, 1.49)]);
        let err = batch.into_records::<Canton>().unwrap_err();
        assert!(err.to_string().contains("carries districts, store holds cantons"));
    }

    #[test]
    fn scalar_document_is_rejected() {
        assert!(matches!(
            SeedBatch::from_value(json!(42), "x"),
            Err(GeoError::InvalidData(_))
        ));
    }

    #[test]
    fn tier_parses_loosely() {
        assert_eq!("Canton".parse::<Tier>().unwrap(), Tier::Cantons);
        assert!("barrios".parse::<Tier>().is_err());
    }

    #[test]
    fn stem_strips_all_extensions() {
        assert_eq!(stem_of(Path::new("seeds/alajuela.json.gz")), "alajuela");
        assert_eq!(stem_of(Path::new(".hidden")), ".hidden");
    }
}
