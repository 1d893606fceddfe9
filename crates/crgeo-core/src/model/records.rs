// crates/crgeo-core/src/model/records.rs
use crate::traits::{Keyed, NameMatch};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A province (top tier). Codes run 1 (San José) to 7 (Limón).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Province {
    #[serde(alias = "codigo")]
    pub code: u32,
    #[serde(alias = "nombre")]
    pub name: String,
}

/// A canton. `code` is conventionally `PCC`: province digit followed by the
/// two-digit canton sequence (e.g. `202` = San Ramón, Alajuela).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Canton {
    #[serde(alias = "codigo")]
    pub code: u32,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "provinciaCodigo")]
    pub province_code: u32,
}

/// A district, the record the seed batches mostly carry.
///
/// `code` is conventionally `PCCDD`. Nothing checks that convention, nor that
/// `parent_canton_code` points at an existing canton, nor that `area` (km²)
/// is positive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct District {
    #[serde(alias = "codigo")]
    pub code: u32,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "cantonCodigo")]
    pub parent_canton_code: u32,
    pub area: f64,
}

impl District {
    pub fn new(code: u32, name: impl Into<String>, parent_canton_code: u32, area: f64) -> Self {
        District {
            code,
            name: name.into(),
            parent_canton_code,
            area,
        }
    }

    /// Province digit derived from the parent canton code (`202` -> `2`).
    #[inline]
    pub fn province_code(&self) -> u32 {
        self.parent_canton_code / 100
    }
}

impl Canton {
    pub fn new(code: u32, name: impl Into<String>, province_code: u32) -> Self {
        Canton {
            code,
            name: name.into(),
            province_code,
        }
    }
}

impl Province {
    pub fn new(code: u32, name: impl Into<String>) -> Self {
        Province {
            code,
            name: name.into(),
        }
    }
}

// -----------------------------------------------------------------------------
// Keys & names
// -----------------------------------------------------------------------------

impl Keyed for Province {
    type Key = u32;
    fn key(&self) -> u32 {
        self.code
    }
}

impl Keyed for Canton {
    type Key = u32;
    fn key(&self) -> u32 {
        self.code
    }
}

impl Keyed for District {
    type Key = u32;
    fn key(&self) -> u32 {
        self.code
    }
}

impl NameMatch for Province {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Canton {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for District {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// A consistent province/canton/district triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location<'a> {
    pub province: &'a Province,
    pub canton: &'a Canton,
    pub district: &'a District,
}

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.district.name, self.canton.name, self.province.name
        )
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;

    #[test]
    fn reads_legacy_field_names() {
        let raw = r#"{"codigo": 20208, "nombre": "Ángeles", "cantonCodigo": 202, "area": 84.91}"#;
        let d: District = serde_json::from_str(raw).unwrap();
        assert_eq!(d, District::new(20208, "Ángeles", 202, 84.91));
        assert_eq!(d.province_code(), 2);
    }

    #[test]
    fn writes_current_field_names() {
        let d = District::new(10101, "Carmen", 101, 1.49);
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(v["code"], 10101);
        assert_eq!(v["parent_canton_code"], 101);
        assert!(v.get("codigo").is_none());
    }
}
