// crates/crgeo-core/src/model/catalog.rs
use super::records::{Canton, District, Province};
use serde::{Deserialize, Serialize};

/// The three stores of the dataset, held side by side.
///
/// Each vector keeps store order (insertion order). Parent links are plain
/// codes; nothing here guarantees they resolve (see
/// [`crate::traits::CatalogSearch::orphans`]).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub provinces: Vec<Province>,
    pub cantons: Vec<Canton>,
    pub districts: Vec<District>,
}

impl Catalog {
    pub fn new(provinces: Vec<Province>, cantons: Vec<Canton>, districts: Vec<District>) -> Self {
        Catalog {
            provinces,
            cantons,
            districts,
        }
    }

    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    pub fn cantons(&self) -> &[Canton] {
        &self.cantons
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty() && self.cantons.is_empty() && self.districts.is_empty()
    }
}
