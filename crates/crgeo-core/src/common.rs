// crates/crgeo-core/src/common.rs

//! Shared report types: the province summary printed after every merge and
//! the catalog statistics.

use crate::model::{Canton, District};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Province codes and names, in code order.
pub const PROVINCES: [(u32, &str); 7] = [
    (1, "San José"),
    (2, "Alajuela"),
    (3, "Cartago"),
    (4, "Heredia"),
    (5, "Guanacaste"),
    (6, "Puntarenas"),
    (7, "Limón"),
];

// -----------------------------------------------------------------------------
// PROVINCE SUMMARY
// -----------------------------------------------------------------------------

/// District counts bucketed by the province digit of `parent_canton_code`.
///
/// Anything whose derived province is not 1..=7 lands in `other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvinceSummary {
    /// Index 0 is province 1 (San José), index 6 is province 7 (Limón).
    pub by_province: [usize; 7],
    pub other: usize,
    pub total: usize,
}

impl ProvinceSummary {
    pub fn from_districts(districts: &[District]) -> Self {
        let mut summary = ProvinceSummary::default();
        for d in districts {
            match d.province_code() {
                p @ 1..=7 => summary.by_province[(p - 1) as usize] += 1,
                _ => summary.other += 1,
            }
        }
        summary.total = districts.len();
        summary
    }

    /// Count for one province code; `0` for codes outside 1..=7.
    pub fn count(&self, province_code: u32) -> usize {
        match province_code {
            1..=7 => self.by_province[(province_code - 1) as usize],
            _ => 0,
        }
    }
}

impl fmt::Display for ProvinceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Districts by province:")?;
        for (code, name) in PROVINCES {
            writeln!(f, "  {name}: {}", self.count(code))?;
        }
        if self.other > 0 {
            writeln!(f, "  Other: {}", self.other)?;
        }
        write!(f, "  Total: {}", self.total)
    }
}

// -----------------------------------------------------------------------------
// CATALOG STATISTICS
// -----------------------------------------------------------------------------

/// The parent with the most children in a tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leader {
    pub code: u32,
    pub name: String,
    pub count: usize,
}

/// Aggregate statistics for a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub provinces: usize,
    pub cantons: usize,
    pub districts: usize,
    /// `None` when there are no cantons, or the winning province code is not
    /// in the province store.
    pub province_with_most_cantons: Option<Leader>,
    pub canton_with_most_districts: Option<Leader>,
    /// Sum of all district areas, km².
    pub total_area: f64,
}

/// Returns the key with the highest count; ties go to the lowest key.
pub(crate) fn busiest<I>(parents: I) -> Option<(u32, usize)>
where
    I: IntoIterator<Item = u32>,
{
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for p in parents {
        *counts.entry(p).or_default() += 1;
    }
    counts
        .into_iter()
        .fold(None, |best, (code, n)| match best {
            Some((_, m)) if m >= n => best,
            _ => Some((code, n)),
        })
}

// -----------------------------------------------------------------------------
// LOOKUP RESULTS
// -----------------------------------------------------------------------------

/// Names for a province/canton/district code triple.
///
/// Tiers that could not be resolved carry the code as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationNames {
    pub province: String,
    pub canton: String,
    pub district: String,
}

/// Records whose parent reference does not resolve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Orphans<'a> {
    pub cantons: Vec<&'a Canton>,
    pub districts: Vec<&'a District>,
}

impl Orphans<'_> {
    pub fn is_empty(&self) -> bool {
        self.cantons.is_empty() && self.districts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cantons.len() + self.districts.len()
    }
}
