// crates/crgeo-core/src/traits.rs
use crate::common::{CatalogStats, LocationNames, Orphans, ProvinceSummary};
use crate::model::{Canton, District, Location, Province};
use crate::text::contains_folded;
use std::fmt::Debug;
use std::hash::Hash;

/// A record with a unique key inside its store.
///
/// This is the only property the merge relies on: two records with the same
/// key are the same record, whatever their other fields say.
///
/// # Examples
/// ```rust
/// use crgeo_core::traits::Keyed;
///
/// struct Row(u32, &'static str);
/// impl Keyed for Row {
///     type Key = u32;
///     fn key(&self) -> u32 { self.0 }
/// }
///
/// assert_eq!(Row(10101, "Carmen").key(), 10101);
/// ```
pub trait Keyed {
    type Key: Eq + Hash + Copy + Debug;

    fn key(&self) -> Self::Key;
}

/// Name-based matching helpers for types that expose a display name.
///
/// Comparisons are accent-insensitive and case-insensitive, based on
/// [`crate::text::fold_key`]. Implementors provide a `&str` view of their
/// name via [`NameMatch::name_str`].
///
/// # Examples
/// ```rust
/// use crgeo_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Limón").name_contains("limon"));
/// assert!(Place("Pérez Zeledón").name_contains("zeledon"));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    /// Accent-insensitive and case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        contains_folded(self.name_str(), q)
    }
}

/// Read-side operations over the three administrative tiers.
///
/// Implemented for [`crate::Catalog`] in `search.rs`.
pub trait CatalogSearch {
    /// Cantons of one province, in store order.
    fn cantons_by_province(&self, province_code: u32) -> Vec<&Canton>;

    /// Districts of one canton, in store order.
    fn districts_by_canton(&self, canton_code: u32) -> Vec<&District>;

    fn find_province(&self, code: u32) -> Option<&Province>;
    fn find_canton(&self, code: u32) -> Option<&Canton>;
    fn find_district(&self, code: u32) -> Option<&District>;

    /// Resolves the three codes into records, but only when the hierarchy is
    /// consistent: the canton belongs to the province and the district to the
    /// canton.
    fn location(&self, province: u32, canton: u32, district: u32) -> Option<Location<'_>>;

    /// `true` when [`CatalogSearch::location`] resolves.
    fn validate_location(&self, province: u32, canton: u32, district: u32) -> bool {
        self.location(province, canton, district).is_some()
    }

    /// `"District, Canton, Province"`, or `None` for an invalid combination.
    fn format_location(&self, province: u32, canton: u32, district: u32) -> Option<String> {
        self.location(province, canton, district).map(|loc| loc.to_string())
    }

    /// Approximate lookup by names, walking down the hierarchy.
    ///
    /// The first province whose name contains `province` is chosen, then the
    /// first of its cantons containing `canton`, then the first of that
    /// canton's districts containing `district`.
    fn find_location_by_names(
        &self,
        province: &str,
        canton: &str,
        district: &str,
    ) -> Option<Location<'_>>;

    /// Best-effort code to name conversion. Any tier that cannot be resolved
    /// keeps the code as given.
    fn location_names(&self, province: &str, canton: &str, district: &str) -> LocationNames;

    /// Records whose parent reference does not resolve.
    fn orphans(&self) -> Orphans<'_>;

    fn stats(&self) -> CatalogStats;

    /// District counts bucketed by province.
    fn summary(&self) -> ProvinceSummary;
}
