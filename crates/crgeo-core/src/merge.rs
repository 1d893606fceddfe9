// crates/crgeo-core/src/merge.rs

//! # Keyed Merge
//!
//! Appends candidate records to an existing sequence, skipping every
//! candidate whose key is already present. "Present" means in `existing` or
//! earlier in the candidates themselves, so the first occurrence of a key
//! always wins.
//!
//! Duplicates are not errors. A candidate that repeats a key with different
//! field values is dropped just the same; there is no conflict detection.

use crate::traits::Keyed;
use std::collections::HashSet;
use tracing::debug;

/// Counts from one merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Records that were already in the sequence before the merge.
    pub existing: usize,
    /// Candidates appended.
    pub added: usize,
    /// Candidates dropped because their key was already taken.
    pub skipped: usize,
}

impl MergeReport {
    pub fn total(&self) -> usize {
        self.existing + self.added
    }

    /// Combines the reports of two consecutive merges over the same sequence.
    pub fn then(self, next: MergeReport) -> MergeReport {
        MergeReport {
            existing: self.existing,
            added: self.added + next.added,
            skipped: self.skipped + next.skipped,
        }
    }
}

/// The merged sequence plus its report.
#[derive(Debug, Clone, PartialEq)]
pub struct Merged<T> {
    pub records: Vec<T>,
    pub report: MergeReport,
}

/// **Keyed merge:** `existing` followed by the candidates whose key is new.
///
/// # Examples
/// ```rust
/// use crgeo_core::merge::merge;
/// use crgeo_core::District;
///
/// let existing = vec![District::new(101, "A", 1, 1.0)];
/// let candidates = vec![
///     District::new(101, "A-dup", 1, 9.0),
///     District::new(102, "B", 1, 2.0),
/// ];
///
/// let merged = merge(existing, candidates);
/// let names: Vec<_> = merged.records.iter().map(|d| d.name.as_str()).collect();
/// assert_eq!(names, ["A", "B"]);
/// assert_eq!(merged.report.skipped, 1);
/// ```
pub fn merge<T, I>(existing: Vec<T>, candidates: I) -> Merged<T>
where
    T: Keyed,
    I: IntoIterator<Item = T>,
{
    merge_batches(existing, std::iter::once(candidates))
}

/// Folds [`merge`] over several candidate batches, in order.
///
/// The key set is shared across batches, so a key claimed by an earlier batch
/// is skipped in a later one.
pub fn merge_batches<T, B, I>(existing: Vec<T>, batches: B) -> Merged<T>
where
    T: Keyed,
    B: IntoIterator<Item = I>,
    I: IntoIterator<Item = T>,
{
    let mut seen: HashSet<T::Key> = existing.iter().map(Keyed::key).collect();
    let mut report = MergeReport {
        existing: existing.len(),
        ..MergeReport::default()
    };
    let mut records = existing;

    for batch in batches {
        for candidate in batch {
            let key = candidate.key();
            if seen.insert(key) {
                records.push(candidate);
                report.added += 1;
            } else {
                debug!(?key, "skipping candidate with a key already present");
                report.skipped += 1;
            }
        }
    }

    Merged { records, report }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Canton, District};

    fn d(code: u32, name: &str) -> District {
        District::new(code, name, code / 100, 1.0)
    }

    fn codes(records: &[District]) -> Vec<u32> {
        records.iter().map(|r| r.code).collect()
    }

    #[test]
    fn drops_candidate_already_in_existing() {
        let existing = vec![District::new(101, "A", 1, 1.0)];
        let candidates = vec![
            District::new(101, "A-dup", 1, 5.0),
            District::new(102, "B", 1, 2.0),
        ];

        let merged = merge(existing, candidates);

        assert_eq!(
            merged.records,
            vec![District::new(101, "A", 1, 1.0), District::new(102, "B", 1, 2.0)]
        );
        assert_eq!(
            merged.report,
            MergeReport {
                existing: 1,
                added: 1,
                skipped: 1
            }
        );
    }

    #[test]
    fn first_occurrence_wins_within_a_batch() {
        let merged = merge(Vec::new(), vec![d(500, "first"), d(500, "second")]);
        assert_eq!(merged.records.len(), 1);
        assert_eq!(merged.records[0].name, "first");
        assert_eq!(merged.report.skipped, 1);
    }

    #[test]
    fn merging_twice_adds_nothing() {
        let candidates = vec![d(10101, "Carmen"), d(10102, "Merced"), d(10101, "again")];
        let first = merge(vec![d(10103, "Hospital")], candidates.clone());
        let second = merge(first.records.clone(), candidates);

        assert_eq!(second.records, first.records);
        assert_eq!(second.report.added, 0);
        assert_eq!(second.report.skipped, 3);
    }

    #[test]
    fn keeps_existing_order_then_candidate_order() {
        let existing = vec![d(30, "c"), d(10, "a"), d(20, "b")];
        let candidates = vec![d(50, "e"), d(10, "dup"), d(40, "d"), d(60, "f")];

        let merged = merge(existing, candidates);

        assert_eq!(codes(&merged.records), [30, 10, 20, 50, 40, 60]);
    }

    #[test]
    fn output_keys_are_unique() {
        let existing = vec![d(1, "a"), d(2, "b")];
        let candidates = (0..20).map(|i| d(i % 5, "x"));

        let merged = merge(existing, candidates);

        let mut keys = codes(&merged.records);
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), merged.records.len());
        assert_eq!(merged.records.len(), 5);
    }

    #[test]
    fn batches_share_the_key_set() {
        let batches = vec![
            vec![d(1, "one"), d(2, "two")],
            vec![d(2, "two-again"), d(3, "three")],
            vec![],
        ];

        let merged = merge_batches(vec![d(0, "zero")], batches);

        assert_eq!(codes(&merged.records), [0, 1, 2, 3]);
        assert_eq!(merged.report.added, 3);
        assert_eq!(merged.report.skipped, 1);
        assert_eq!(merged.report.total(), 4);
    }

    #[test]
    fn no_batches_returns_existing_untouched() {
        let existing = vec![d(7, "g")];
        let merged = merge_batches(existing.clone(), Vec::<Vec<District>>::new());
        assert_eq!(merged.records, existing);
        assert_eq!(merged.report.added, 0);
    }

    #[test]
    fn dangling_parent_is_accepted() {
        let merged = merge(Vec::new(), vec![District::new(99901, "Ghost", 999, -1.0)]);
        assert_eq!(merged.report.added, 1);
    }

    #[test]
    fn works_for_any_keyed_record() {
        let existing = vec![Canton::new(101, "San José", 1)];
        let candidates = vec![Canton::new(101, "x", 1), Canton::new(102, "Escazú", 1)];
        let merged = merge(existing, candidates);
        assert_eq!(merged.records.len(), 2);
        assert_eq!(merged.records[1].name, "Escazú");
    }

    #[test]
    fn reports_chain() {
        let a = MergeReport {
            existing: 4,
            added: 2,
            skipped: 1,
        };
        let b = MergeReport {
            existing: 6,
            added: 3,
            skipped: 0,
        };
        let chained = MergeReport {
            existing: 4,
            added: 5,
            skipped: 1,
        };
        assert_eq!(a.then(b), chained);
    }
}
