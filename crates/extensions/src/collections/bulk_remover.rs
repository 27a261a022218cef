// Copyright (C) 2015-2025 The Neo Project.
//
// bulk_remover.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use tracing::trace;

use super::lookup::{Lookup, LookupTable};
use super::removal::Removal;
use super::target::RemovalTarget;
use crate::equality_comparer::{EqualityComparer, NaturalEquality};
use crate::options::RemovalOptions;

/// The path a bulk removal took. Every strategy yields the same result; they
/// differ only in how much work they do for a given input shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemovalStrategy {
    /// Nothing to do: absent or empty target, absent or empty removal set.
    Skipped,
    /// Target removed each value through its own hashing.
    SetDifference,
    /// One conditional pass over the target against a lookup set.
    BulkRetain,
    /// Removal set was already deduplicated and was iterated directly.
    DirectFromSet,
    /// Small sized removal set iterated directly, duplicates included.
    DirectSmall,
    /// Removal set deduplicated first, then iterated.
    DedupThenRemove,
}

impl RemovalStrategy {
    /// Gets the snake_case name used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Skipped => "skipped",
            Self::SetDifference => "set_difference",
            Self::BulkRetain => "bulk_retain",
            Self::DirectFromSet => "direct_from_set",
            Self::DirectSmall => "direct_small",
            Self::DedupThenRemove => "dedup_then_remove",
        }
    }
}

impl fmt::Display for RemovalStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one bulk removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalReport {
    /// Strategy the removal took.
    pub strategy: RemovalStrategy,
    /// Number of target elements removed.
    pub removed: usize,
}

impl RemovalReport {
    fn new(strategy: RemovalStrategy, removed: usize) -> Self {
        Self { strategy, removed }
    }

    fn skipped() -> Self {
        Self::new(RemovalStrategy::Skipped, 0)
    }
}

/// Removes every occurrence of a set of values from a collection in place,
/// choosing the cheapest strategy the inputs allow.
///
/// Absent or empty inputs and values missing from the target are silent
/// no-ops; the operation never fails.
///
/// ```
/// use collection_extensions::collections::{BulkRemover, Removal};
///
/// let mut ids = vec![1, 2, 2, 3, 4];
/// let stale = [2, 4, 5];
/// let report = BulkRemover::default().remove(Some(&mut ids), Some(Removal::from(&stale)));
/// assert_eq!(ids, vec![1, 3]);
/// assert_eq!(report.removed, 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkRemover {
    options: RemovalOptions,
}

impl BulkRemover {
    /// Creates a remover with the given tuning options.
    pub fn new(options: RemovalOptions) -> Self {
        Self { options }
    }

    /// Gets the tuning options.
    pub fn options(&self) -> &RemovalOptions {
        &self.options
    }

    /// Removes under the values' natural equality.
    pub fn remove<'a, T, C>(
        &self,
        target: Option<&mut C>,
        to_remove: Option<Removal<'a, T>>,
    ) -> RemovalReport
    where
        T: Eq + Hash,
        C: RemovalTarget<T> + ?Sized,
    {
        self.remove_by(target, to_remove, &NaturalEquality)
    }

    /// Removes under `comparer`, which is used both to deduplicate the
    /// removal set and to match target elements.
    pub fn remove_by<'a, T, C>(
        &self,
        target: Option<&mut C>,
        to_remove: Option<Removal<'a, T>>,
        comparer: &dyn EqualityComparer<T>,
    ) -> RemovalReport
    where
        C: RemovalTarget<T> + ?Sized,
    {
        let (target, to_remove) = match (target, to_remove) {
            (Some(target), Some(to_remove)) if !target.is_empty() => (target, to_remove),
            _ => {
                trace!(target: "collections", "bulk removal skipped: no target or no values");
                return RemovalReport::skipped();
            }
        };
        if to_remove.known_len() == Some(0) {
            trace!(target: "collections", "bulk removal skipped: empty removal set");
            return RemovalReport::skipped();
        }

        let target_len = target.len();
        let report = self.dispatch(target, to_remove, comparer);
        trace!(
            target: "collections",
            strategy = %report.strategy,
            removed = report.removed,
            target_len,
            "bulk removal finished"
        );
        report
    }

    fn dispatch<'a, T, C>(
        &self,
        target: &mut C,
        to_remove: Removal<'a, T>,
        comparer: &dyn EqualityComparer<T>,
    ) -> RemovalReport
    where
        C: RemovalTarget<T> + ?Sized,
    {
        let natural = comparer.is_natural();

        // Hash targets searched with their own hashing need no lookup set at all.
        if natural {
            if let Some(remover) = target.natural_remove() {
                let mut removed = 0;
                for entry in to_remove.into_entries() {
                    if remover.remove_natural(entry.get()) {
                        removed += 1;
                    }
                }
                return RemovalReport::new(RemovalStrategy::SetDifference, removed);
            }
        }

        if let Some(bulk) = target.retain_values() {
            let lookup = match to_remove {
                Removal::Set(set) if natural => Lookup::Borrowed(set),
                other => Lookup::Built(LookupTable::build(other.into_entries(), comparer)),
            };
            if lookup.len() == 0 {
                return RemovalReport::skipped();
            }
            let removed = bulk.retain_values(&mut |item| !lookup.contains(item));
            return RemovalReport::new(RemovalStrategy::BulkRetain, removed);
        }

        // A caller's set is only deduplicated under its own equality.
        let to_remove = match to_remove {
            Removal::Set(set) if natural => {
                let removed = remove_each(target, set.values(), comparer);
                return RemovalReport::new(RemovalStrategy::DirectFromSet, removed);
            }
            other => other,
        };

        if matches!(to_remove.known_len(), Some(len) if len <= self.options.small_set_threshold) {
            let removed = remove_each(target, to_remove.into_entries(), comparer);
            return RemovalReport::new(RemovalStrategy::DirectSmall, removed);
        }

        let table = LookupTable::build(to_remove.into_entries(), comparer);
        let removed = remove_each(target, table.iter(), comparer);
        RemovalReport::new(RemovalStrategy::DedupThenRemove, removed)
    }
}

fn remove_each<T, C, I>(target: &mut C, values: I, comparer: &dyn EqualityComparer<T>) -> usize
where
    C: RemovalTarget<T> + ?Sized,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    let mut removed = 0;
    for value in values {
        if target.is_empty() {
            break;
        }
        removed += target.remove_equal(value.borrow(), comparer);
    }
    removed
}
