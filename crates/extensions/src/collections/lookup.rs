//! Transient lookup sets built for a single bulk removal.

use std::hash::{Hash, Hasher};

use hashbrown::HashSet;

use super::removal::{Entry, LookupSet};
use crate::equality_comparer::EqualityComparer;

/// A removal value that hashes and compares through a comparer.
struct Keyed<'a, T> {
    entry: Entry<'a, T>,
    comparer: &'a dyn EqualityComparer<T>,
}

impl<T> Hash for Keyed<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.comparer.hash(self.entry.get(), state);
    }
}

impl<T> PartialEq for Keyed<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.comparer.equals(self.entry.get(), other.entry.get())
    }
}

impl<T> Eq for Keyed<'_, T> {}

/// Deduplicated set of removal values under an arbitrary comparer.
///
/// Borrowed values stay borrowed; owned ones are moved in. The first
/// occurrence of each equivalence class is kept and iteration order is
/// unspecified.
pub(crate) struct LookupTable<'a, T> {
    entries: HashSet<Keyed<'a, T>>,
    comparer: &'a dyn EqualityComparer<T>,
}

impl<'a, T> LookupTable<'a, T> {
    pub(crate) fn build<'v, I>(values: I, comparer: &'a dyn EqualityComparer<T>) -> Self
    where
        I: IntoIterator<Item = Entry<'v, T>>,
        T: 'v,
        'v: 'a,
    {
        let values = values.into_iter();
        let mut entries = HashSet::with_capacity(values.size_hint().0);
        for entry in values {
            entries.insert(Keyed { entry, comparer });
        }
        Self { entries, comparer }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn contains(&self, value: &T) -> bool {
        self.entries.contains(&Keyed {
            entry: Entry::Borrowed(value),
            comparer: self.comparer,
        })
    }

    pub(crate) fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.entries.iter().map(|keyed| keyed.entry.get()))
    }
}

/// Membership oracle used by the bulk retain path: either a caller's set
/// reused as-is, or a table built for this call.
pub(crate) enum Lookup<'a, T> {
    Borrowed(&'a dyn LookupSet<T>),
    Built(LookupTable<'a, T>),
}

impl<T> Lookup<'_, T> {
    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Borrowed(set) => set.len(),
            Self::Built(table) => table.len(),
        }
    }

    pub(crate) fn contains(&self, value: &T) -> bool {
        match self {
            Self::Borrowed(set) => set.contains_value(value),
            Self::Built(table) => table.contains(value),
        }
    }
}
