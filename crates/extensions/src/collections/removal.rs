// Copyright (C) 2015-2025 The Neo Project.
//
// removal.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// A deduplicated container with O(1) membership under natural equality.
///
/// Sources that implement this are used as the lookup set directly instead
/// of being copied into a fresh one.
pub trait LookupSet<T> {
    /// Gets the number of distinct values.
    fn len(&self) -> usize;

    /// Returns whether the set holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tests membership under the set's own `Eq`/`Hash`.
    fn contains_value(&self, value: &T) -> bool;

    /// Iterates the distinct values.
    fn values(&self) -> Box<dyn Iterator<Item = &T> + '_>;
}

/// The values to remove from a collection.
///
/// Built with `From` for the common containers, with [`Removal::values`] or
/// [`Removal::stream`] for an iterator of references, or with
/// [`Removal::owned`] for an iterator that produces the values itself.
pub enum Removal<'a, T: 'a> {
    /// Already deduplicated, O(1) membership.
    Set(&'a dyn LookupSet<T>),
    /// Borrowed sequence, possibly with duplicates. `len` is known only when
    /// the source reports an exact size.
    Values {
        values: Box<dyn Iterator<Item = &'a T> + 'a>,
        len: Option<usize>,
    },
    /// Owned or lazily computed sequence, possibly with duplicates.
    Owned {
        values: Box<dyn Iterator<Item = T> + 'a>,
        len: Option<usize>,
    },
}

/// One value drawn from a removal source.
pub(crate) enum Entry<'a, T> {
    Borrowed(&'a T),
    Owned(T),
}

impl<T> Entry<'_, T> {
    pub(crate) fn get(&self) -> &T {
        match self {
            Self::Borrowed(value) => value,
            Self::Owned(value) => value,
        }
    }
}

impl<T> Borrow<T> for Entry<'_, T> {
    fn borrow(&self) -> &T {
        self.get()
    }
}

fn exact_len((lower, upper): (usize, Option<usize>)) -> Option<usize> {
    match upper {
        Some(upper) if upper == lower => Some(lower),
        _ => None,
    }
}

impl<'a, T> Removal<'a, T> {
    /// Wraps an arbitrary sequence of references.
    ///
    /// The length counts as known when the iterator's size hint is exact.
    pub fn values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: 'a,
    {
        let values = values.into_iter();
        let len = exact_len(values.size_hint());
        Self::Values {
            values: Box::new(values),
            len,
        }
    }

    /// Wraps a sequence whose length is never treated as known.
    pub fn stream<I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: 'a,
    {
        Self::Values {
            values: Box::new(values.into_iter()),
            len: None,
        }
    }

    /// Wraps a sequence that yields owned values, such as a range or a
    /// `map` over records.
    ///
    /// ```
    /// use collection_extensions::collections::{CollectionExtensions, Removal};
    ///
    /// let mut ids = vec![1u32, 5, 7, 9];
    /// ids.remove_all_of(Removal::owned(4..8));
    /// assert_eq!(ids, vec![1, 9]);
    /// ```
    pub fn owned<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        let values = values.into_iter();
        let len = exact_len(values.size_hint());
        Self::Owned {
            values: Box::new(values),
            len,
        }
    }

    /// Wraps an existing lookup set.
    pub fn set(set: &'a dyn LookupSet<T>) -> Self {
        Self::Set(set)
    }

    /// Gets the number of values when it is known without iterating.
    pub fn known_len(&self) -> Option<usize> {
        match self {
            Self::Set(set) => Some(set.len()),
            Self::Values { len, .. } | Self::Owned { len, .. } => *len,
        }
    }

    /// Returns whether this source is an already deduplicated lookup set.
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Consumes the source, yielding every value (duplicates included).
    pub(crate) fn into_entries(self) -> Box<dyn Iterator<Item = Entry<'a, T>> + 'a> {
        match self {
            Self::Set(set) => Box::new(set.values().map(Entry::Borrowed)),
            Self::Values { values, .. } => Box::new(values.map(Entry::Borrowed)),
            Self::Owned { values, .. } => Box::new(values.map(Entry::Owned)),
        }
    }
}

impl<T> fmt::Debug for Removal<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set(set) => f.debug_struct("Set").field("len", &set.len()).finish(),
            Self::Values { len, .. } => f.debug_struct("Values").field("len", len).finish(),
            Self::Owned { len, .. } => f.debug_struct("Owned").field("len", len).finish(),
        }
    }
}

impl<'a, T> From<&'a [T]> for Removal<'a, T> {
    fn from(values: &'a [T]) -> Self {
        Self::values(values)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Removal<'a, T> {
    fn from(values: &'a [T; N]) -> Self {
        Self::values(values)
    }
}

impl<'a, T> From<&'a Vec<T>> for Removal<'a, T> {
    fn from(values: &'a Vec<T>) -> Self {
        Self::values(values)
    }
}

impl<'a, T> From<&'a VecDeque<T>> for Removal<'a, T> {
    fn from(values: &'a VecDeque<T>) -> Self {
        Self::values(values)
    }
}

impl<'a, T> From<&'a LinkedList<T>> for Removal<'a, T> {
    fn from(values: &'a LinkedList<T>) -> Self {
        Self::values(values)
    }
}

// Ordered sets are deduplicated but only offer O(log n) membership, so they
// count as sized sequences rather than lookup sets.
impl<'a, T> From<&'a BTreeSet<T>> for Removal<'a, T> {
    fn from(values: &'a BTreeSet<T>) -> Self {
        Self::values(values)
    }
}

impl<'a, T, S> From<&'a HashSet<T, S>> for Removal<'a, T>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn from(set: &'a HashSet<T, S>) -> Self {
        Self::Set(set)
    }
}

impl<'a, T, S> From<&'a hashbrown::HashSet<T, S>> for Removal<'a, T>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn from(set: &'a hashbrown::HashSet<T, S>) -> Self {
        Self::Set(set)
    }
}

impl<'a, T, S> From<&'a indexmap::IndexSet<T, S>> for Removal<'a, T>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn from(set: &'a indexmap::IndexSet<T, S>) -> Self {
        Self::Set(set)
    }
}
