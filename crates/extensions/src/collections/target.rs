// Copyright (C) 2015-2025 The Neo Project.
//
// target.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use std::collections::{BTreeSet, LinkedList, VecDeque};

use crate::equality_comparer::EqualityComparer;

/// A mutable collection values can be removed from.
///
/// Only [`len`](Self::len) and [`remove_equal`](Self::remove_equal) are
/// required. Containers that can do better advertise it through the optional
/// capability accessors, which the bulk remover checks before falling back to
/// per-value removal.
pub trait RemovalTarget<T> {
    /// Gets the number of elements.
    fn len(&self) -> usize;

    /// Returns whether the collection has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element equal to `value` under `comparer`.
    ///
    /// Returns the number of elements removed.
    fn remove_equal(&mut self, value: &T, comparer: &dyn EqualityComparer<T>) -> usize;

    /// One-pass conditional removal, if the container supports it.
    fn retain_values(&mut self) -> Option<&mut dyn RetainValues<T>> {
        None
    }

    /// O(1) removal under the container's own hashing, if it has any.
    fn natural_remove(&mut self) -> Option<&mut dyn NaturalRemove<T>> {
        None
    }
}

/// Bulk conditional removal capability.
pub trait RetainValues<T> {
    /// Keeps only the elements for which `keep` returns true, preserving the
    /// relative order of ordered containers.
    ///
    /// Returns the number of elements removed.
    fn retain_values(&mut self, keep: &mut dyn FnMut(&T) -> bool) -> usize;
}

/// Native set-difference capability.
pub trait NaturalRemove<T> {
    /// Removes `value` using the container's own `Eq`/`Hash`.
    fn remove_natural(&mut self, value: &T) -> bool;
}

impl<T> RemovalTarget<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn remove_equal(&mut self, value: &T, comparer: &dyn EqualityComparer<T>) -> usize {
        let before = Vec::len(self);
        self.retain(|item| !comparer.equals(item, value));
        before - Vec::len(self)
    }

    fn retain_values(&mut self) -> Option<&mut dyn RetainValues<T>> {
        Some(self)
    }
}

impl<T> RetainValues<T> for Vec<T> {
    fn retain_values(&mut self, keep: &mut dyn FnMut(&T) -> bool) -> usize {
        let before = self.len();
        self.retain(|item| keep(item));
        before - self.len()
    }
}

impl<T> RemovalTarget<T> for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn remove_equal(&mut self, value: &T, comparer: &dyn EqualityComparer<T>) -> usize {
        let before = VecDeque::len(self);
        self.retain(|item| !comparer.equals(item, value));
        before - VecDeque::len(self)
    }

    fn retain_values(&mut self) -> Option<&mut dyn RetainValues<T>> {
        Some(self)
    }
}

impl<T> RetainValues<T> for VecDeque<T> {
    fn retain_values(&mut self, keep: &mut dyn FnMut(&T) -> bool) -> usize {
        let before = self.len();
        self.retain(|item| keep(item));
        before - self.len()
    }
}

impl<T: Ord> RemovalTarget<T> for BTreeSet<T> {
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn remove_equal(&mut self, value: &T, comparer: &dyn EqualityComparer<T>) -> usize {
        let before = BTreeSet::len(self);
        self.retain(|item| !comparer.equals(item, value));
        before - BTreeSet::len(self)
    }

    fn retain_values(&mut self) -> Option<&mut dyn RetainValues<T>> {
        Some(self)
    }
}

impl<T: Ord> RetainValues<T> for BTreeSet<T> {
    fn retain_values(&mut self, keep: &mut dyn FnMut(&T) -> bool) -> usize {
        let before = self.len();
        self.retain(|item| keep(item));
        before - self.len()
    }
}

/// Linked lists have no stable in-place retain, so removal walks the list
/// once and relinks the survivors.
impl<T> RemovalTarget<T> for LinkedList<T> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn remove_equal(&mut self, value: &T, comparer: &dyn EqualityComparer<T>) -> usize {
        RetainValues::retain_values(self, &mut |item| !comparer.equals(item, value))
    }

    fn retain_values(&mut self) -> Option<&mut dyn RetainValues<T>> {
        Some(self)
    }
}

impl<T> RetainValues<T> for LinkedList<T> {
    fn retain_values(&mut self, keep: &mut dyn FnMut(&T) -> bool) -> usize {
        let before = self.len();
        let mut kept = LinkedList::new();
        while let Some(item) = self.pop_front() {
            if keep(&item) {
                kept.push_back(item);
            }
        }
        *self = kept;
        before - self.len()
    }
}
