// Copyright (C) 2015-2025 The Neo Project.
//
// hash_set_extensions.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use std::hash::{BuildHasher, Hash};

use indexmap::IndexSet;

use super::removal::LookupSet;
use super::target::{NaturalRemove, RemovalTarget, RetainValues};
use crate::equality_comparer::EqualityComparer;

/// Hash sets support both native set difference and bulk retain, and double
/// as ready-made lookup sets when passed as the values to remove.
macro_rules! impl_hash_set {
    ($set:ident) => {
        impl<T, S> RemovalTarget<T> for $set<T, S>
        where
            T: Eq + Hash,
            S: BuildHasher,
        {
            fn len(&self) -> usize {
                $set::len(self)
            }

            fn remove_equal(&mut self, value: &T, comparer: &dyn EqualityComparer<T>) -> usize {
                if comparer.is_natural() {
                    return usize::from($set::remove(self, value));
                }
                let before = $set::len(self);
                self.retain(|item| !comparer.equals(item, value));
                before - $set::len(self)
            }

            fn retain_values(&mut self) -> Option<&mut dyn RetainValues<T>> {
                Some(self)
            }

            fn natural_remove(&mut self) -> Option<&mut dyn NaturalRemove<T>> {
                Some(self)
            }
        }

        impl<T, S> RetainValues<T> for $set<T, S>
        where
            T: Eq + Hash,
            S: BuildHasher,
        {
            fn retain_values(&mut self, keep: &mut dyn FnMut(&T) -> bool) -> usize {
                let before = $set::len(self);
                self.retain(|item| keep(item));
                before - $set::len(self)
            }
        }

        impl<T, S> NaturalRemove<T> for $set<T, S>
        where
            T: Eq + Hash,
            S: BuildHasher,
        {
            fn remove_natural(&mut self, value: &T) -> bool {
                $set::remove(self, value)
            }
        }

        impl<T, S> LookupSet<T> for $set<T, S>
        where
            T: Eq + Hash,
            S: BuildHasher,
        {
            fn len(&self) -> usize {
                $set::len(self)
            }

            fn contains_value(&self, value: &T) -> bool {
                $set::contains(self, value)
            }

            fn values(&self) -> Box<dyn Iterator<Item = &T> + '_> {
                Box::new($set::iter(self))
            }
        }
    };
}

mod std_set {
    use super::*;
    use std::collections::HashSet;

    impl_hash_set!(HashSet);
}

mod hashbrown_set {
    use super::*;
    use hashbrown::HashSet;

    impl_hash_set!(HashSet);
}

/// Insertion-ordered sets keep their order through bulk retain. Their natural
/// removal is O(n) when order must be kept, so no set-difference capability is
/// offered.
impl<T, S> RemovalTarget<T> for IndexSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn len(&self) -> usize {
        IndexSet::len(self)
    }

    fn remove_equal(&mut self, value: &T, comparer: &dyn EqualityComparer<T>) -> usize {
        if comparer.is_natural() {
            return usize::from(self.shift_remove(value));
        }
        let before = IndexSet::len(self);
        self.retain(|item| !comparer.equals(item, value));
        before - IndexSet::len(self)
    }

    fn retain_values(&mut self) -> Option<&mut dyn RetainValues<T>> {
        Some(self)
    }
}

impl<T, S> RetainValues<T> for IndexSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn retain_values(&mut self, keep: &mut dyn FnMut(&T) -> bool) -> usize {
        let before = IndexSet::len(self);
        self.retain(|item| keep(item));
        before - IndexSet::len(self)
    }
}

impl<T, S> LookupSet<T> for IndexSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn len(&self) -> usize {
        IndexSet::len(self)
    }

    fn contains_value(&self, value: &T) -> bool {
        IndexSet::contains(self, value)
    }

    fn values(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(IndexSet::iter(self))
    }
}
