// Copyright (C) 2015-2025 The Neo Project.
//
// collection_extensions.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use std::hash::Hash;

use super::bulk_remover::BulkRemover;
use super::removal::Removal;
use super::target::RemovalTarget;
use crate::equality_comparer::EqualityComparer;

/// Removes every value in `to_remove` from `target` under natural equality.
///
/// An absent or empty target, an absent or empty removal set, and values the
/// target does not hold are all no-ops.
pub fn remove_all<'a, T, C>(target: Option<&mut C>, to_remove: Option<Removal<'a, T>>)
where
    T: Eq + Hash,
    C: RemovalTarget<T> + ?Sized,
{
    BulkRemover::default().remove(target, to_remove);
}

/// Removes every value in `to_remove` from `target` under `comparer`.
pub fn remove_all_by<'a, T, C>(
    target: Option<&mut C>,
    to_remove: Option<Removal<'a, T>>,
    comparer: &dyn EqualityComparer<T>,
) where
    C: RemovalTarget<T> + ?Sized,
{
    BulkRemover::default().remove_by(target, to_remove, comparer);
}

/// Adds `item` to `target` only when it is present.
pub fn add_if_present<T, C>(target: &mut C, item: Option<T>)
where
    C: Extend<T>,
{
    if let Some(item) = item {
        target.extend(std::iter::once(item));
    }
}

/// Bulk removal and conditional insertion as methods on the collection.
pub trait CollectionExtensions<T> {
    /// Removes every value in `to_remove` from the collection.
    fn remove_all_of<'a, R>(&mut self, to_remove: R)
    where
        R: Into<Removal<'a, T>>,
        T: Eq + Hash + 'a;

    /// Removes every value in `to_remove` that `comparer` matches.
    fn remove_all_of_by<'a, R>(&mut self, to_remove: R, comparer: &dyn EqualityComparer<T>)
    where
        R: Into<Removal<'a, T>>,
        T: 'a;

    /// Removes the given values. See also [`remove_values!`](crate::remove_values).
    fn remove_values(&mut self, values: &[T])
    where
        T: Eq + Hash;

    /// Adds `item` only when it is present.
    fn add_if_present(&mut self, item: Option<T>);
}

impl<T, C> CollectionExtensions<T> for C
where
    C: RemovalTarget<T> + Extend<T>,
{
    fn remove_all_of<'a, R>(&mut self, to_remove: R)
    where
        R: Into<Removal<'a, T>>,
        T: Eq + Hash + 'a,
    {
        remove_all(Some(self), Some(to_remove.into()));
    }

    fn remove_all_of_by<'a, R>(&mut self, to_remove: R, comparer: &dyn EqualityComparer<T>)
    where
        R: Into<Removal<'a, T>>,
        T: 'a,
    {
        remove_all_by(Some(self), Some(to_remove.into()), comparer);
    }

    fn remove_values(&mut self, values: &[T])
    where
        T: Eq + Hash,
    {
        remove_all(Some(self), Some(Removal::from(values)));
    }

    fn add_if_present(&mut self, item: Option<T>) {
        add_if_present(self, item);
    }
}

/// Removes the listed values from a collection.
///
/// ```
/// use collection_extensions::remove_values;
///
/// let mut ids = vec![1, 2, 2, 3, 4];
/// remove_values!(ids, 2, 4, 5);
/// assert_eq!(ids, vec![1, 3]);
/// ```
#[macro_export]
macro_rules! remove_values {
    ($target:expr $(, $value:expr)* $(,)?) => {
        $crate::collections::CollectionExtensions::remove_values(&mut $target, &[$($value),*])
    };
}
