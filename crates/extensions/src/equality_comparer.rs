// Copyright (C) 2015-2025 The Neo Project.
//
// equality_comparer.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Equivalence relation used to match values across collections.
///
/// Implementations must be consistent: two values for which [`equals`]
/// returns `true` must feed identical data to the hasher.
///
/// [`equals`]: EqualityComparer::equals
pub trait EqualityComparer<T: ?Sized> {
    /// Determines whether the specified values are equal.
    fn equals(&self, x: &T, y: &T) -> bool;

    /// Feeds the value's identity into `state`.
    fn hash(&self, value: &T, state: &mut dyn Hasher);

    /// Returns true when this comparer is exactly the type's own `Eq`/`Hash`.
    ///
    /// Hash-based containers can only be searched directly under natural
    /// equality, so the bulk remover uses this to pick its fast paths.
    fn is_natural(&self) -> bool {
        false
    }
}

impl<T: ?Sized, C: EqualityComparer<T> + ?Sized> EqualityComparer<T> for &C {
    fn equals(&self, x: &T, y: &T) -> bool {
        (**self).equals(x, y)
    }

    fn hash(&self, value: &T, state: &mut dyn Hasher) {
        (**self).hash(value, state)
    }

    fn is_natural(&self) -> bool {
        (**self).is_natural()
    }
}

/// The type's own `Eq` and `Hash`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalEquality;

impl NaturalEquality {
    /// Default comparer
    pub const DEFAULT: NaturalEquality = NaturalEquality;
}

impl<T: Eq + Hash + ?Sized> EqualityComparer<T> for NaturalEquality {
    fn equals(&self, x: &T, y: &T) -> bool {
        x == y
    }

    fn hash(&self, value: &T, mut state: &mut dyn Hasher) {
        value.hash(&mut state);
    }

    fn is_natural(&self) -> bool {
        true
    }
}

/// Compares values by a projected key.
///
/// ```
/// use collection_extensions::{EqualityComparer, KeyEquality};
///
/// let ignore_case = KeyEquality::new(|s: &String| s.to_lowercase());
/// assert!(ignore_case.equals(&"Neo".to_string(), &"NEO".to_string()));
/// ```
pub struct KeyEquality<T: ?Sized, K, F> {
    key: F,
    _marker: PhantomData<fn(&T) -> K>,
}

impl<T: ?Sized, K, F> KeyEquality<T, K, F>
where
    F: Fn(&T) -> K,
    K: Eq + Hash,
{
    pub fn new(key: F) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized, K, F> EqualityComparer<T> for KeyEquality<T, K, F>
where
    F: Fn(&T) -> K,
    K: Eq + Hash,
{
    fn equals(&self, x: &T, y: &T) -> bool {
        (self.key)(x) == (self.key)(y)
    }

    fn hash(&self, value: &T, mut state: &mut dyn Hasher) {
        (self.key)(value).hash(&mut state);
    }
}

impl<T: ?Sized, K, F> fmt::Debug for KeyEquality<T, K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyEquality").finish_non_exhaustive()
    }
}

/// Comparer assembled from an equality closure and a hash closure.
pub struct FnEquality<E, H> {
    eq: E,
    hash: H,
}

impl<E, H> FnEquality<E, H> {
    pub fn new(eq: E, hash: H) -> Self {
        Self { eq, hash }
    }
}

impl<T: ?Sized, E, H> EqualityComparer<T> for FnEquality<E, H>
where
    E: Fn(&T, &T) -> bool,
    H: Fn(&T, &mut dyn Hasher),
{
    fn equals(&self, x: &T, y: &T) -> bool {
        (self.eq)(x, y)
    }

    fn hash(&self, value: &T, state: &mut dyn Hasher) {
        (self.hash)(value, state)
    }
}

impl<E, H> fmt::Debug for FnEquality<E, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnEquality").finish_non_exhaustive()
    }
}
