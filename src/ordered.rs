//! Comparator-ordered output for sets.
//!
//! [`OrderedSet`] decorates a [`Set`] with a [`Comparator`] that decides the
//! order of [`OrderedSet::list`]. Membership and algebra are the plain set
//! operations, reachable through `Deref`; only enumeration changes.
//!
//! # Examples
//!
//! ```rust
//! use keyset::{OrderedSet, ReverseOrder};
//!
//! let mut set = OrderedSet::with_comparator(ReverseOrder);
//! set.insert_all([15, 19, 12, 8, 13]);
//! assert_eq!(set.list(), vec![19, 15, 13, 12, 8]);
//!
//! let mut by_length = OrderedSet::with_comparator(|left: &&str, right: &&str| {
//!     left.len().cmp(&right.len()).then_with(|| left.cmp(right))
//! });
//! by_length.insert("ccc").insert("a").insert("bb");
//! assert_eq!(by_length.list(), vec!["a", "bb", "ccc"]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::ops::{Deref, DerefMut};

use crate::Set;

// =============================================================================
// Comparator
// =============================================================================

/// Imposes a total order on values of type `T`.
///
/// Used only to order enumeration output; it never affects membership.
/// Closures of shape `Fn(&T, &T) -> Ordering` are comparators.
pub trait Comparator<T: ?Sized> {
    /// Compares `left` with `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// Orders values by their [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Orders values by the reverse of their [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder;

impl<T: Ord + ?Sized> Comparator<T> for ReverseOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        right.cmp(left)
    }
}

// =============================================================================
// OrderedSet Definition
// =============================================================================

/// A [`Set`] whose enumeration order is fixed by a comparator.
#[derive(Clone)]
pub struct OrderedSet<T, C = NaturalOrder> {
    set: Set<T>,
    comparator: C,
}

impl<T> OrderedSet<T, NaturalOrder> {
    /// Creates an empty set ordered by `T`'s natural order.
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> OrderedSet<T, C> {
    /// Creates an empty set ordered by `comparator`.
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self::from_set(Set::new(), comparator)
    }

    /// Wraps an existing set.
    #[must_use]
    pub const fn from_set(set: Set<T>, comparator: C) -> Self {
        Self { set, comparator }
    }

    /// Returns the comparator.
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the underlying set.
    #[must_use]
    pub const fn as_set(&self) -> &Set<T> {
        &self.set
    }

    /// Unwraps into the underlying set, dropping the comparator.
    #[must_use]
    pub fn into_set(self) -> Set<T> {
        self.set
    }
}

impl<T, C: Comparator<T>> OrderedSet<T, C> {
    /// Returns references to all elements in comparator order.
    #[must_use]
    pub fn sorted_refs(&self) -> Vec<&T> {
        let mut elements: Vec<&T> = self.set.iter().collect();
        elements.sort_by(|left, right| self.comparator.compare(left, right));
        elements
    }
}

impl<T: Clone, C: Comparator<T>> OrderedSet<T, C> {
    /// Returns all elements in comparator order.
    ///
    /// The result is deterministic for a given content and comparator.
    #[must_use]
    pub fn list(&self) -> Vec<T> {
        self.sorted_refs().into_iter().cloned().collect()
    }
}

impl<T: Hash + Eq + Clone, C: Clone> OrderedSet<T, C> {
    /// [`Set::union`], keeping this set's comparator.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.rewrap(self.set.union(&other.set))
    }

    /// [`Set::intersection`], keeping this set's comparator.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.rewrap(self.set.intersection(&other.set))
    }

    /// [`Set::difference`], keeping this set's comparator.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.rewrap(self.set.difference(&other.set))
    }

    fn rewrap(&self, set: Set<T>) -> Self {
        Self::from_set(set, self.comparator.clone())
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, C> Deref for OrderedSet<T, C> {
    type Target = Set<T>;

    fn deref(&self) -> &Set<T> {
        &self.set
    }
}

impl<T, C> DerefMut for OrderedSet<T, C> {
    fn deref_mut(&mut self) -> &mut Set<T> {
        &mut self.set
    }
}

impl<T, C: Default> Default for OrderedSet<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Hash + Eq, C> PartialEq for OrderedSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.set.equal(&other.set)
    }
}

impl<T: Hash + Eq, C> Eq for OrderedSet<T, C> {}

impl<T: fmt::Debug, C: Comparator<T>> fmt::Debug for OrderedSet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.sorted_refs()).finish()
    }
}

impl<T: Hash + Eq, C: Default> FromIterator<T> for OrderedSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_set(iter.into_iter().collect(), C::default())
    }
}

impl<T: Hash + Eq, C> Extend<T> for OrderedSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.set.insert_all(iter);
    }
}
