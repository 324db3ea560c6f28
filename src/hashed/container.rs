//! The [`Set`] container: construction, membership, relations, enumeration.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;

use super::iter::{IntoIter, Iter};
use crate::hasher::{KeyMap, key_map_with_capacity};

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered collection of unique elements backed by a hash map.
///
/// `Set<T>` maps each element to a zero-size marker. Mutating operations take
/// `&mut self` and return `&mut Self` so calls can be chained; operations
/// that produce a new set take `&self` and never share storage with their
/// inputs.
///
/// # Time Complexity
///
/// | Operation       | Complexity            |
/// |-----------------|-----------------------|
/// | `insert`        | O(1) amortized        |
/// | `remove`        | O(1)                  |
/// | `contains`      | O(1)                  |
/// | `pop`           | O(1) amortized        |
/// | `union`         | O(n + m)              |
/// | `intersection`  | O(min(n, m))          |
/// | `difference`    | O(n)                  |
/// | `diff`          | O(n + m)              |
/// | `equal`         | O(m), O(1) if n != m  |
/// | `list`          | O(n log n)            |
///
/// # Examples
///
/// ```rust
/// use keyset::Set;
///
/// let mut set = Set::new();
/// set.insert(1).insert(2).insert(2);
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&1));
/// assert_eq!(set.list(), vec![1, 2]);
/// ```
#[derive(Clone)]
pub struct Set<T> {
    pub(super) inner: KeyMap<T>,
}

impl<T> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: key_map_with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes every element, keeping the allocated storage.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns a lazy iterator over the elements in unspecified order.
    ///
    /// Each call starts a fresh traversal. Abandoning the iterator early has no
    /// effect on the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let set = Set::from([1, 2, 3]);
    /// let total: i32 = set.iter().sum();
    /// assert_eq!(total, 6);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.inner.keys(),
        }
    }

    /// Visits every element in unspecified order until `visit` returns `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let set = Set::from([1, 2, 3, 4]);
    /// let mut visited = 0;
    /// set.each(|_| {
    ///     visited += 1;
    ///     visited < 2
    /// });
    /// assert_eq!(visited, 2);
    /// ```
    pub fn each<F>(&self, mut visit: F)
    where
        F: FnMut(&T) -> bool,
    {
        for element in self.inner.keys() {
            if !visit(element) {
                break;
            }
        }
    }
}

impl<T: Hash + Eq> Set<T> {
    /// Builds a set from the keys of a mapping, discarding the values.
    ///
    /// Accepts anything that iterates `(key, value)` pairs by value, such as
    /// an owned `HashMap` or `BTreeMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use keyset::Set;
    ///
    /// let map = BTreeMap::from([(1, "one"), (2, "two")]);
    /// let set = Set::from_map(map);
    /// assert_eq!(set.list(), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn from_map<V, M>(map: M) -> Self
    where
        M: IntoIterator<Item = (T, V)>,
    {
        map.into_iter().map(|(key, _)| key).collect()
    }

    /// Returns `true` if the set contains `item`.
    ///
    /// The item may be any borrowed form of the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let set = Set::from(["hello".to_string()]);
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(item)
    }

    /// Returns `true` if every item is contained. Vacuously `true` for no items.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let set = Set::from([1, 2, 3]);
    /// assert!(set.contains_all(&[1, 2]));
    /// assert!(!set.contains_all(&[1, 4]));
    ///
    /// let none: [i32; 0] = [];
    /// assert!(set.contains_all(&none));
    /// ```
    #[must_use]
    pub fn contains_all<'a, Q, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        items.into_iter().all(|item| self.contains(item))
    }

    /// Returns `true` if at least one item is contained. `false` for no items.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let set = Set::from([1, 2, 3]);
    /// assert!(set.contains_any(&[4, 3]));
    /// assert!(!set.contains_any(&[4, 5]));
    ///
    /// let none: [i32; 0] = [];
    /// assert!(!set.contains_any(&none));
    /// ```
    #[must_use]
    pub fn contains_any<'a, Q, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        items.into_iter().any(|item| self.contains(item))
    }

    /// Inserts `item`. Inserting an existing element leaves membership unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let mut set = Set::new();
    /// set.insert("a").insert("b").insert("a");
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn insert(&mut self, item: T) -> &mut Self {
        self.inner.insert(item, ());
        self
    }

    /// Inserts every item produced by `items`.
    pub fn insert_all<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.len();
        self.inner.extend(items.into_iter().map(|item| (item, ())));
        log::trace!("insert_all: {before} -> {} elements", self.len());
        self
    }

    /// Removes `item` if present. Absent items are ignored.
    pub fn remove<Q>(&mut self, item: &Q) -> &mut Self
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(item);
        self
    }

    /// Removes every item produced by `items`. Absent items are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let mut set = Set::from([1, 2, 3, 4]);
    /// set.remove_all(&[1, 3, 9]);
    /// assert_eq!(set.list(), vec![2, 4]);
    /// ```
    pub fn remove_all<'a, Q, I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        let before = self.len();
        for item in items {
            self.inner.remove(item);
        }
        log::trace!("remove_all: {before} -> {} elements", self.len());
        self
    }

    /// Removes and returns an arbitrary element, or `None` if the set is empty.
    ///
    /// Which element is chosen is unspecified and may differ between calls on
    /// sets with identical contents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let mut set = Set::from([1, 2, 4]);
    /// let popped = set.pop().unwrap();
    /// assert!([1, 2, 4].contains(&popped));
    /// assert_eq!(set.len(), 2);
    ///
    /// let mut empty: Set<i32> = Set::new();
    /// assert_eq!(empty.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        let mut taken = false;
        let popped = self
            .inner
            .extract_if(|_, _| !std::mem::replace(&mut taken, true))
            .next()
            .map(|(element, ())| element);
        if popped.is_none() {
            log::trace!("pop: set is empty");
        }
        popped
    }

    /// Returns `true` if every element of `self` is in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let small = Set::from([1, 2]);
    /// let large = Set::from([1, 2, 3]);
    /// assert!(small.is_subset(&large));
    /// assert!(!large.is_subset(&small));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }
        self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if both sets have identical membership.
    ///
    /// Sets of different size are rejected without scanning.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let left = Set::from([1, 2, 3]);
    /// let right = Set::from([3, 2, 1]);
    /// assert!(left.equal(&right));
    /// assert!(!left.equal(&Set::from([1, 2])));
    /// ```
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_superset(other)
    }
}

impl<T: Hash + Eq + Clone> Set<T> {
    /// Builds a set by copying the keys out of a borrowed mapping.
    ///
    /// The source mapping is left untouched and the new set shares no storage
    /// with it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use keyset::Set;
    ///
    /// let map = HashMap::from([("a".to_string(), 1), ("b".to_string(), 2)]);
    /// let set = Set::from_map_keys(&map);
    /// assert_eq!(set.list(), vec!["a".to_string(), "b".to_string()]);
    /// assert_eq!(map.len(), 2);
    /// ```
    #[must_use]
    pub fn from_map_keys<'a, V, M>(map: M) -> Self
    where
        M: IntoIterator<Item = (&'a T, &'a V)>,
        T: 'a,
        V: 'a,
    {
        map.into_iter().map(|(key, _)| key.clone()).collect()
    }

    /// Returns all elements in unspecified order.
    #[must_use]
    pub fn unsorted_list(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Returns all elements sorted by `compare`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let set = Set::from([3, 1, 2]);
    /// assert_eq!(set.list_by(|left, right| right.cmp(left)), vec![3, 2, 1]);
    /// ```
    #[must_use]
    pub fn list_by<F>(&self, mut compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut elements = self.unsorted_list();
        elements.sort_by(|left, right| compare(left, right));
        elements
    }
}

impl<T: Hash + Eq + Clone + Ord> Set<T> {
    /// Returns all elements sorted by their natural order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let set = Set::from([13, 12, 11, 1]);
    /// assert_eq!(set.list(), vec![1, 11, 12, 13]);
    /// ```
    #[must_use]
    pub fn list(&self) -> Vec<T> {
        let mut elements = self.unsorted_list();
        elements.sort_unstable();
        elements
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: Hash + Eq> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        set.insert_all(iter);
        set
    }
}

impl<T: Hash + Eq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a, T: Hash + Eq + Copy + 'a> Extend<&'a T> for Set<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.insert_all(iter.into_iter().copied());
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Hash + Eq> From<Vec<T>> for Set<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.inner.into_keys(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Set<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Set<String>: Send, Sync, Clone, Eq);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Set<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SetVisitor<T>
where
    T: serde::Deserialize<'de> + Hash + Eq,
{
    type Value = Set<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of set elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // size_hint comes from untrusted input, so cap the preallocation.
        let mut set = Set::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(element) = seq.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Set<T>
where
    T: serde::Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
