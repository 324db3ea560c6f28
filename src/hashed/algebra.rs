//! Set algebra over [`Set`]: union, intersection, difference, diffs, merge.
//!
//! Every operation that builds a result comes in two shapes. The plain form
//! returns a new [`Set`]; the `*_list` form returns a `Vec<T>` holding the
//! same elements in unspecified order.
//!
//! ```rust
//! use keyset::Set;
//!
//! let old = Set::from([1, 3, 5, 7]);
//! let new = Set::from([3, 4, 5, 6]);
//!
//! let diff = old.diff(&new);
//! assert_eq!(diff.added, Set::from([4, 6]));
//! assert_eq!(diff.removed, Set::from([1, 7]));
//! assert_eq!(diff.remained, Set::from([3, 5]));
//! ```

use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitOrAssign, BitXor, Sub, SubAssign};

use super::Set;

// =============================================================================
// Diff Results
// =============================================================================

/// Three-way partition of two sets, relative to a baseline.
///
/// Produced by [`Set::diff`] and [`Set::diff_list`]. With `old.diff(&new)`:
/// `removed` holds elements only in `old`, `added` holds elements only in
/// `new`, and `remained` holds elements in both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Diff<C> {
    /// Elements present only in the new state.
    pub added: C,
    /// Elements present only in the baseline.
    pub removed: C,
    /// Elements present in both.
    pub remained: C,
}

/// Two-way change set: [`Diff`] without the unchanged elements.
///
/// Produced by [`Set::diff_vary`] and [`Set::diff_vary_list`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Changes<C> {
    /// Elements present only in the new state.
    pub added: C,
    /// Elements present only in the baseline.
    pub removed: C,
}

impl<C> From<Diff<C>> for Changes<C> {
    fn from(diff: Diff<C>) -> Self {
        Self {
            added: diff.added,
            removed: diff.removed,
        }
    }
}

impl<T> Changes<Set<T>> {
    /// Returns `true` if nothing was added or removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

impl<T> Diff<Set<T>> {
    /// Returns `true` if nothing was added or removed.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

// =============================================================================
// Set-Returning Operations
// =============================================================================

impl<T: Hash + Eq + Clone> Set<T> {
    /// Returns a new set with every element of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let left = Set::from([1, 2, 3, 4]);
    /// let right = Set::from([3, 4, 5, 6]);
    /// assert_eq!(left.union(&right).list(), vec![1, 2, 3, 4, 5, 6]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let (larger, smaller) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut result = Self::with_capacity(self.len() + other.len());
        result.insert_all(larger.iter().cloned());
        result.merge(smaller);
        result
    }

    /// Returns a new set with the elements present in both `self` and `other`.
    ///
    /// Walks the smaller operand and probes the larger one, so the cost is
    /// O(min(n, m)) regardless of which side is the receiver.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let left = Set::from([1, 2, 3, 4]);
    /// let right = Set::from([3, 4, 5, 6]);
    /// assert_eq!(left.intersection(&right).list(), vec![3, 4]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (smaller, larger) = smaller_first(self, other);
        let mut result = Self::with_capacity(smaller.len());
        result.insert_all(
            smaller
                .iter()
                .filter(|element| larger.contains(*element))
                .cloned(),
        );
        result
    }

    /// Returns a new set with the elements of `self` that are not in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let left = Set::from([1, 2, 3]);
    /// let right = Set::from([1, 2, 4, 5]);
    /// assert_eq!(left.difference(&right).list(), vec![3]);
    /// assert_eq!(right.difference(&left).list(), vec![4, 5]);
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len());
        result.insert_all(
            self.iter()
                .filter(|element| !other.contains(*element))
                .cloned(),
        );
        result
    }

    /// Returns a new set with the elements in exactly one of the operands.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.difference(other);
        result.insert_all(
            other
                .iter()
                .filter(|element| !self.contains(*element))
                .cloned(),
        );
        result
    }

    /// Partitions `self` (the baseline) and `other` (the new state) into
    /// added, removed, and remained elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let desired = Set::from(["web", "db"]);
    /// let actual = Set::from(["web", "cache"]);
    ///
    /// let diff = actual.diff(&desired);
    /// assert_eq!(diff.added.list(), vec!["db"]);
    /// assert_eq!(diff.removed.list(), vec!["cache"]);
    /// assert_eq!(diff.remained.list(), vec!["web"]);
    /// ```
    #[must_use]
    pub fn diff(&self, other: &Self) -> Diff<Self> {
        let mut removed = Self::with_capacity(self.len());
        let mut remained = Self::with_capacity(self.len());
        for element in self {
            if other.contains(element) {
                remained.insert(element.clone());
            } else {
                removed.insert(element.clone());
            }
        }
        let added = other.difference(self);
        log::trace!(
            "diff: {} added, {} removed, {} remained",
            added.len(),
            removed.len(),
            remained.len()
        );
        Diff {
            added,
            removed,
            remained,
        }
    }

    /// Like [`Set::diff`] but skips collecting the unchanged elements.
    #[must_use]
    pub fn diff_vary(&self, other: &Self) -> Changes<Self> {
        Changes {
            added: other.difference(self),
            removed: self.difference(other),
        }
    }

    /// Adds every element of `other` to `self` in place.
    ///
    /// Unlike [`Set::union`] this reuses the receiver's storage. Elements
    /// already present are not cloned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let mut left = Set::from([1, 2]);
    /// left.merge(&Set::from([3, 4])).insert(5);
    /// assert_eq!(left.list(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn merge(&mut self, other: &Self) -> &mut Self {
        let before = self.len();
        for element in other {
            if !self.contains(element) {
                self.inner.insert(element.clone(), ());
            }
        }
        log::trace!(
            "merge: {} incoming, {before} -> {} elements",
            other.len(),
            self.len()
        );
        self
    }
}

impl<T: Hash + Eq> Set<T> {
    /// Returns `true` if the two sets share no element.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = smaller_first(self, other);
        !smaller.iter().any(|element| larger.contains(element))
    }
}

// =============================================================================
// Sequence-Returning Operations
// =============================================================================

impl<T: Hash + Eq + Clone> Set<T> {
    /// [`Set::union`] as a `Vec`. Each element appears exactly once.
    #[must_use]
    pub fn union_list(&self, other: &Self) -> Vec<T> {
        let mut result = Vec::with_capacity(self.len() + other.len());
        result.extend(self.iter().cloned());
        result.extend(
            other
                .iter()
                .filter(|element| !self.contains(*element))
                .cloned(),
        );
        result
    }

    /// [`Set::intersection`] as a `Vec`, with the same O(min(n, m)) walk.
    #[must_use]
    pub fn intersection_list(&self, other: &Self) -> Vec<T> {
        let (smaller, larger) = smaller_first(self, other);
        smaller
            .iter()
            .filter(|element| larger.contains(*element))
            .cloned()
            .collect()
    }

    /// [`Set::difference`] as a `Vec`.
    #[must_use]
    pub fn difference_list(&self, other: &Self) -> Vec<T> {
        self.iter()
            .filter(|element| !other.contains(*element))
            .cloned()
            .collect()
    }

    /// [`Set::symmetric_difference`] as a `Vec`.
    #[must_use]
    pub fn symmetric_difference_list(&self, other: &Self) -> Vec<T> {
        let mut result = self.difference_list(other);
        result.extend(other.difference_list(self));
        result
    }

    /// [`Set::diff`] with `Vec` partitions.
    #[must_use]
    pub fn diff_list(&self, other: &Self) -> Diff<Vec<T>> {
        let (remained, removed): (Vec<T>, Vec<T>) = self
            .iter()
            .cloned()
            .partition(|element| other.contains(element));
        Diff {
            added: other.difference_list(self),
            removed,
            remained,
        }
    }

    /// [`Set::diff_vary`] with `Vec` partitions.
    #[must_use]
    pub fn diff_vary_list(&self, other: &Self) -> Changes<Vec<T>> {
        Changes {
            added: other.difference_list(self),
            removed: self.difference_list(other),
        }
    }
}

/// Orders two sets so the first has no more elements than the second.
#[inline]
fn smaller_first<'a, T>(left: &'a Set<T>, right: &'a Set<T>) -> (&'a Set<T>, &'a Set<T>) {
    if left.len() <= right.len() {
        (left, right)
    } else {
        (right, left)
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<T: Hash + Eq + Clone> BitOr<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitor(self, rhs: &Set<T>) -> Set<T> {
        self.union(rhs)
    }
}

impl<T: Hash + Eq + Clone> BitAnd<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitand(self, rhs: &Set<T>) -> Set<T> {
        self.intersection(rhs)
    }
}

impl<T: Hash + Eq + Clone> Sub<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn sub(self, rhs: &Set<T>) -> Set<T> {
        self.difference(rhs)
    }
}

impl<T: Hash + Eq + Clone> BitXor<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitxor(self, rhs: &Set<T>) -> Set<T> {
        self.symmetric_difference(rhs)
    }
}

impl<T: Hash + Eq + Clone> BitOrAssign<&Set<T>> for Set<T> {
    fn bitor_assign(&mut self, rhs: &Self) {
        self.merge(rhs);
    }
}

impl<T: Hash + Eq> SubAssign<&Set<T>> for Set<T> {
    fn sub_assign(&mut self, rhs: &Self) {
        self.remove_all(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sorted(mut elements: Vec<i32>) -> Vec<i32> {
        elements.sort_unstable();
        elements
    }

    #[rstest]
    fn test_diff_partitions() {
        let old = Set::from([1, 3, 5, 7]);
        let new = Set::from([3, 4, 5, 6]);
        let diff = old.diff(&new);

        assert_eq!(diff.added.list(), vec![4, 6]);
        assert_eq!(diff.removed.list(), vec![1, 7]);
        assert_eq!(diff.remained.list(), vec![3, 5]);
        assert!(!diff.is_unchanged());
    }

    #[rstest]
    fn test_diff_of_equal_sets_is_unchanged() {
        let set = Set::from([1, 2]);
        let diff = set.diff(&set.clone());
        assert!(diff.is_unchanged());
        assert_eq!(diff.remained, set);
    }

    #[rstest]
    fn test_diff_vary_matches_diff() {
        let old = Set::from([1, 3, 5, 7]);
        let new = Set::from([3, 4, 5, 6]);
        assert_eq!(old.diff_vary(&new), Changes::from(old.diff(&new)));
    }

    #[rstest]
    fn test_changes_is_empty() {
        let set = Set::from([1]);
        assert!(set.diff_vary(&set).is_empty());
        assert!(!set.diff_vary(&Set::new()).is_empty());
    }

    #[rstest]
    fn test_diff_list_partitions() {
        let old = Set::from([1, 3, 5, 7]);
        let new = Set::from([3, 4, 5, 6]);
        let diff = old.diff_list(&new);

        assert_eq!(sorted(diff.added), vec![4, 6]);
        assert_eq!(sorted(diff.removed), vec![1, 7]);
        assert_eq!(sorted(diff.remained), vec![3, 5]);
    }

    #[rstest]
    fn test_diff_vary_list() {
        let old = Set::from([1, 3, 5, 7]);
        let new = Set::from([3, 4, 5, 6]);
        let changes = old.diff_vary_list(&new);

        assert_eq!(sorted(changes.added), vec![4, 6]);
        assert_eq!(sorted(changes.removed), vec![1, 7]);
    }

    #[rstest]
    fn test_union_list_has_no_duplicates() {
        let left = Set::from([1, 2, 3]);
        let right = Set::from([2, 3, 4]);
        assert_eq!(sorted(left.union_list(&right)), vec![1, 2, 3, 4]);
    }

    #[rstest]
    #[case(vec![1, 2, 3, 4], vec![3, 4, 5, 6], vec![3, 4])]
    #[case(vec![1], (0..1000).collect(), vec![1])]
    #[case((0..1000).collect(), vec![999, 5000], vec![999])]
    #[case(vec![], vec![1, 2], vec![])]
    fn test_intersection_list(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        let left = Set::from(left);
        let right = Set::from(right);
        assert_eq!(sorted(left.intersection_list(&right)), expected);
        assert_eq!(left.intersection(&right).list(), expected);
    }

    thread_local! {
        static HASH_CALLS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Counted(u32);

    impl Hash for Counted {
        fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
            HASH_CALLS.with(|calls| calls.set(calls.get() + 1));
            self.0.hash(state);
        }
    }

    fn hash_calls_during(operation: impl FnOnce()) -> usize {
        HASH_CALLS.with(|calls| calls.set(0));
        operation();
        HASH_CALLS.with(std::cell::Cell::get)
    }

    #[rstest]
    fn test_intersection_cost_tracks_smaller_operand() {
        let large: Set<Counted> = (0..10_000).map(Counted).collect();
        let small: Set<Counted> = [3, 7, 20_000, 30_000].into_iter().map(Counted).collect();

        let mut forward = Set::new();
        let mut backward = Set::new();
        let mut listed = Vec::new();
        let mut disjoint = true;

        assert!(hash_calls_during(|| forward = large.intersection(&small)) < 100);
        assert!(hash_calls_during(|| backward = small.intersection(&large)) < 100);
        assert!(hash_calls_during(|| listed = large.intersection_list(&small)) < 100);
        assert!(hash_calls_during(|| disjoint = large.is_disjoint(&small)) < 100);

        assert_eq!(forward.len(), 2);
        assert_eq!(forward, backward);
        assert_eq!(listed.len(), 2);
        assert!(!disjoint);
    }

    #[rstest]
    fn test_difference_list() {
        let left = Set::from([1, 2, 3]);
        let right = Set::from([1, 2, 4, 5]);
        assert_eq!(left.difference_list(&right), vec![3]);
        assert_eq!(sorted(right.difference_list(&left)), vec![4, 5]);
    }

    #[rstest]
    fn test_symmetric_difference() {
        let left = Set::from([1, 2, 3]);
        let right = Set::from([2, 3, 4]);
        assert_eq!(left.symmetric_difference(&right).list(), vec![1, 4]);
        assert_eq!(sorted(left.symmetric_difference_list(&right)), vec![1, 4]);
    }

    #[rstest]
    fn test_is_disjoint() {
        let left = Set::from([1, 2]);
        assert!(left.is_disjoint(&Set::from([3, 4])));
        assert!(!left.is_disjoint(&Set::from([2, 3])));
        assert!(Set::<i32>::new().is_disjoint(&Set::new()));
    }

    #[rstest]
    fn test_merge_mutates_receiver_only() {
        let mut left = Set::from([1, 2]);
        let right = Set::from([2, 3]);
        left.merge(&right);
        assert_eq!(left.list(), vec![1, 2, 3]);
        assert_eq!(right.list(), vec![2, 3]);
    }

    #[rstest]
    fn test_empty_boundaries() {
        let empty: Set<i32> = Set::new();
        let pair = Set::from([1, 2]);
        assert_eq!(empty.union(&pair), pair);
        assert!(empty.intersection(&pair).is_empty());
        assert!(empty.equal(&Set::new()));
    }

    #[rstest]
    fn test_operators() {
        let left = Set::from([1, 2, 3]);
        let right = Set::from([2, 3, 4]);

        assert_eq!((&left | &right).list(), vec![1, 2, 3, 4]);
        assert_eq!((&left & &right).list(), vec![2, 3]);
        assert_eq!((&left - &right).list(), vec![1]);
        assert_eq!((&left ^ &right).list(), vec![1, 4]);
    }

    #[rstest]
    fn test_assign_operators() {
        let mut set = Set::from([1, 2]);
        set |= &Set::from([3]);
        assert_eq!(set.list(), vec![1, 2, 3]);
        set -= &Set::from([1, 9]);
        assert_eq!(set.list(), vec![2, 3]);
    }
}
