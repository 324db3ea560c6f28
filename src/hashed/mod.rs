//! Hash-backed sets and their algebra.
//!
//! - [`Set`]: unordered collection of unique elements
//! - [`Diff`] / [`Changes`]: results of comparing a baseline set to a new one
//! - [`Iter`] / [`IntoIter`]: lazy traversal in unspecified order
//!
//! # Mutation
//!
//! Mutating methods (`insert`, `remove`, `merge`, `pop`, ...) take `&mut self`
//! and return `&mut Self` where chaining makes sense. Methods that produce a
//! set (`union`, `intersection`, `difference`, `clone`, ...) take `&self` and
//! return an independent value.
//!
//! # Examples
//!
//! ```rust
//! use keyset::{Set, set};
//!
//! let mut active = set!["api", "worker"];
//! active.insert("scheduler").remove("worker");
//!
//! let wanted = set!["api", "scheduler", "mailer"];
//! let changes = active.diff_vary(&wanted);
//! assert_eq!(changes.added.list(), vec!["mailer"]);
//! assert!(changes.removed.is_empty());
//! ```

mod algebra;
mod container;
mod iter;

pub use algebra::{Changes, Diff};
pub use container::Set;
pub use iter::{IntoIter, Iter};

/// Creates a [`Set`] from a list of elements.
///
/// ```rust
/// use keyset::{Set, set};
///
/// let numbers = set![3, 1, 2, 3];
/// assert_eq!(numbers.list(), vec![1, 2, 3]);
///
/// let empty: Set<u8> = set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Set::from([$($item),+])
    };
}
