//! # keyset
//!
//! Generic hash-backed sets with a complete set algebra.
//!
//! ## Overview
//!
//! - **[`Set`]**: unordered, duplicate-free collection of `Hash + Eq` elements
//! - **Algebra**: union, intersection, difference, symmetric difference, merge
//! - **Diffs**: [`Diff`] (added / removed / remained) and [`Changes`]
//!   (added / removed) between a baseline set and a new one
//! - **[`OrderedSet`]**: a set whose listing order comes from a [`Comparator`]
//! - **[`Value`]**: a closed tagged variant for heterogeneous elements
//! - **Aliases**: [`I32Set`], [`StringSet`], [`ByteSet`], ...
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` / `Deserialize` for [`Set`] and [`Value`]
//! - `fxhash`: hash with `rustc-hash`
//! - `ahash`: hash with `ahash` (takes precedence over `fxhash`)
//!
//! ## Example
//!
//! ```rust
//! use keyset::prelude::*;
//!
//! let a = set![1, 2, 3, 4];
//! let b = set![3, 4, 5, 6];
//!
//! assert_eq!(a.intersection(&b).list(), vec![3, 4]);
//! assert_eq!(a.union(&b).list(), vec![1, 2, 3, 4, 5, 6]);
//! assert!(a.intersection(&b).is_subset(&a));
//! ```
//!
//! ## Thread Safety
//!
//! Sets carry no internal synchronization. A `Set<T>` is `Send` and `Sync`
//! whenever `T` is; sharing one between threads for mutation needs an
//! external lock.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Sets are maps to the unit marker.
#![allow(clippy::zero_sized_map_values)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use keyset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set;
    pub use crate::{Changes, Comparator, Diff, NaturalOrder, OrderedSet, ReverseOrder, Set};
}

mod aliases;
mod error;
mod hashed;
mod hasher;
mod ordered;
mod value;

pub use aliases::{
    ByteSet, I8Set, I16Set, I32Set, I64Set, IntSet, StringSet, U8Set, U16Set, U32Set, U64Set,
    UintSet,
};
pub use error::NotAMappingError;
pub use hashed::{Changes, Diff, IntoIter, Iter, Set};
pub use hasher::DefaultBuildHasher;
pub use ordered::{Comparator, NaturalOrder, OrderedSet, ReverseOrder};
pub use value::Value;
