//! Hasher selection for [`Set`](crate::Set).
//!
//! The hash builder used by every set is chosen at compile time through
//! feature flags:
//!
//! | Feature  | Hash builder                                   |
//! |----------|------------------------------------------------|
//! | (none)   | `std::collections::hash_map::RandomState`      |
//! | `fxhash` | `rustc_hash::FxBuildHasher`                    |
//! | `ahash`  | `ahash::RandomState` (wins over `fxhash`)      |
//!
//! Set semantics never depend on the selection. Only iteration order and
//! throughput change.

/// The hash builder backing [`Set`](crate::Set).
#[cfg(feature = "ahash")]
pub type DefaultBuildHasher = ahash::RandomState;

/// The hash builder backing [`Set`](crate::Set).
#[cfg(all(feature = "fxhash", not(feature = "ahash")))]
pub type DefaultBuildHasher = rustc_hash::FxBuildHasher;

/// The hash builder backing [`Set`](crate::Set).
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultBuildHasher = std::collections::hash_map::RandomState;

/// Storage map type: element to zero-size marker.
pub(crate) type KeyMap<T> = std::collections::HashMap<T, (), DefaultBuildHasher>;

/// Creates an empty key map with room for at least `capacity` elements.
#[inline]
pub(crate) fn key_map_with_capacity<T>(capacity: usize) -> KeyMap<T> {
    KeyMap::with_capacity_and_hasher(capacity, DefaultBuildHasher::default())
}
