//! Named set types for common element types.
//!
//! Each alias is exactly `Set<element>`; every operation comes from the
//! generic [`Set`].
//!
//! ```rust
//! use keyset::{I64Set, StringSet};
//!
//! let ids = I64Set::from([3, 1, 2]);
//! assert_eq!(ids.list(), vec![1, 2, 3]);
//!
//! let mut names = StringSet::new();
//! names.insert("ada".to_string());
//! assert!(names.contains("ada"));
//! ```

use crate::Set;

macro_rules! define_set_aliases {
    ($($(#[$meta:meta])* $name:ident => $element:ty;)*) => {
        paste::paste! {
            $(
                $(#[$meta])*
                pub type [<$name Set>] = Set<$element>;
            )*
        }
    };
}

define_set_aliases! {
    /// A set of `i8`.
    I8 => i8;
    /// A set of `i16`.
    I16 => i16;
    /// A set of `i32`.
    I32 => i32;
    /// A set of `i64`.
    I64 => i64;
    /// A set of `isize`.
    Int => isize;
    /// A set of `u8`.
    U8 => u8;
    /// A set of `u16`.
    U16 => u16;
    /// A set of `u32`.
    U32 => u32;
    /// A set of `u64`.
    U64 => u64;
    /// A set of `usize`.
    Uint => usize;
    /// A set of owned strings.
    String => std::string::String;
}

/// A set of bytes.
pub type ByteSet = U8Set;
