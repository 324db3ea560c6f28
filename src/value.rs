//! Heterogeneous set elements as a closed tagged variant.
//!
//! [`Value`] lets one [`Set`] hold elements of several primitive kinds while
//! keeping `Hash`, `Eq` and a total `Ord`. Sorting ranks variants in
//! declaration order first and payloads second, so `Set<Value>::list` is
//! deterministic.
//!
//! ```rust
//! use keyset::{Set, Value};
//!
//! let mut set: Set<Value> = Set::new();
//! set.insert(Value::from("b")).insert(Value::from(2_i64)).insert(Value::from(true));
//! assert_eq!(
//!     set.list(),
//!     vec![Value::Bool(true), Value::Int(2), Value::Str("b".to_string())]
//! );
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::{NotAMappingError, Set};

/// A dynamically typed, hashable, totally ordered value.
///
/// Floating-point payloads are not representable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    UInt(u64),
    /// A UTF-8 string.
    Str(String),
    /// A byte string.
    Bytes(Vec<u8>),
    /// An ordered sequence of values.
    List(Vec<Self>),
    /// A mapping between values, ordered by key.
    ///
    /// Serializes as a sequence of `[key, value]` pairs so that non-string
    /// keys survive formats like JSON.
    #[cfg_attr(feature = "serde", serde(with = "map_entries"))]
    Map(BTreeMap<Self, Self>),
}

impl Value {
    /// Returns a lowercase name for the variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::UInt(_) => "uint",
            Self::Str(_) => "str",
            Self::Bytes(_) => "bytes",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }
}

macro_rules! impl_from_integer {
    ($variant:ident, $wide:ty; $($source:ty),+) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Self::$variant(<$wide>::from(value))
                }
            }
        )+
    };
}

impl_from_integer!(Int, i64; i8, i16, i32, i64);
impl_from_integer!(UInt, u64; u8, u16, u32, u64);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::List(value)
    }
}

impl From<BTreeMap<Value, Value>> for Value {
    fn from(value: BTreeMap<Self, Self>) -> Self {
        Self::Map(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::UInt(value) => write!(formatter, "{value}"),
            Self::Str(value) => write!(formatter, "{value:?}"),
            Self::Bytes(value) => {
                write!(formatter, "b\"")?;
                for byte in value {
                    write!(formatter, "\\x{byte:02x}")?;
                }
                write!(formatter, "\"")
            }
            Self::List(values) => {
                write!(formatter, "[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{value}")?;
                }
                write!(formatter, "]")
            }
            Self::Map(entries) => {
                write!(formatter, "{{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{key}: {value}")?;
                }
                write!(formatter, "}}")
            }
        }
    }
}

#[cfg(feature = "serde")]
mod map_entries {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serializer};

    use super::Value;

    pub fn serialize<S>(
        entries: &BTreeMap<Value, Value>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(entries)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<Value, Value>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pairs = Vec::<(Value, Value)>::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}

// =============================================================================
// Seeding Sets From Map Values
// =============================================================================

impl Set<Value> {
    /// Builds a set from the keys of a `Value::Map`, discarding the values.
    ///
    /// # Errors
    ///
    /// Returns [`NotAMappingError`] if `value` is any other variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use keyset::{Set, Value};
    ///
    /// let map = Value::Map(BTreeMap::from([
    ///     (Value::from(1_i64), Value::from("one")),
    ///     (Value::from(2_i64), Value::from("two")),
    /// ]));
    /// let set = Set::<Value>::try_from_mapping(map).unwrap();
    /// assert_eq!(set.list(), vec![Value::Int(1), Value::Int(2)]);
    ///
    /// let error = Set::<Value>::try_from_mapping(Value::from(5_i64)).unwrap_err();
    /// assert_eq!(error.found, "int");
    /// ```
    pub fn try_from_mapping(value: Value) -> Result<Self, NotAMappingError> {
        match value {
            Value::Map(entries) => Ok(Self::from_map(entries)),
            other => Err(NotAMappingError { found: other.kind() }),
        }
    }

    /// Builds a set from the keys of a `Value::Map`.
    ///
    /// Passing anything but a map is a programming error.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a `Value::Map`.
    #[must_use]
    pub fn from_mapping(value: Value) -> Self {
        match Self::try_from_mapping(value) {
            Ok(set) => set,
            Err(error) => {
                log::error!("from_mapping: {error}");
                panic!("{error}");
            }
        }
    }
}
