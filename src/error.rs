//! Error types for precondition checks.
//!
//! Set operations are total and never fail. The single failure class is a
//! caller handing a non-mapping [`Value`](crate::Value) to a constructor that
//! expects the keys of a mapping.

/// Represents an attempt to seed a set from a [`Value`](crate::Value) that is
/// not a `Value::Map`.
///
/// # Examples
///
/// ```rust
/// use keyset::NotAMappingError;
///
/// let error = NotAMappingError { found: "list" };
/// assert_eq!(
///     format!("{}", error),
///     "expected a map value to seed the set, found list"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotAMappingError {
    /// The kind of value that was supplied instead of a map.
    pub found: &'static str,
}

impl std::fmt::Display for NotAMappingError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "expected a map value to seed the set, found {}",
            self.found
        )
    }
}

impl std::error::Error for NotAMappingError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_not_a_mapping_error_display() {
        let error = NotAMappingError { found: "int" };
        assert_eq!(
            error.to_string(),
            "expected a map value to seed the set, found int"
        );
    }

    #[rstest]
    fn test_not_a_mapping_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(NotAMappingError { found: "str" });
        assert!(error.source().is_none());
    }
}
