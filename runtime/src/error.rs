//! Errors shared by generated code.

use thiserror::Error;

/// Error returned when parsing a generated enumeration from a payload value
/// that is not one of the enumeration's values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{value}` is not a value of {enum_name}")]
pub struct InvalidEnumValue {
    /// Name of the generated enumeration.
    pub enum_name: &'static str,
    /// The rejected input.
    pub value: String,
}

impl InvalidEnumValue {
    /// Creates the error for a rejected input.
    #[must_use]
    pub fn new(enum_name: &'static str, value: impl Into<String>) -> Self {
        Self {
            enum_name,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_enum_and_the_input() {
        let err = InvalidEnumValue::new("TrafficLight", "purple");
        assert_eq!(err.to_string(), "`purple` is not a value of TrafficLight");
    }
}
