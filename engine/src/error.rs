//! Error types for the diff engine.

use thiserror::Error;

/// All possible errors from the diff engine.
///
/// Every variant is a validation failure: comparison itself is total and
/// never fails once its arguments have been accepted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("'{name}' cannot be empty")]
    EmptyValue { name: String },

    #[error("list emptiness check requested, but the value is of type {got}")]
    ListCheckOnNonList { got: String },

    #[error("string emptiness check requested, but the value is of type {got}")]
    StringCheckOnNonString { got: String },

    #[error("invalid identity keys: {0}")]
    InvalidIdentityKeys(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::EmptyValue {
            name: "left".into(),
        };
        assert_eq!(err.to_string(), "'left' cannot be empty");

        let err = Error::ListCheckOnNonList {
            got: "String".into(),
        };
        assert_eq!(
            err.to_string(),
            "list emptiness check requested, but the value is of type String"
        );

        let err = Error::InvalidIdentityKeys("no candidate fields".into());
        assert_eq!(
            err.to_string(),
            "invalid identity keys: no candidate fields"
        );
    }
}
