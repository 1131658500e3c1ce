//! Non-emptiness predicates used to guard arguments.

use crate::{error::Result, Error, Value};

/// Extra emptiness rule applied on top of the absent/null check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyCheck {
    /// Only absent and null values are empty
    #[default]
    Presence,
    /// The value must be a list; an empty list is empty
    List,
    /// The value must be a string; an empty string is empty
    String,
}

/// Returns `Ok(false)` for empty values, `Ok(true)` otherwise.
///
/// Fails when `check` assumes a shape the value does not have.
pub fn is_non_empty(value: Option<&Value>, check: EmptyCheck) -> Result<bool> {
    let value = match value {
        None | Some(Value::Null) => return Ok(false),
        Some(v) => v,
    };

    match (check, value) {
        (EmptyCheck::Presence, _) => Ok(true),
        (EmptyCheck::List, Value::List(items)) => Ok(!items.is_empty()),
        (EmptyCheck::List, other) => Err(Error::ListCheckOnNonList {
            got: other.type_name().to_string(),
        }),
        (EmptyCheck::String, Value::String(s)) => Ok(!s.is_empty()),
        (EmptyCheck::String, other) => Err(Error::StringCheckOnNonString {
            got: other.type_name().to_string(),
        }),
    }
}

/// Like [`is_non_empty`], but an empty value is an [`Error::EmptyValue`]
/// naming the offending argument.
pub fn require_non_empty(name: &str, value: Option<&Value>, check: EmptyCheck) -> Result<()> {
    if is_non_empty(value, check)? {
        Ok(())
    } else {
        Err(Error::EmptyValue {
            name: name.to_string(),
        })
    }
}

/// String shorthand for [`require_non_empty`] with [`EmptyCheck::String`].
pub fn require_non_empty_str(name: &str, value: &str) -> Result<()> {
    require_non_empty(name, Some(&Value::from(value)), EmptyCheck::String)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_null_are_empty() {
        assert_eq!(is_non_empty(None, EmptyCheck::Presence), Ok(false));
        assert_eq!(is_non_empty(Some(&Value::Null), EmptyCheck::List), Ok(false));
        assert_eq!(is_non_empty(Some(&Value::Null), EmptyCheck::String), Ok(false));
    }

    #[test]
    fn presence_accepts_empty_containers() {
        assert_eq!(
            is_non_empty(Some(&Value::List(vec![])), EmptyCheck::Presence),
            Ok(true)
        );
        assert_eq!(is_non_empty(Some(&Value::from("")), EmptyCheck::Presence), Ok(true));
        assert_eq!(is_non_empty(Some(&Value::from(0)), EmptyCheck::Presence), Ok(true));
    }

    #[test]
    fn list_check() {
        assert_eq!(
            is_non_empty(Some(&Value::List(vec![])), EmptyCheck::List),
            Ok(false)
        );
        assert_eq!(
            is_non_empty(Some(&Value::list([1])), EmptyCheck::List),
            Ok(true)
        );
        assert_eq!(
            is_non_empty(Some(&Value::from("abc")), EmptyCheck::List),
            Err(Error::ListCheckOnNonList {
                got: "String".into()
            })
        );
    }

    #[test]
    fn string_check() {
        assert_eq!(is_non_empty(Some(&Value::from("")), EmptyCheck::String), Ok(false));
        assert_eq!(is_non_empty(Some(&Value::from("x")), EmptyCheck::String), Ok(true));
        assert!(matches!(
            is_non_empty(Some(&Value::list([1])), EmptyCheck::String),
            Err(Error::StringCheckOnNonString { got }) if got == "List"
        ));
    }

    #[test]
    fn require_names_the_argument() {
        let result = require_non_empty("items", Some(&Value::List(vec![])), EmptyCheck::List);
        assert_eq!(
            result,
            Err(Error::EmptyValue {
                name: "items".into()
            })
        );
        assert!(require_non_empty_str("name", "Alice").is_ok());
    }
}
