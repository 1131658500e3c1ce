//! Locale-aware string ordering.

use crate::{error::Result, validate};
use feruca::Collator;
use std::cmp::Ordering;

/// Compare two non-empty strings using the Unicode Collation Algorithm with
/// the CLDR root tailoring.
///
/// Accents are a secondary difference and case a tertiary one, so `"é"`
/// sorts between `"e"` and `"f"`, and `"a"` before `"A"`. Strings the
/// collator considers equal fall back to code point order.
/// Cast the result with `as i8` for a `-1`/`0`/`1` integer.
///
/// # Errors
///
/// [`Error::EmptyValue`](crate::Error::EmptyValue) when either string is empty.
pub fn compare_strings(left: &str, right: &str) -> Result<Ordering> {
    validate::require_non_empty_str("left", left)?;
    validate::require_non_empty_str("right", right)?;

    let mut collator = Collator::default();
    Ok(collator
        .collate(left, right)
        .then_with(|| left.cmp(right)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn empty_operands_fail() {
        assert_eq!(
            compare_strings("", "b"),
            Err(Error::EmptyValue {
                name: "left".into()
            })
        );
        assert_eq!(
            compare_strings("a", ""),
            Err(Error::EmptyValue {
                name: "right".into()
            })
        );
    }

    #[test]
    fn basic_ordering() {
        assert_eq!(compare_strings("a", "b"), Ok(Ordering::Less));
        assert!((compare_strings("a", "b").unwrap() as i8) < 0);
        assert_eq!(compare_strings("b", "a"), Ok(Ordering::Greater));
        assert_eq!(compare_strings("same", "same"), Ok(Ordering::Equal));
    }

    #[test]
    fn case_is_tertiary() {
        assert_eq!(compare_strings("a", "B"), Ok(Ordering::Less));
        assert_eq!(compare_strings("B", "c"), Ok(Ordering::Less));
        assert_eq!(compare_strings("apple", "Apple"), Ok(Ordering::Less));
        assert_eq!(compare_strings("Apple", "apple"), Ok(Ordering::Greater));
        assert_eq!(compare_strings("Zebra", "apple"), Ok(Ordering::Greater));
    }

    #[test]
    fn accents_sort_with_their_base_letter() {
        assert_eq!(compare_strings("é", "f"), Ok(Ordering::Less));
        assert_eq!(compare_strings("résumé", "rz"), Ok(Ordering::Less));
        assert_eq!(compare_strings("e", "é"), Ok(Ordering::Less));
        assert_eq!(compare_strings("resume", "résumé"), Ok(Ordering::Less));
        assert_eq!(compare_strings("Ärger", "Zorn"), Ok(Ordering::Less));
    }

    #[test]
    fn prefixes_sort_first() {
        assert_eq!(compare_strings("app", "apple"), Ok(Ordering::Less));
        assert_eq!(compare_strings("App", "apple"), Ok(Ordering::Less));
    }
}
