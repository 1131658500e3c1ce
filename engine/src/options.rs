//! Comparison options.
//!
//! Defaults reproduce the engine's historical behavior: lists of records are
//! reconciled on `"id"`, only the old record's fields are enumerated, and
//! removed list elements produce no top-level change.

use crate::{error::Result, validate, Error, Value};
use serde::{Deserialize, Serialize};

/// Ordered candidate field names used to identify list elements.
///
/// The first candidate that is present and non-null on an element supplies
/// its key. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct IdentityKeys(Vec<String>);

impl IdentityKeys {
    /// Create identity keys from candidate field names, in priority order.
    pub fn new<S: Into<String>>(candidates: impl IntoIterator<Item = S>) -> Result<Self> {
        let candidates: Vec<String> = candidates.into_iter().map(Into::into).collect();
        if candidates.is_empty() {
            return Err(Error::InvalidIdentityKeys(
                "at least one candidate field is required".into(),
            ));
        }
        for name in &candidates {
            validate::require_non_empty_str("identity field", name)?;
        }
        Ok(Self(candidates))
    }

    /// `name` first, then its lowercase form when that differs.
    pub fn with_lowercase_fallback(name: &str) -> Result<Self> {
        let lower = name.to_lowercase();
        if lower == name {
            Self::new([name])
        } else {
            Self::new([name.to_string(), lower])
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.0
    }

    /// Key value of a list element. Non-record elements and records missing
    /// every candidate have no key and all fall into the same bucket.
    pub fn key_of<'v>(&self, item: &'v Value) -> Option<&'v Value> {
        let fields = item.as_record()?;
        self.0
            .iter()
            .find_map(|name| fields.get(name).filter(|value| !value.is_null()))
    }
}

impl Default for IdentityKeys {
    fn default() -> Self {
        Self(vec!["id".to_string()])
    }
}

impl TryFrom<Vec<String>> for IdentityKeys {
    type Error = Error;

    fn try_from(candidates: Vec<String>) -> Result<Self> {
        Self::new(candidates)
    }
}

impl From<IdentityKeys> for Vec<String> {
    fn from(keys: IdentityKeys) -> Self {
        keys.0
    }
}

/// How two lists are compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListMode {
    /// Reconcile elements by identity key and diff matched pairs
    ByIdentity(IdentityKeys),
    /// Only report a difference in length
    LengthOnly,
}

impl Default for ListMode {
    fn default() -> Self {
        ListMode::ByIdentity(IdentityKeys::default())
    }
}

/// Which record fields are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldScope {
    /// Fields of the old record only; fields added on the new side are not
    /// reported (default)
    #[default]
    LeftOnly,
    /// Old fields, then fields that only exist on the new record
    Union,
}

/// Options for [`Differ`](crate::Differ).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiffOptions {
    /// List comparison mode at the top level
    pub lists: ListMode,
    /// Record field enumeration scope
    pub fields: FieldScope,
    /// Prefix changes inside a reconciled element with an item marker
    pub mark_items: bool,
    /// Emit a change for every removed list element
    pub report_removed: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            lists: ListMode::default(),
            fields: FieldScope::LeftOnly,
            mark_items: true,
            report_removed: false,
        }
    }
}

impl DiffOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lists(mut self, lists: ListMode) -> Self {
        self.lists = lists;
        self
    }

    pub fn with_identity_keys(self, keys: IdentityKeys) -> Self {
        self.with_lists(ListMode::ByIdentity(keys))
    }

    pub fn with_fields(mut self, fields: FieldScope) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_item_markers(mut self, mark_items: bool) -> Self {
        self.mark_items = mark_items;
        self
    }

    pub fn with_removed_reported(mut self, report_removed: bool) -> Self {
        self.report_removed = report_removed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identity_keys_reject_empty() {
        assert!(matches!(
            IdentityKeys::new(Vec::<String>::new()),
            Err(Error::InvalidIdentityKeys(_))
        ));
        assert_eq!(
            IdentityKeys::new(["id", ""]),
            Err(Error::EmptyValue {
                name: "identity field".into()
            })
        );
    }

    #[test]
    fn lowercase_fallback() {
        let keys = IdentityKeys::with_lowercase_fallback("Id").unwrap();
        assert_eq!(keys.candidates(), &["Id".to_string(), "id".to_string()]);

        let keys = IdentityKeys::with_lowercase_fallback("id").unwrap();
        assert_eq!(keys.candidates(), &["id".to_string()]);
    }

    #[test]
    fn key_of_uses_first_populated_candidate() {
        let keys = IdentityKeys::with_lowercase_fallback("Id").unwrap();

        let upper = Value::from(json!({"Id": 1, "id": 2}));
        assert_eq!(keys.key_of(&upper), Some(&Value::from(1)));

        let lower = Value::from(json!({"id": 2}));
        assert_eq!(keys.key_of(&lower), Some(&Value::from(2)));

        let null_first = Value::from(json!({"Id": null, "id": 3}));
        assert_eq!(keys.key_of(&null_first), Some(&Value::from(3)));

        assert_eq!(keys.key_of(&Value::from(json!({"name": "x"}))), None);
        assert_eq!(keys.key_of(&Value::from(5)), None);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: DiffOptions = serde_json::from_value(json!({
            "lists": {"byIdentity": ["code", "id"]},
            "reportRemoved": true
        }))
        .unwrap();

        assert_eq!(
            options.lists,
            ListMode::ByIdentity(IdentityKeys::new(["code", "id"]).unwrap())
        );
        assert!(options.report_removed);
        assert!(options.mark_items);
        assert_eq!(options.fields, FieldScope::LeftOnly);

        let length_only: DiffOptions =
            serde_json::from_value(json!({"lists": "lengthOnly", "fields": "union"})).unwrap();
        assert_eq!(length_only.lists, ListMode::LengthOnly);
        assert_eq!(length_only.fields, FieldScope::Union);
    }

    #[test]
    fn options_reject_empty_identity_keys() {
        let result: std::result::Result<DiffOptions, _> =
            serde_json::from_value(json!({"lists": {"byIdentity": []}}));
        assert!(result.is_err());
    }

    #[test]
    fn options_roundtrip() {
        let options = DiffOptions::new()
            .with_identity_keys(IdentityKeys::new(["uuid"]).unwrap())
            .with_fields(FieldScope::Union)
            .with_item_markers(false);
        let json = serde_json::to_string(&options).unwrap();
        let parsed: DiffOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(options, parsed);
    }
}
