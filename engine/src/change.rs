//! Change records: the unit of difference produced by the engine.

use crate::Value;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One step of a [`ChangePath`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PathSegment {
    /// A record field name
    Field(String),
    /// A reconciled list element, identified by its key value (`Null` when
    /// the element had no identity key)
    Item(Value),
}

impl PathSegment {
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    pub fn item(key: impl Into<Value>) -> Self {
        PathSegment::Item(key.into())
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::field(name)
    }
}

impl PartialEq<&str> for PathSegment {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, PathSegment::Field(name) if name == other)
    }
}

/// Location of a change inside the compared values.
///
/// An empty path means the compared values themselves differ, or, for list
/// reconciliation, that a whole element was added or removed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangePath(Vec<PathSegment>);

impl ChangePath {
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }

    /// A path made only of field names.
    pub fn fields<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self(names.into_iter().map(PathSegment::field).collect())
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<PathSegment>> for ChangePath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for ChangePath {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.0.len() == N && self.0.iter().zip(other).all(|(seg, name)| seg == name)
    }
}

/// Renders as `a.b[1].c`; the root renders as `$`.
impl fmt::Display for ChangePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("$");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => f.write_str(name)?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Item(key) => write!(f, "[{key}]")?,
            }
        }
        Ok(())
    }
}

/// A detected difference.
///
/// `None` stands for an absent value (a field missing on one side), which is
/// distinct from an explicit [`Value::Null`]. In serialized form an absent
/// side is omitted and `null` always means `Value::Null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    /// Where the difference occurred
    pub path: ChangePath,
    /// Value on the old side
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub old_value: Option<Value>,
    /// Value on the new side
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub new_value: Option<Value>,
}

/// A field that is present deserializes to `Some`, even when it is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Change {
    pub fn new(path: ChangePath, old_value: Option<Value>, new_value: Option<Value>) -> Self {
        Self {
            path,
            old_value,
            new_value,
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.path)?;
        match &self.old_value {
            Some(v) => write!(f, "{v}")?,
            None => f.write_str("<absent>")?,
        }
        f.write_str(" -> ")?;
        match &self.new_value {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("<absent>"),
        }
    }
}
