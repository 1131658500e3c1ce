//! # Keyed Diff
//!
//! A structural diff engine for nested values.
//!
//! Given two value trees (records, ordered lists and scalars) the engine
//! reports every difference as a path-qualified [`Change`]. Lists of records
//! are reconciled by identity key instead of by position, so an edited
//! element shows up as a targeted field change rather than a replaced list.
//!
//! ## Design Principles
//!
//! - **No IO**: pure in-memory transform, nothing is persisted or shared
//! - **Deterministic**: output order follows the old value's field order
//! - **Non-mutating**: inputs are borrowed; results hold structural copies
//!
//! ## Core Concepts
//!
//! ### Values
//!
//! [`Value`] is an untyped node: null, bool, number, string, date, list or
//! record. Records keep insertion order. Convert from `serde_json::Value`
//! with `Value::from`.
//!
//! ### Comparison
//!
//! [`compare`] (or [`Differ::compare`] with custom [`DiffOptions`]) walks
//! both trees:
//! - Records recurse per field of the **old** record. Fields only present on
//!   the new record are not reported unless [`FieldScope::Union`] is set
//! - Lists follow the [`ListMode`]: [`ListMode::ByIdentity`] reconciles
//!   elements by key, [`ListMode::LengthOnly`] only compares lengths. Lists
//!   nested inside reconciled elements always compare by length
//! - Everything else yields one change unless both sides are the same value
//!
//! ### Reconciliation
//!
//! [`reconcile`] splits two lists into removed, added and changed elements
//! using [`IdentityKeys`]. Matching is a pairwise scan, O(n·m), meant for
//! small to moderate lists.
//!
//! ## Quick Start
//!
//! ```rust
//! use keyed_diff::{compare, reconcile, ChangePath, IdentityKeys, PathSegment, Value};
//! use serde_json::json;
//!
//! let old = Value::from(json!({
//!     "name": "Widgets",
//!     "items": [{"id": 1, "price": 10}, {"id": 2, "price": 20}]
//! }));
//! let new = Value::from(json!({
//!     "name": "Widgets",
//!     "items": [{"id": 2, "price": 25}, {"id": 1, "price": 10}]
//! }));
//!
//! let changes = compare(&old, &new);
//! assert_eq!(changes.len(), 1);
//! assert_eq!(
//!     changes[0].path,
//!     ChangePath::new(vec!["items".into(), PathSegment::item(2), "price".into()])
//! );
//! assert_eq!(changes[0].to_string(), "items[2].price: 20 -> 25");
//!
//! let items = |v: &Value| v.get("items").and_then(Value::as_list).unwrap().to_vec();
//! let result = reconcile(&items(&old), &items(&new), &IdentityKeys::default());
//! assert_eq!(result.changed.len(), 1);
//! assert!(result.added.is_empty() && result.removed.is_empty());
//! ```

pub mod change;
pub mod compare;
pub mod error;
pub mod options;
mod path;
pub mod reconcile;
pub mod strings;
pub mod validate;
pub mod value;

// Re-export main types at crate root
pub use change::{Change, ChangePath, PathSegment};
pub use compare::{compare, Differ};
pub use error::Error;
pub use options::{DiffOptions, FieldScope, IdentityKeys, ListMode};
pub use reconcile::{reconcile, ChangedItem, Reconciliation};
pub use strings::compare_strings;
pub use validate::{is_non_empty, require_non_empty, EmptyCheck};
pub use value::{Fields, Value};
