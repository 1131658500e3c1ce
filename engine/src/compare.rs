//! Deep comparison of two value trees.
//!
//! # Algorithm
//!
//! Dispatch happens on the shape of the old value:
//!
//! 1. Two records: walk the old record's fields in order (plus the new-only
//!    fields under [`FieldScope::Union`]) and recurse
//! 2. Two lists: either compare lengths, or reconcile elements by identity
//!    key and flatten the per-element differences
//! 3. Anything else: a single change unless both sides are the same value
//!
//! Output is depth-first along the old value's field order, so it is
//! deterministic for a given input.

use crate::{
    path::Scope,
    reconcile::reconcile_at,
    value::{same_optional, Fields},
    Change, DiffOptions, FieldScope, ListMode, Value,
};

/// Compare two values with the default [`DiffOptions`].
pub fn compare(old: &Value, new: &Value) -> Vec<Change> {
    Differ::default().compare(old, new)
}

/// A configured comparison engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Differ {
    options: DiffOptions,
}

impl Differ {
    pub fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// List every difference between `old` and `new`.
    pub fn compare(&self, old: &Value, new: &Value) -> Vec<Change> {
        let mut walker = Walker::new(&self.options);
        walker.walk(Some(old), Some(new), &self.options.lists, &Scope::root());

        tracing::debug!(
            changes = walker.changes.len(),
            old_type = old.type_name(),
            new_type = new.type_name(),
            "comparison finished"
        );
        walker.changes
    }
}

/// Accumulates changes for one comparison.
pub(crate) struct Walker<'o> {
    options: &'o DiffOptions,
    pub(crate) changes: Vec<Change>,
}

impl<'o> Walker<'o> {
    pub(crate) fn new(options: &'o DiffOptions) -> Self {
        Self {
            options,
            changes: Vec::new(),
        }
    }

    pub(crate) fn walk(
        &mut self,
        old: Option<&Value>,
        new: Option<&Value>,
        lists: &ListMode,
        scope: &Scope<'_>,
    ) {
        match (old, new) {
            (Some(Value::Record(a)), Some(Value::Record(b))) => {
                self.walk_record(a, b, lists, scope)
            }
            (Some(Value::List(a)), Some(Value::List(b))) => self.walk_list(a, b, lists, scope),
            _ => {
                if !same_optional(old, new) {
                    self.emit(scope, old.cloned(), new.cloned());
                }
            }
        }
    }

    fn walk_record(&mut self, old: &Fields, new: &Fields, lists: &ListMode, scope: &Scope<'_>) {
        for (name, value) in old {
            self.walk(Some(value), new.get(name), lists, &scope.field(name));
        }

        if self.options.fields == FieldScope::Union {
            for (name, value) in new.iter().filter(|(name, _)| !old.contains_key(*name)) {
                self.walk(None, Some(value), lists, &scope.field(name));
            }
        }
    }

    fn walk_list(&mut self, old: &[Value], new: &[Value], lists: &ListMode, scope: &Scope<'_>) {
        let keys = match lists {
            ListMode::LengthOnly => {
                if old.len() != new.len() {
                    self.emit(
                        scope,
                        Some(Value::from(old.len())),
                        Some(Value::from(new.len())),
                    );
                }
                return;
            }
            ListMode::ByIdentity(keys) => keys,
        };

        let result = reconcile_at(self.options, old, new, keys, Some(scope));

        self.changes
            .extend(result.changed.into_iter().flat_map(|item| item.difference));

        for added in result.added {
            self.emit(scope, Some(Value::Null), Some(added));
        }

        if self.options.report_removed {
            for removed in result.removed {
                self.emit(scope, Some(removed), Some(Value::Null));
            }
        }
    }

    fn emit(&mut self, scope: &Scope<'_>, old: Option<Value>, new: Option<Value>) {
        self.changes.push(Change::new(scope.to_path(), old, new));
    }
}
