//! Identity-keyed reconciliation of two lists.
//!
//! Elements are matched by key rather than by position, so a reordered list
//! with one edited element reports exactly that edit instead of a wholesale
//! replacement.
//!
//! # Algorithm
//!
//! 1. Compute the key of every element of the new list; these form the pool
//! 2. For each old element, in order, take the first pooled element with an
//!    equal key and remove it from the pool
//! 3. Diff each matched pair with nested lists compared by length only;
//!    record the pair as changed when the diff is non-empty
//! 4. Unmatched old elements are removed; whatever is left in the pool is
//!    added, in the new list's order
//!
//! Each old element scans the remaining pool, so the cost is O(n·m). This is
//! intended for reference-data sized lists. Indexing the pool by key would
//! change which candidate wins when keys repeat, so the scan is kept.

use crate::{
    compare::Walker, path::Scope, value::same_optional, Change, DiffOptions, Differ,
    IdentityKeys, ListMode, Value,
};
use serde::{Deserialize, Serialize};

/// A matched pair whose contents differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangedItem {
    /// Element from the old list
    pub old: Value,
    /// Matching element from the new list
    pub new: Value,
    /// Differences between the two, with paths relative to the element
    pub difference: Vec<Change>,
}

/// Result of reconciling two lists. Unchanged pairs appear nowhere.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reconciliation {
    /// Old elements with no match in the new list
    pub removed: Vec<Value>,
    /// New elements with no match in the old list, in their original order
    pub added: Vec<Value>,
    /// Matched pairs that differ
    pub changed: Vec<ChangedItem>,
}

impl Reconciliation {
    /// True when both lists hold the same keyed elements with equal contents.
    pub fn is_unchanged(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty() && self.changed.is_empty()
    }
}

/// Reconcile two lists by identity key with the default [`DiffOptions`].
pub fn reconcile(old: &[Value], new: &[Value], keys: &IdentityKeys) -> Reconciliation {
    Differ::default().reconcile(old, new, keys)
}

impl Differ {
    /// Reconcile two lists by identity key.
    ///
    /// The inputs are only borrowed; every element in the result is a copy.
    pub fn reconcile(&self, old: &[Value], new: &[Value], keys: &IdentityKeys) -> Reconciliation {
        reconcile_at(self.options(), old, new, keys, None)
    }
}

/// Shared by [`Differ::reconcile`] and list comparison.
///
/// With `base` set, element differences carry the full path from the
/// comparison root (plus an item marker when enabled) so the caller can
/// flatten them directly. Without it, paths are relative to the element.
pub(crate) fn reconcile_at(
    options: &DiffOptions,
    old: &[Value],
    new: &[Value],
    keys: &IdentityKeys,
    base: Option<&Scope<'_>>,
) -> Reconciliation {
    let mut result = Reconciliation::default();
    let mut unchanged = 0usize;

    let mut pool: Vec<(Option<&Value>, &Value)> =
        new.iter().map(|item| (keys.key_of(item), item)).collect();

    for old_item in old {
        let key = keys.key_of(old_item);

        let Some(index) = pool
            .iter()
            .position(|(candidate, _)| same_optional(key, *candidate))
        else {
            result.removed.push(old_item.clone());
            continue;
        };

        let (_, new_item) = pool.remove(index);
        let difference = diff_pair(options, old_item, new_item, key, base);

        if difference.is_empty() {
            unchanged += 1;
        } else {
            result.changed.push(ChangedItem {
                old: old_item.clone(),
                new: new_item.clone(),
                difference,
            });
        }
    }

    result.added = pool.into_iter().map(|(_, item)| item.clone()).collect();

    tracing::trace!(
        old_len = old.len(),
        new_len = new.len(),
        removed = result.removed.len(),
        added = result.added.len(),
        changed = result.changed.len(),
        unchanged,
        "reconciled list"
    );

    result
}

fn diff_pair(
    options: &DiffOptions,
    old: &Value,
    new: &Value,
    key: Option<&Value>,
    base: Option<&Scope<'_>>,
) -> Vec<Change> {
    let nested = ListMode::LengthOnly;
    let mut walker = Walker::new(options);

    match base {
        Some(scope) if options.mark_items => {
            walker.walk(Some(old), Some(new), &nested, &scope.item(key))
        }
        Some(scope) => walker.walk(Some(old), Some(new), &nested, scope),
        None => walker.walk(Some(old), Some(new), &nested, &Scope::root()),
    }

    walker.changes
}
