// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Lookup of values already used by entries flagged as unique.

use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;

use crate::config::UniquenessScope;
use crate::models::Entry;

/// Answers whether a value is already taken for an entry.
pub trait UniqueValueStore: Send + Sync {
    fn is_taken(&self, entry: &Entry, value: &str, scope: UniquenessScope) -> bool;
}

/// Store for hosts that do not enforce uniqueness: nothing is ever taken.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoUniqueValues;

impl UniqueValueStore for NoUniqueValues {
    fn is_taken(&self, _entry: &Entry, _value: &str, _scope: UniquenessScope) -> bool {
        false
    }
}

/// Process-local store.
///
/// With [`UniquenessScope::Form`] values are tracked per entry id; with
/// [`UniquenessScope::Dataset`] they are tracked per entry code (title when
/// the entry has no code), so entries sharing a code share their values.
#[derive(Debug, Default)]
pub struct InMemoryUniqueValues {
    by_entry: RwLock<HashMap<i32, HashSet<String>>>,
    by_code: RwLock<HashMap<String, HashSet<String>>>,
}

impl InMemoryUniqueValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `value` as stored for `entry`.
    pub fn record(&self, entry: &Entry, value: &str) {
        self.by_entry
            .write()
            .entry(entry.id)
            .or_default()
            .insert(value.to_string());
        self.by_code
            .write()
            .entry(dataset_key(entry).to_string())
            .or_default()
            .insert(value.to_string());
    }
}

impl UniqueValueStore for InMemoryUniqueValues {
    fn is_taken(&self, entry: &Entry, value: &str, scope: UniquenessScope) -> bool {
        match scope {
            UniquenessScope::Form => self
                .by_entry
                .read()
                .get(&entry.id)
                .is_some_and(|values| values.contains(value)),
            UniquenessScope::Dataset => self
                .by_code
                .read()
                .get(dataset_key(entry))
                .is_some_and(|values| values.contains(value)),
        }
    }
}

fn dataset_key(entry: &Entry) -> &str {
    entry.code.as_deref().unwrap_or(&entry.title)
}

#[cfg(test)]
mod tests {
    use super::{InMemoryUniqueValues, NoUniqueValues, UniqueValueStore};
    use crate::config::UniquenessScope;
    use crate::models::{Entry, EntryKind};

    fn entry(id: i32, code: &str) -> Entry {
        let mut entry = Entry::new(id, EntryKind::Text);
        entry.code = Some(code.into());
        entry
    }

    #[test]
    fn form_scope_is_per_entry() {
        let store = InMemoryUniqueValues::new();
        store.record(&entry(1, "email"), "a@b.c");

        assert!(store.is_taken(&entry(1, "email"), "a@b.c", UniquenessScope::Form));
        assert!(!store.is_taken(&entry(2, "email"), "a@b.c", UniquenessScope::Form));
    }

    // Another form's entry with the same code sees the value in dataset scope.
    #[test]
    fn dataset_scope_is_per_code() {
        let store = InMemoryUniqueValues::new();
        store.record(&entry(1, "email"), "a@b.c");

        assert!(store.is_taken(&entry(2, "email"), "a@b.c", UniquenessScope::Dataset));
        assert!(!store.is_taken(&entry(3, "phone"), "a@b.c", UniquenessScope::Dataset));
    }

    #[test]
    fn no_unique_values_never_conflicts() {
        assert!(!NoUniqueValues.is_taken(&entry(1, "x"), "v", UniquenessScope::Dataset));
    }
}
