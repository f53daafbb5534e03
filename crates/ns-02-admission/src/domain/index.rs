//! Reverse index from `(lens, form)` to the secret that owns it.

use std::collections::HashMap;
use std::fmt;

use super::entities::SecretId;

/// Lookup key. Lens names and forms are kept apart so a form containing
/// `:` never aliases another lens's key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IndexKey {
    pub lens: String,
    pub form: String,
}

impl IndexKey {
    pub fn new(lens: &str, form: &str) -> Self {
        Self {
            lens: lens.to_string(),
            form: form.to_string(),
        }
    }
}

impl fmt::Display for IndexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.lens, self.form)
    }
}

/// `(lens, form)` → owning secret.
///
/// Entries are never removed. Inserting an existing key replaces its owner.
#[derive(Debug, Default)]
pub struct ReverseIndex {
    entries: HashMap<IndexKey, SecretId>,
}

impl ReverseIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, lens: &str, form: &str) -> Option<&SecretId> {
        self.entries.get(&IndexKey::new(lens, form))
    }

    /// Point `key` at `id`, returning the previous owner if any.
    pub fn insert(&mut self, key: IndexKey, id: SecretId) -> Option<SecretId> {
        self.entries.insert(key, id)
    }

    /// Number of keys currently owned by `id`.
    pub fn keys_owned_by(&self, id: &SecretId) -> usize {
        self.entries.values().filter(|owner| *owner == id).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
