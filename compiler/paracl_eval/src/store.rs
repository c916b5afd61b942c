//! Variable store.
//!
//! A single flat namespace mapping names to `i32` values. Variables come into
//! existence on their first assignment; reading a name that was never
//! assigned is an error. Braced blocks do not introduce scopes.

use rustc_hash::FxHashMap;

use crate::errors::{undefined_variable, EvalError};

/// Name-to-value mapping for one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VarStore {
    values: FxHashMap<Box<str>, i32>,
}

impl VarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `name`.
    pub fn get(&self, name: &str) -> Result<i32, EvalError> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| undefined_variable(name))
    }

    /// Create `name` or overwrite its value.
    pub fn set(&mut self, name: &str, value: i32) {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
        } else {
            self.values.insert(name.into(), value);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.values.iter().map(|(name, value)| (&**name, *value))
    }

    /// Entries sorted by name.
    pub fn snapshot(&self) -> Vec<(&str, i32)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
