//! Per-field validation messages

use std::collections::BTreeMap;

/// Field key -> message. A key is absent while its field is considered valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    messages: BTreeMap<String, String>,
}

impl ErrorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure. Empty messages are not stored.
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        let message = message.into();
        if !message.is_empty() {
            self.messages.insert(key.into(), message);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Drop the entry for one field, leaving the others alone
    pub fn clear_field(&mut self, key: &str) -> bool {
        self.messages.remove(key).is_some()
    }

    /// Drop every entry whose key starts with `prefix`
    pub fn clear_prefix(&mut self, prefix: &str) {
        self.messages.retain(|key, _| !key.starts_with(prefix));
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Fold another validation result into this one
    pub fn merge(&mut self, other: ErrorState) {
        self.messages.extend(other.messages);
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }
}
