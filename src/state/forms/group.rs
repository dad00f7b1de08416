//! Repeatable groups of uniform sub-records (co-founders)

use super::field::FormField;
use std::collections::BTreeMap;

/// A record type that can live inside a [`RepeatableGroup`]
pub trait GroupRecord: Default + Clone {
    /// Fields in display order
    fn fields(&self) -> Vec<&FormField>;
    fn field_mut(&mut self, name: &str) -> Option<&mut FormField>;

    fn field(&self, name: &str) -> Option<&FormField> {
        self.fields().into_iter().find(|f| f.name == name)
    }

    fn snapshot(&self) -> BTreeMap<String, String> {
        self.fields()
            .into_iter()
            .map(|f| (f.name.to_string(), f.value().to_string()))
            .collect()
    }
}

/// Build the key of a sub-field: `<group>_<index>_<field>`
pub fn record_key(group: &str, index: usize, field: &str) -> String {
    format!("{group}_{index}_{field}")
}

/// Split a sub-field key into (group, index, field). Top-level keys return `None`.
pub fn parse_record_key(key: &str) -> Option<(&str, usize, &str)> {
    let (group, rest) = key.split_once('_')?;
    let (index, field) = rest.split_once('_')?;
    let index = index.parse().ok()?;
    if group.is_empty() || field.is_empty() {
        return None;
    }
    Some((group, index, field))
}

/// Ordered list of records that never drops below one entry
#[derive(Debug, Clone)]
pub struct RepeatableGroup<T> {
    pub name: &'static str,
    records: Vec<T>,
}

impl<T: GroupRecord> RepeatableGroup<T> {
    /// Minimum number of records while the group exists
    pub const MIN_RECORDS: usize = 1;

    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            records: vec![T::default()],
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.records.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.records.get_mut(index)
    }

    /// Append an empty record and return its index
    pub fn push(&mut self) -> usize {
        self.records.push(T::default());
        self.len() - 1
    }

    /// Remove the record at `index`.
    /// Returns false when the index is out of range or the group is at its minimum.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.len() <= Self::MIN_RECORDS || index >= self.len() {
            return false;
        }
        self.records.remove(index);
        true
    }

    pub fn snapshot(&self) -> Vec<BTreeMap<String, String>> {
        self.records.iter().map(GroupRecord::snapshot).collect()
    }
}

/// One co-founder entry
#[derive(Debug, Clone)]
pub struct CoFounder {
    pub name: FormField,
    pub email: FormField,
    pub role: FormField,
}

impl Default for CoFounder {
    fn default() -> Self {
        Self {
            name: FormField::text("name", "Name"),
            email: FormField::text("email", "Email").with_placeholder("cofounder@example.com"),
            role: FormField::text("role", "Role").with_placeholder("CTO, Head of Growth, ..."),
        }
    }
}

impl GroupRecord for CoFounder {
    fn fields(&self) -> Vec<&FormField> {
        vec![&self.name, &self.email, &self.role]
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        match name {
            "name" => Some(&mut self.name),
            "email" => Some(&mut self.email),
            "role" => Some(&mut self.role),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_group_has_one_record() {
        let group: RepeatableGroup<CoFounder> = RepeatableGroup::new("coFounders");
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn test_removing_last_record_is_blocked() {
        let mut group: RepeatableGroup<CoFounder> = RepeatableGroup::new("coFounders");
        assert!(!group.remove(0));
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn test_push_and_remove_at_index() {
        let mut group: RepeatableGroup<CoFounder> = RepeatableGroup::new("coFounders");
        let idx = group.push();
        assert_eq!(idx, 1);
        group.get_mut(0).unwrap().name.set("Ada");
        group.get_mut(1).unwrap().name.set("Grace");

        assert!(group.remove(0));
        assert_eq!(group.len(), 1);
        assert_eq!(group.get(0).unwrap().name.value(), "Grace");
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut group: RepeatableGroup<CoFounder> = RepeatableGroup::new("coFounders");
        group.push();
        assert!(!group.remove(5));
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_record_key_round_trip() {
        let key = record_key("coFounders", 2, "email");
        assert_eq!(key, "coFounders_2_email");
        assert_eq!(parse_record_key(&key), Some(("coFounders", 2, "email")));
    }

    #[test]
    fn test_parse_rejects_plain_keys() {
        assert_eq!(parse_record_key("fullName"), None);
        assert_eq!(parse_record_key("coFounders_x_email"), None);
        assert_eq!(parse_record_key("coFounders_1_"), None);
    }

    #[test]
    fn test_snapshot() {
        let mut group: RepeatableGroup<CoFounder> = RepeatableGroup::new("coFounders");
        group.get_mut(0).unwrap().role.set("CTO");
        let snap = group.snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].get("role").map(String::as_str), Some("CTO"));
        assert_eq!(snap[0].get("name").map(String::as_str), Some(""));
    }
}
