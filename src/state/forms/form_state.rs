//! Form trait, the tagged union of form variants, and form data snapshots

use super::cohort_apply::CohortApplyForm;
use super::errors::ErrorState;
use super::field::FormField;
use super::forebridge::{ForeBridgeApplyForm, ForeBridgeContactForm};
use super::group::{parse_record_key, record_key, CoFounder, GroupRecord, RepeatableGroup};
use super::quick_apply::QuickApplyForm;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A field as it appears in a section, addressed by its key
#[derive(Debug, Clone)]
pub struct FieldSlot<'a> {
    /// `fullName`, or `coFounders_0_name` for group sub-fields
    pub key: String,
    pub field: &'a FormField,
    /// Record index when the field belongs to a repeatable group
    pub record: Option<usize>,
}

impl<'a> FieldSlot<'a> {
    pub fn top(field: &'a FormField) -> Self {
        Self {
            key: field.name.to_string(),
            field,
            record: None,
        }
    }

    pub fn all(fields: &[&'a FormField]) -> Vec<Self> {
        fields.iter().copied().map(Self::top).collect()
    }

    /// Slots for every sub-field of every record of a group
    pub fn group<T: GroupRecord>(group: &'a RepeatableGroup<T>) -> Vec<Self> {
        group
            .records()
            .iter()
            .enumerate()
            .flat_map(move |(index, record)| {
                record.fields().into_iter().map(move |field| FieldSlot {
                    key: record_key(group.name, index, field.name),
                    field,
                    record: Some(index),
                })
            })
            .collect()
    }
}

/// Value of one entry of [`FormData`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldEntry {
    Value(String),
    Group(Vec<BTreeMap<String, String>>),
}

/// Snapshot of every field of a form, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(BTreeMap<String, FieldEntry>);

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect a list of top-level fields
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = &'a FormField>) -> Self {
        let mut data = Self::new();
        for field in fields {
            data.insert_value(field.name, field.value());
        }
        data
    }

    pub fn insert_value(&mut self, name: &str, value: &str) {
        self.0
            .insert(name.to_string(), FieldEntry::Value(value.to_string()));
    }

    pub fn insert_group<T: GroupRecord>(&mut self, group: &RepeatableGroup<T>) {
        self.0
            .insert(group.name.to_string(), FieldEntry::Group(group.snapshot()));
    }

    #[cfg(test)]
    pub fn value(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(FieldEntry::Value(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn group(&self, name: &str) -> Option<&[BTreeMap<String, String>]> {
        match self.0.get(name) {
            Some(FieldEntry::Group(records)) => Some(records.as_slice()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when every value (and every group sub-value) is empty
    #[cfg(test)]
    pub fn is_blank(&self) -> bool {
        self.0.values().all(|entry| match entry {
            FieldEntry::Value(v) => v.is_empty(),
            FieldEntry::Group(records) => records.iter().all(|r| r.values().all(String::is_empty)),
        })
    }
}

/// Common operations of every form variant. Sections are numbered from 1.
pub trait Form {
    fn section_count(&self) -> usize;
    fn section_title(&self, section: usize) -> &'static str;
    /// Fields of a section in focus order
    fn section_slots(&self, section: usize) -> Vec<FieldSlot<'_>>;
    /// Pure validation pass over one section
    fn validate_section(&self, section: usize) -> ErrorState;
    fn data(&self) -> FormData;
    /// Back to all-empty defaults
    fn reset(&mut self);

    fn top_field(&self, name: &str) -> Option<&FormField>;
    fn top_field_mut(&mut self, name: &str) -> Option<&mut FormField>;

    fn group(&self, _name: &str) -> Option<&RepeatableGroup<CoFounder>> {
        None
    }
    fn group_mut(&mut self, _name: &str) -> Option<&mut RepeatableGroup<CoFounder>> {
        None
    }

    fn field(&self, key: &str) -> Option<&FormField> {
        match parse_record_key(key) {
            Some((group, index, name)) => self.group(group)?.get(index)?.field(name),
            None => self.top_field(key),
        }
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut FormField> {
        match parse_record_key(key) {
            Some((group, index, name)) => self.group_mut(group)?.get_mut(index)?.field_mut(name),
            None => self.top_field_mut(key),
        }
    }
}

/// Which form a session runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    QuickApply,
    CohortApply,
    ForeBridgeApply,
    ForeBridgeContact,
}

impl FormKind {
    pub fn build(self) -> FormVariant {
        match self {
            Self::QuickApply => FormVariant::QuickApply(QuickApplyForm::new()),
            Self::CohortApply => FormVariant::CohortApply(CohortApplyForm::new()),
            Self::ForeBridgeApply => FormVariant::ForeBridgeApply(ForeBridgeApplyForm::new()),
            Self::ForeBridgeContact => FormVariant::ForeBridgeContact(ForeBridgeContactForm::new()),
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::QuickApply | Self::CohortApply => "Apply to 30under30.ai",
            Self::ForeBridgeApply => "Apply to ForeBridge",
            Self::ForeBridgeContact => "Contact ForeBridge",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::ForeBridgeContact => "Send Message",
            _ => "Submit Application",
        }
    }
}

/// The form schemas, one per variant, chosen when a session opens
#[derive(Debug, Clone)]
pub enum FormVariant {
    QuickApply(QuickApplyForm),
    CohortApply(CohortApplyForm),
    ForeBridgeApply(ForeBridgeApplyForm),
    ForeBridgeContact(ForeBridgeContactForm),
}

impl FormVariant {
    pub fn kind(&self) -> FormKind {
        match self {
            Self::QuickApply(_) => FormKind::QuickApply,
            Self::CohortApply(_) => FormKind::CohortApply,
            Self::ForeBridgeApply(_) => FormKind::ForeBridgeApply,
            Self::ForeBridgeContact(_) => FormKind::ForeBridgeContact,
        }
    }

    pub fn as_form(&self) -> &dyn Form {
        match self {
            Self::QuickApply(f) => f,
            Self::CohortApply(f) => f,
            Self::ForeBridgeApply(f) => f,
            Self::ForeBridgeContact(f) => f,
        }
    }

    pub fn as_form_mut(&mut self) -> &mut dyn Form {
        match self {
            Self::QuickApply(f) => f,
            Self::CohortApply(f) => f,
            Self::ForeBridgeApply(f) => f,
            Self::ForeBridgeContact(f) => f,
        }
    }
}
