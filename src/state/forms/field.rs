//! Form field value objects

/// A selectable option of a choice field: the stored value and its label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl ChoiceOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Yes/No radio options shared by several forms
pub const YES_NO: &[ChoiceOption] = &[
    ChoiceOption::new("Yes", "Yes"),
    ChoiceOption::new("No", "No"),
];

/// How a field is edited and drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Single line of free text
    Text,
    /// Free text that accepts newlines
    Multiline,
    /// One of a fixed set of options; empty value means nothing selected
    Choice(&'static [ChoiceOption]),
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
    value: String,
}

impl FormField {
    /// Create a new single-line text field
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            placeholder: "",
            value: String::new(),
        }
    }

    /// Create a new multiline text field
    pub fn multiline(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: FieldKind::Multiline,
            ..Self::text(name, label)
        }
    }

    /// Create a new choice field (select or radio group)
    pub fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [ChoiceOption],
    ) -> Self {
        Self {
            kind: FieldKind::Choice(options),
            ..Self::text(name, label)
        }
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::Multiline)
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, FieldKind::Choice(_))
    }

    /// Replace the value
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to a text field. Choice fields ignore typed input.
    pub fn push_char(&mut self, c: char) {
        match self.kind {
            FieldKind::Text if c == '\n' => {}
            FieldKind::Text | FieldKind::Multiline => self.value.push(c),
            FieldKind::Choice(_) => {}
        }
    }

    /// Remove the last character from a text field
    pub fn pop_char(&mut self) {
        match self.kind {
            FieldKind::Text | FieldKind::Multiline => {
                self.value.pop();
            }
            FieldKind::Choice(_) => {
                // Choices are cleared, not edited character by character
                self.value.clear();
            }
        }
    }

    /// Select the next (or previous) option, starting from "nothing selected"
    pub fn cycle_choice(&mut self, forward: bool) {
        let FieldKind::Choice(options) = self.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let current = options.iter().position(|o| o.value == self.value);
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(0), false) => options.len() - 1,
            (Some(i), false) => i - 1,
        };
        self.value = options[next].value.to_string();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Choice(options) => options
                .iter()
                .find(|o| o.value == self.value)
                .map(|o| o.label.to_string())
                .unwrap_or_default(),
            _ => self.value.clone(),
        }
    }
}
