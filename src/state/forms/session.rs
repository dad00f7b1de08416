//! A live form session: field store, error store, navigator and focus

use super::cohort_apply::CO_FOUNDERS;
use super::errors::ErrorState;
use super::field::FormField;
use super::form_state::{FieldSlot, Form, FormData, FormKind, FormVariant};
use super::navigator::{SectionNavigator, Transition};
use uuid::Uuid;

/// Outcome of an in-flight submission as seen by the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct FormSession {
    form: FormVariant,
    errors: ErrorState,
    navigator: SectionNavigator,
    /// Index into the current section's slots
    focus: usize,
    /// Id of the submission currently in flight
    pending: Option<Uuid>,
    /// Last failed submission, shown with a retry hint
    submit_error: Option<String>,
}

impl FormSession {
    pub fn new(kind: FormKind) -> Self {
        let form = kind.build();
        let navigator = SectionNavigator::new(form.as_form().section_count());
        Self {
            form,
            errors: ErrorState::new(),
            navigator,
            focus: 0,
            pending: None,
            submit_error: None,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.form.kind()
    }

    pub fn form(&self) -> &dyn Form {
        self.form.as_form()
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn section(&self) -> usize {
        self.navigator.current()
    }

    pub fn section_count(&self) -> usize {
        self.navigator.total()
    }

    pub fn section_title(&self) -> &'static str {
        self.form().section_title(self.section())
    }

    pub fn is_first_section(&self) -> bool {
        self.navigator.is_first()
    }

    pub fn is_last_section(&self) -> bool {
        self.navigator.is_last()
    }

    pub fn is_submitting(&self) -> bool {
        self.navigator.is_submitting()
    }

    pub fn pending_submission(&self) -> Option<Uuid> {
        self.pending
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn data(&self) -> FormData {
        self.form().data()
    }

    pub fn slots(&self) -> Vec<FieldSlot<'_>> {
        self.form().section_slots(self.section())
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_key(&self) -> Option<String> {
        self.slots().into_iter().nth(self.focus).map(|slot| slot.key)
    }

    /// Record index of the focused group field, if any
    pub fn focused_record(&self) -> Option<usize> {
        self.slots().get(self.focus).and_then(|slot| slot.record)
    }

    pub fn focus_next(&mut self) {
        let count = self.slots().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.slots().len();
        if count == 0 {
            return;
        }
        self.focus = if self.focus == 0 {
            count - 1
        } else {
            self.focus - 1
        };
    }

    pub fn set_focus(&mut self, index: usize) {
        let count = self.slots().len();
        self.focus = index.min(count.saturating_sub(1));
    }

    // Slots can disappear (pivot answered "No", record removed)
    fn clamp_focus(&mut self) {
        let focus = self.focus;
        self.set_focus(focus);
    }

    /// Replace a field's value and forget its error. Unknown keys are ignored.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> bool {
        if self.is_submitting() {
            return false;
        }
        match self.form.as_form_mut().field_mut(key) {
            Some(field) => {
                field.set(value);
                self.errors.clear_field(key);
                self.clamp_focus();
                true
            }
            None => {
                tracing::warn!("Ignoring update for unknown field {key}");
                false
            }
        }
    }

    /// Partial update of several fields at once
    #[cfg(test)]
    pub fn set_fields<'a>(&mut self, updates: impl IntoIterator<Item = (&'a str, &'a str)>) {
        for (key, value) in updates {
            self.set_field(key, value);
        }
    }

    // Keystrokes and choice cycling end up in `set_field`
    fn edit_focused(&mut self, edit: impl FnOnce(&mut FormField)) {
        let Some(key) = self.focused_key() else {
            return;
        };
        let Some(mut field) = self.form().field(&key).cloned() else {
            return;
        };
        edit(&mut field);
        self.set_field(&key, field.value());
    }

    pub fn input_char(&mut self, c: char) {
        self.edit_focused(|field| field.push_char(c));
    }

    pub fn backspace(&mut self) {
        self.edit_focused(FormField::pop_char);
    }

    pub fn cycle_choice(&mut self, forward: bool) {
        self.edit_focused(|field| field.cycle_choice(forward));
    }

    pub fn is_focused_multiline(&self) -> bool {
        self.slots()
            .get(self.focus)
            .is_some_and(|slot| slot.field.is_multiline())
    }

    pub fn is_focused_choice(&self) -> bool {
        self.slots()
            .get(self.focus)
            .is_some_and(|slot| slot.field.is_choice())
    }

    /// Append a co-founder record; `None` when the form has no such group
    pub fn add_co_founder(&mut self) -> Option<usize> {
        if self.is_submitting() {
            return None;
        }
        let group = self.form.as_form_mut().group_mut(CO_FOUNDERS)?;
        let index = group.push();
        tracing::debug!("Added co-founder record {index}");
        Some(index)
    }

    /// Remove a co-founder record. The last remaining record cannot be removed.
    pub fn remove_co_founder(&mut self, index: usize) -> bool {
        if self.is_submitting() {
            return false;
        }
        let Some(group) = self.form.as_form_mut().group_mut(CO_FOUNDERS) else {
            return false;
        };
        if !group.remove(index) {
            return false;
        }
        // Record keys shift after a removal
        self.errors.clear_prefix(&format!("{CO_FOUNDERS}_"));
        self.clamp_focus();
        true
    }

    /// Remove the co-founder record holding the focused field
    pub fn remove_focused_co_founder(&mut self) -> bool {
        match self.focused_record() {
            Some(index) => self.remove_co_founder(index),
            None => false,
        }
    }

    fn after_move(&mut self, transition: Transition) -> Transition {
        match transition {
            Transition::Advanced { .. } | Transition::Retreated { .. } => self.focus = 0,
            Transition::Blocked(_) => self.focus_first_error(),
            Transition::SubmitStarted => {
                let id = Uuid::new_v4();
                self.pending = Some(id);
                self.submit_error = None;
                tracing::info!("Submission {id} started for {:?}", self.kind());
            }
            _ => {}
        }
        transition
    }

    fn focus_first_error(&mut self) {
        let index = self
            .slots()
            .iter()
            .position(|slot| self.errors.contains(&slot.key));
        if let Some(index) = index {
            self.focus = index;
        }
    }

    /// "Next": validate and advance, or submit on the last section
    pub fn next(&mut self) -> Transition {
        let transition = self.navigator.next(self.form.as_form(), &mut self.errors);
        self.after_move(transition)
    }

    /// "Back": no validation
    pub fn previous(&mut self) -> Transition {
        let transition = self.navigator.previous();
        self.after_move(transition)
    }

    /// "Submit": only from the last section
    pub fn submit(&mut self) -> Transition {
        let transition = self.navigator.submit(self.form.as_form(), &mut self.errors);
        self.after_move(transition)
    }

    /// Apply the answer of the submission `id`. Stale ids are ignored.
    pub fn complete_submission(&mut self, id: Uuid, outcome: SubmissionOutcome) -> bool {
        if self.pending != Some(id) {
            tracing::debug!("Ignoring result of stale submission {id}");
            return false;
        }
        self.pending = None;
        match outcome {
            SubmissionOutcome::Accepted => {
                self.navigator.finish_submission(true);
                self.form.as_form_mut().reset();
                self.errors.clear();
                self.focus = 0;
                self.submit_error = None;
            }
            SubmissionOutcome::Failed(message) => {
                self.navigator.finish_submission(false);
                self.submit_error = Some(message);
            }
        }
        true
    }

    /// Drop the in-flight submission without an answer; fields are kept
    pub fn abandon_submission(&mut self) {
        if self.pending.take().is_some() {
            self.navigator.finish_submission(false);
        }
    }
}
