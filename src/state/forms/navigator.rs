//! Section navigation state machine
//!
//! States are the section numbers `1..=total` with a `submitting` flag on
//! top. Forward moves are gated by the form's validator, backward moves are
//! not, and only the final section can start a submission.

use super::errors::ErrorState;
use super::form_state::Form;

/// Result of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advanced { from: usize, to: usize },
    Retreated { from: usize, to: usize },
    /// Nothing to do (previous on the first section)
    Stayed,
    /// Validation failed with this many errors
    Blocked(usize),
    /// Validation passed on the final section and `submitting` is now set
    SubmitStarted,
    /// A submission is already in flight
    AlreadySubmitting,
    /// Submit requested before the final section
    NotOnFinalSection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionNavigator {
    current: usize,
    total: usize,
    submitting: bool,
}

impl SectionNavigator {
    pub fn new(total: usize) -> Self {
        Self {
            current: 1,
            total: total.max(1),
            submitting: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    // The store holds exactly what the latest pass found
    fn record_failure(errors: &mut ErrorState, result: ErrorState) -> Transition {
        let count = result.len();
        errors.clear();
        errors.merge(result);
        Transition::Blocked(count)
    }

    /// Validate the current section and move forward, or submit from the last one
    pub fn next(&mut self, form: &dyn Form, errors: &mut ErrorState) -> Transition {
        if self.submitting {
            return Transition::AlreadySubmitting;
        }
        if self.is_last() {
            return self.submit(form, errors);
        }

        let result = form.validate_section(self.current);
        if !result.is_empty() {
            return Self::record_failure(errors, result);
        }

        errors.clear();
        let from = self.current;
        self.current = (self.current + 1).min(self.total);
        Transition::Advanced {
            from,
            to: self.current,
        }
    }

    /// Step back without validating
    pub fn previous(&mut self) -> Transition {
        if self.submitting {
            return Transition::AlreadySubmitting;
        }
        if self.is_first() {
            return Transition::Stayed;
        }
        let from = self.current;
        self.current -= 1;
        Transition::Retreated {
            from,
            to: self.current,
        }
    }

    /// Validate the final section and raise the `submitting` flag
    pub fn submit(&mut self, form: &dyn Form, errors: &mut ErrorState) -> Transition {
        if self.submitting {
            return Transition::AlreadySubmitting;
        }
        if !self.is_last() {
            return Transition::NotOnFinalSection;
        }

        let result = form.validate_section(self.current);
        if !result.is_empty() {
            return Self::record_failure(errors, result);
        }

        errors.clear();
        self.submitting = true;
        Transition::SubmitStarted
    }

    /// Lower the `submitting` flag. A successful submission starts the cycle over.
    pub fn finish_submission(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            self.current = 1;
        }
    }
}
