//! Single-page 30under30.ai application

use super::errors::ErrorState;
use super::field::FormField;
use super::form_state::{FieldSlot, Form, FormData};
use super::options::{EXPERIENCE_LEVELS, TEAM_SIZES};
use super::validator::SectionCheck;

/// Minimum length of the "why join" answer
pub const WHY_JOIN_MIN_CHARS: usize = 50;

#[derive(Debug, Clone)]
pub struct QuickApplyForm {
    pub full_name: FormField,
    pub email: FormField,
    pub linked_in: FormField,
    pub idea: FormField,
    pub team_size: FormField,
    pub experience: FormField,
    pub why_join: FormField,
}

impl QuickApplyForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::text("fullName", "Full Name *")
                .with_placeholder("Enter your full name"),
            email: FormField::text("email", "Email Address *").with_placeholder("you@example.com"),
            linked_in: FormField::text("linkedIn", "LinkedIn Profile (optional)")
                .with_placeholder("https://linkedin.com/in/yourusername"),
            idea: FormField::multiline("idea", "Startup Idea Description *")
                .with_placeholder("Describe your startup idea in detail..."),
            team_size: FormField::choice("teamSize", "Team Size *", TEAM_SIZES),
            experience: FormField::choice("experience", "Experience Level *", EXPERIENCE_LEVELS),
            why_join: FormField::multiline("whyJoin", "Why do you want to join 30under30.ai? *")
                .with_placeholder("Tell us why you're a good fit for our accelerator..."),
        }
    }

    fn fields(&self) -> [&FormField; 7] {
        [
            &self.full_name,
            &self.email,
            &self.linked_in,
            &self.idea,
            &self.team_size,
            &self.experience,
            &self.why_join,
        ]
    }
}

impl Default for QuickApplyForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for QuickApplyForm {
    fn section_count(&self) -> usize {
        1
    }

    fn section_title(&self, section: usize) -> &'static str {
        match section {
            1 => "Your application",
            _ => "",
        }
    }

    fn section_slots(&self, section: usize) -> Vec<FieldSlot<'_>> {
        match section {
            1 => FieldSlot::all(&self.fields()),
            _ => Vec::new(),
        }
    }

    fn validate_section(&self, section: usize) -> ErrorState {
        let mut check = SectionCheck::new();
        if section == 1 {
            check
                .required("fullName", self.full_name.value(), "Full name is required")
                .email("email", self.email.value(), "Email is required")
                .required("idea", self.idea.value(), "Startup idea description is required")
                .selected("teamSize", self.team_size.value(), "Team size is required")
                .selected("experience", self.experience.value(), "Experience level is required")
                .min_length(
                    "whyJoin",
                    self.why_join.value(),
                    WHY_JOIN_MIN_CHARS,
                    "Please tell us why you want to join",
                );
        }
        check.finish()
    }

    fn data(&self) -> FormData {
        FormData::from_fields(self.fields())
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn top_field(&self, name: &str) -> Option<&FormField> {
        self.fields().into_iter().find(|f| f.name == name)
    }

    fn top_field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        match name {
            "fullName" => Some(&mut self.full_name),
            "email" => Some(&mut self.email),
            "linkedIn" => Some(&mut self.linked_in),
            "idea" => Some(&mut self.idea),
            "teamSize" => Some(&mut self.team_size),
            "experience" => Some(&mut self.experience),
            "whyJoin" => Some(&mut self.why_join),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> QuickApplyForm {
        let mut form = QuickApplyForm::new();
        form.full_name.set("Ada Lovelace");
        form.email.set("ada@example.com");
        form.idea.set("Analytical engines as a service");
        form.team_size.set("2-3");
        form.experience.set("First-time");
        form.why_join.set("x".repeat(WHY_JOIN_MIN_CHARS));
        form
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = QuickApplyForm::new().validate_section(1);
        let keys: Vec<_> = errors.keys().collect();
        assert_eq!(
            keys,
            vec!["email", "experience", "fullName", "idea", "teamSize", "whyJoin"]
        );
        assert!(!errors.contains("linkedIn"));
    }

    #[test]
    fn test_filled_form_is_valid() {
        assert!(filled().validate_section(1).is_empty());
    }

    #[test]
    fn test_why_join_needs_fifty_characters() {
        let mut form = filled();
        form.why_join.set("x".repeat(WHY_JOIN_MIN_CHARS - 1));
        let errors = form.validate_section(1);
        assert_eq!(
            errors.get("whyJoin"),
            Some("Please provide at least 50 characters")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_invalid_email() {
        let mut form = filled();
        form.email.set("ab.com");
        assert_eq!(
            form.validate_section(1).get("email"),
            Some("Please enter a valid email")
        );
    }

    #[test]
    fn test_reset_clears_values() {
        let mut form = filled();
        form.reset();
        assert!(form.data().is_blank());
    }

    #[test]
    fn test_data_contains_optional_fields() {
        let mut form = filled();
        form.linked_in.set("https://linkedin.com/in/ada");
        let data = form.data();
        assert_eq!(data.len(), 7);
        assert_eq!(data.value("linkedIn"), Some("https://linkedin.com/in/ada"));
    }
}
