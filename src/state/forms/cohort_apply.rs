//! Four-step 30under30.ai cohort application

use super::errors::ErrorState;
use super::field::{FormField, YES_NO};
use super::form_state::{FieldSlot, Form, FormData};
use super::group::{record_key, CoFounder, RepeatableGroup};
use super::options::{EXPERIENCE_LEVELS, STAGES, TEAM_SIZES};
use super::quick_apply::WHY_JOIN_MIN_CHARS;
use super::validator::SectionCheck;

pub const CO_FOUNDERS: &str = "coFounders";

/// Validate every record of an active co-founder group
pub(super) fn check_co_founders(check: &mut SectionCheck, group: &RepeatableGroup<CoFounder>) {
    for (index, record) in group.records().iter().enumerate() {
        check
            .required(
                &record_key(group.name, index, "name"),
                record.name.value(),
                "Co-founder name is required",
            )
            .email(
                &record_key(group.name, index, "email"),
                record.email.value(),
                "Co-founder email is required",
            );
    }
}

#[derive(Debug, Clone)]
pub struct CohortApplyForm {
    // Section 1: about you
    pub full_name: FormField,
    pub email: FormField,
    pub linked_in: FormField,
    pub location: FormField,
    // Section 2: your startup
    pub startup_name: FormField,
    pub idea: FormField,
    pub stage: FormField,
    pub is_pivot: FormField,
    pub pivot_explanation: FormField,
    // Section 3: your team
    pub team_size: FormField,
    pub experience: FormField,
    pub has_co_founders: FormField,
    pub co_founders: RepeatableGroup<CoFounder>,
    // Section 4: why us
    pub why_join: FormField,
    pub can_relocate: FormField,
    pub referral: FormField,
}

impl CohortApplyForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::text("fullName", "Full Name *")
                .with_placeholder("Enter your full name"),
            email: FormField::text("email", "Email Address *").with_placeholder("you@example.com"),
            linked_in: FormField::text("linkedIn", "LinkedIn Profile (optional)")
                .with_placeholder("https://linkedin.com/in/yourusername"),
            location: FormField::text("location", "Where are you based? *"),
            startup_name: FormField::text("startupName", "Startup Name *"),
            idea: FormField::multiline("idea", "Startup Idea Description *")
                .with_placeholder("Describe your startup idea in detail..."),
            stage: FormField::choice("stage", "Current Stage *", STAGES),
            is_pivot: FormField::choice(
                "isPivot",
                "Is this a pivot from a previous idea? *",
                YES_NO,
            ),
            pivot_explanation: FormField::multiline(
                "pivotExplanation",
                "What are you pivoting from, and why?",
            ),
            team_size: FormField::choice("teamSize", "Team Size *", TEAM_SIZES),
            experience: FormField::choice("experience", "Experience Level *", EXPERIENCE_LEVELS),
            has_co_founders: FormField::choice(
                "hasCoFounders",
                "Do you have co-founders? *",
                YES_NO,
            ),
            co_founders: RepeatableGroup::new(CO_FOUNDERS),
            why_join: FormField::multiline("whyJoin", "Why do you want to join 30under30.ai? *")
                .with_placeholder("Tell us why you're a good fit for our accelerator..."),
            can_relocate: FormField::choice(
                "canRelocate",
                "Can you move to San Francisco for 3 months? *",
                YES_NO,
            ),
            referral: FormField::text("referral", "How did you hear about us? (optional)"),
        }
    }

    pub fn is_pivot(&self) -> bool {
        self.is_pivot.value() == "Yes"
    }

    pub fn co_founders_active(&self) -> bool {
        self.has_co_founders.value() == "Yes"
    }

    fn top_fields(&self) -> [&FormField; 15] {
        [
            &self.full_name,
            &self.email,
            &self.linked_in,
            &self.location,
            &self.startup_name,
            &self.idea,
            &self.stage,
            &self.is_pivot,
            &self.pivot_explanation,
            &self.team_size,
            &self.experience,
            &self.has_co_founders,
            &self.why_join,
            &self.can_relocate,
            &self.referral,
        ]
    }
}

impl Default for CohortApplyForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for CohortApplyForm {
    fn section_count(&self) -> usize {
        4
    }

    fn section_title(&self, section: usize) -> &'static str {
        match section {
            1 => "About you",
            2 => "Your startup",
            3 => "Your team",
            4 => "Why 30under30.ai",
            _ => "",
        }
    }

    fn section_slots(&self, section: usize) -> Vec<FieldSlot<'_>> {
        match section {
            1 => FieldSlot::all(&[&self.full_name, &self.email, &self.linked_in, &self.location]),
            2 => {
                let mut slots =
                    FieldSlot::all(&[&self.startup_name, &self.idea, &self.stage, &self.is_pivot]);
                if self.is_pivot() {
                    slots.push(FieldSlot::top(&self.pivot_explanation));
                }
                slots
            }
            3 => {
                let mut slots =
                    FieldSlot::all(&[&self.team_size, &self.experience, &self.has_co_founders]);
                if self.co_founders_active() {
                    slots.extend(FieldSlot::group(&self.co_founders));
                }
                slots
            }
            4 => FieldSlot::all(&[&self.why_join, &self.can_relocate, &self.referral]),
            _ => Vec::new(),
        }
    }

    fn validate_section(&self, section: usize) -> ErrorState {
        let mut check = SectionCheck::new();
        match section {
            1 => {
                check
                    .required("fullName", self.full_name.value(), "Full name is required")
                    .email("email", self.email.value(), "Email is required")
                    .required("location", self.location.value(), "Location is required");
            }
            2 => {
                check
                    .required("startupName", self.startup_name.value(), "Startup name is required")
                    .required("idea", self.idea.value(), "Startup idea description is required")
                    .selected("stage", self.stage.value(), "Please select your current stage")
                    .selected(
                        "isPivot",
                        self.is_pivot.value(),
                        "Please tell us whether this is a pivot",
                    )
                    .required_if(
                        self.is_pivot(),
                        "pivotExplanation",
                        self.pivot_explanation.value(),
                        "Please explain what you are pivoting from",
                    );
            }
            3 => {
                check
                    .selected("teamSize", self.team_size.value(), "Team size is required")
                    .selected("experience", self.experience.value(), "Experience level is required")
                    .selected(
                        "hasCoFounders",
                        self.has_co_founders.value(),
                        "Please tell us whether you have co-founders",
                    );
                if self.co_founders_active() {
                    check_co_founders(&mut check, &self.co_founders);
                }
            }
            4 => {
                check
                    .min_length(
                        "whyJoin",
                        self.why_join.value(),
                        WHY_JOIN_MIN_CHARS,
                        "Please tell us why you want to join",
                    )
                    .selected(
                        "canRelocate",
                        self.can_relocate.value(),
                        "Please tell us whether you can relocate",
                    );
            }
            _ => {}
        }
        check.finish()
    }

    fn data(&self) -> FormData {
        let mut data = FormData::from_fields(self.top_fields());
        if self.co_founders_active() {
            data.insert_group(&self.co_founders);
        }
        data
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn top_field(&self, name: &str) -> Option<&FormField> {
        self.top_fields().into_iter().find(|f| f.name == name)
    }

    fn top_field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        match name {
            "fullName" => Some(&mut self.full_name),
            "email" => Some(&mut self.email),
            "linkedIn" => Some(&mut self.linked_in),
            "location" => Some(&mut self.location),
            "startupName" => Some(&mut self.startup_name),
            "idea" => Some(&mut self.idea),
            "stage" => Some(&mut self.stage),
            "isPivot" => Some(&mut self.is_pivot),
            "pivotExplanation" => Some(&mut self.pivot_explanation),
            "teamSize" => Some(&mut self.team_size),
            "experience" => Some(&mut self.experience),
            "hasCoFounders" => Some(&mut self.has_co_founders),
            "whyJoin" => Some(&mut self.why_join),
            "canRelocate" => Some(&mut self.can_relocate),
            "referral" => Some(&mut self.referral),
            _ => None,
        }
    }

    fn group(&self, name: &str) -> Option<&RepeatableGroup<CoFounder>> {
        (name == CO_FOUNDERS).then_some(&self.co_founders)
    }

    fn group_mut(&mut self, name: &str) -> Option<&mut RepeatableGroup<CoFounder>> {
        (name == CO_FOUNDERS).then_some(&mut self.co_founders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pivot_explanation_not_required_when_not_pivot() {
        let mut form = CohortApplyForm::new();
        form.startup_name.set("Engine Co");
        form.idea.set("Analytical engines");
        form.stage.set("MVP");
        form.is_pivot.set("No");
        assert!(form.validate_section(2).is_empty());
    }

    #[test]
    fn test_pivot_explanation_required_when_pivot() {
        let mut form = CohortApplyForm::new();
        form.startup_name.set("Engine Co");
        form.idea.set("Analytical engines");
        form.stage.set("MVP");
        form.is_pivot.set("Yes");
        let errors = form.validate_section(2);
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["pivotExplanation"]);

        form.pivot_explanation.set("We used to build looms");
        assert!(form.validate_section(2).is_empty());
    }

    #[test]
    fn test_pivot_explanation_slot_follows_choice() {
        let mut form = CohortApplyForm::new();
        assert_eq!(form.section_slots(2).len(), 4);
        form.is_pivot.set("Yes");
        assert_eq!(form.section_slots(2).len(), 5);
    }

    #[test]
    fn test_inactive_group_is_not_validated() {
        let mut form = CohortApplyForm::new();
        form.team_size.set("Solo");
        form.experience.set("First-time");
        form.has_co_founders.set("No");
        assert!(form.validate_section(3).is_empty());
        assert_eq!(form.section_slots(3).len(), 3);
        assert!(form.data().group(CO_FOUNDERS).is_none());
    }

    #[test]
    fn test_group_errors_are_keyed_per_record() {
        let mut form = CohortApplyForm::new();
        form.team_size.set("2-3");
        form.experience.set("First-time");
        form.has_co_founders.set("Yes");
        form.co_founders.push();
        form.co_founders.get_mut(0).unwrap().name.set("Grace");
        form.co_founders.get_mut(0).unwrap().email.set("grace@example.com");
        form.co_founders.get_mut(1).unwrap().email.set("not-an-email");

        let errors = form.validate_section(3);
        assert_eq!(
            errors.keys().collect::<Vec<_>>(),
            vec!["coFounders_1_email", "coFounders_1_name"]
        );
        assert_eq!(
            errors.get("coFounders_1_email"),
            Some("Please enter a valid email")
        );
    }

    #[test]
    fn test_group_slots_use_record_keys() {
        let mut form = CohortApplyForm::new();
        form.has_co_founders.set("Yes");
        let keys: Vec<String> = form.section_slots(3).into_iter().map(|s| s.key).collect();
        assert_eq!(
            keys,
            vec![
                "teamSize",
                "experience",
                "hasCoFounders",
                "coFounders_0_name",
                "coFounders_0_email",
                "coFounders_0_role",
            ]
        );
    }

    #[test]
    fn test_section_four_rules() {
        let mut form = CohortApplyForm::new();
        form.why_join.set("short");
        let errors = form.validate_section(4);
        assert_eq!(errors.get("whyJoin"), Some("Please provide at least 50 characters"));
        assert!(errors.contains("canRelocate"));
        assert!(!errors.contains("referral"));
    }
}
