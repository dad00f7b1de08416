//! ForeBridge application and contact forms

use super::cohort_apply::{check_co_founders, CO_FOUNDERS};
use super::errors::ErrorState;
use super::field::{FormField, YES_NO};
use super::form_state::{FieldSlot, Form, FormData};
use super::group::{CoFounder, RepeatableGroup};
use super::options::{CONTACT_TOPICS, FUNDING_RAISED, INDUSTRIES, STAGES};
use super::validator::SectionCheck;

pub const GOALS_MIN_CHARS: usize = 50;
pub const MESSAGE_MIN_CHARS: usize = 20;

/// Five-step ForeBridge application
#[derive(Debug, Clone)]
pub struct ForeBridgeApplyForm {
    pub full_name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub company_name: FormField,
    pub website: FormField,
    pub industry: FormField,
    pub has_co_founders: FormField,
    pub co_founders: RepeatableGroup<CoFounder>,
    pub stage: FormField,
    pub is_pivot: FormField,
    pub pivot_explanation: FormField,
    pub traction: FormField,
    pub funding_raised: FormField,
    pub goals: FormField,
}

impl ForeBridgeApplyForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::text("fullName", "Full Name *"),
            email: FormField::text("email", "Work Email *").with_placeholder("you@company.com"),
            phone: FormField::text("phone", "Phone (optional)"),
            company_name: FormField::text("companyName", "Company Name *"),
            website: FormField::text("website", "Website (optional)")
                .with_placeholder("https://"),
            industry: FormField::choice("industry", "Industry *", INDUSTRIES),
            has_co_founders: FormField::choice(
                "hasCoFounders",
                "Do you have co-founders? *",
                YES_NO,
            ),
            co_founders: RepeatableGroup::new(CO_FOUNDERS),
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
            traction: FormField::multiline("traction", "Traction so far *")
                .with_placeholder("Users, revenue, pilots, waitlist..."),
            funding_raised: FormField::choice("fundingRaised", "Funding Raised *", FUNDING_RAISED),
            goals: FormField::multiline("goals", "What do you want from ForeBridge? *"),
        }
    }

    pub fn is_pivot(&self) -> bool {
        self.is_pivot.value() == "Yes"
    }

    pub fn co_founders_active(&self) -> bool {
        self.has_co_founders.value() == "Yes"
    }

    fn top_fields(&self) -> [&FormField; 13] {
        [
            &self.full_name,
            &self.email,
            &self.phone,
            &self.company_name,
            &self.website,
            &self.industry,
            &self.has_co_founders,
            &self.stage,
            &self.is_pivot,
            &self.pivot_explanation,
            &self.traction,
            &self.funding_raised,
            &self.goals,
        ]
    }
}

impl Default for ForeBridgeApplyForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ForeBridgeApplyForm {
    fn section_count(&self) -> usize {
        5
    }

    fn section_title(&self, section: usize) -> &'static str {
        match section {
            1 => "Contact",
            2 => "Company",
            3 => "Founders",
            4 => "Traction",
            5 => "Goals",
            _ => "",
        }
    }

    fn section_slots(&self, section: usize) -> Vec<FieldSlot<'_>> {
        match section {
            1 => FieldSlot::all(&[&self.full_name, &self.email, &self.phone]),
            2 => FieldSlot::all(&[&self.company_name, &self.website, &self.industry]),
            3 => {
                let mut slots = FieldSlot::all(&[&self.has_co_founders]);
                if self.co_founders_active() {
                    slots.extend(FieldSlot::group(&self.co_founders));
                }
                slots
            }
            4 => {
                let mut slots = FieldSlot::all(&[&self.stage, &self.is_pivot]);
                if self.is_pivot() {
                    slots.push(FieldSlot::top(&self.pivot_explanation));
                }
                slots.push(FieldSlot::top(&self.traction));
                slots
            }
            5 => FieldSlot::all(&[&self.funding_raised, &self.goals]),
            _ => Vec::new(),
        }
    }

    fn validate_section(&self, section: usize) -> ErrorState {
        let mut check = SectionCheck::new();
        match section {
            1 => {
                check
                    .required("fullName", self.full_name.value(), "Full name is required")
                    .email("email", self.email.value(), "Email is required");
            }
            2 => {
                check
                    .required("companyName", self.company_name.value(), "Company name is required")
                    .selected("industry", self.industry.value(), "Please select an industry");
            }
            3 => {
                check.selected(
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
                    )
                    .required(
                        "traction",
                        self.traction.value(),
                        "Please describe your traction so far",
                    );
            }
            5 => {
                check
                    .selected(
                        "fundingRaised",
                        self.funding_raised.value(),
                        "Please select how much funding you have raised",
                    )
                    .min_length(
                        "goals",
                        self.goals.value(),
                        GOALS_MIN_CHARS,
                        "Please tell us what you want from ForeBridge",
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
            "phone" => Some(&mut self.phone),
            "companyName" => Some(&mut self.company_name),
            "website" => Some(&mut self.website),
            "industry" => Some(&mut self.industry),
            "hasCoFounders" => Some(&mut self.has_co_founders),
            "stage" => Some(&mut self.stage),
            "isPivot" => Some(&mut self.is_pivot),
            "pivotExplanation" => Some(&mut self.pivot_explanation),
            "traction" => Some(&mut self.traction),
            "fundingRaised" => Some(&mut self.funding_raised),
            "goals" => Some(&mut self.goals),
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

/// Single-page ForeBridge contact form
#[derive(Debug, Clone)]
pub struct ForeBridgeContactForm {
    pub full_name: FormField,
    pub email: FormField,
    pub company: FormField,
    pub topic: FormField,
    pub message: FormField,
}

impl ForeBridgeContactForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::text("fullName", "Full Name *"),
            email: FormField::text("email", "Email Address *").with_placeholder("you@example.com"),
            company: FormField::text("company", "Company (optional)"),
            topic: FormField::choice("topic", "Topic *", CONTACT_TOPICS),
            message: FormField::multiline("message", "Message *")
                .with_placeholder("How can we help?"),
        }
    }

    fn fields(&self) -> [&FormField; 5] {
        [
            &self.full_name,
            &self.email,
            &self.company,
            &self.topic,
            &self.message,
        ]
    }
}

impl Default for ForeBridgeContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ForeBridgeContactForm {
    fn section_count(&self) -> usize {
        1
    }

    fn section_title(&self, section: usize) -> &'static str {
        match section {
            1 => "Get in touch",
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
                .selected("topic", self.topic.value(), "Please select a topic")
                .min_length(
                    "message",
                    self.message.value(),
                    MESSAGE_MIN_CHARS,
                    "Please enter a message",
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
            "company" => Some(&mut self.company),
            "topic" => Some(&mut self.topic),
            "message" => Some(&mut self.message),
            _ => None,
        }
    }
}
