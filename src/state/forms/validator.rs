//! Section validation rules
//!
//! Every form variant describes its sections with a [`SectionCheck`]: a small
//! builder that runs one rule per field and collects the first failure of each
//! field into a fresh [`ErrorState`]. Checks are pure; nothing here touches
//! the form itself.

use super::errors::ErrorState;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"));

/// `<non-space>@<non-space>.<non-space>`
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Collects failures for one validation pass
#[derive(Debug, Default)]
pub struct SectionCheck {
    errors: ErrorState,
}

impl SectionCheck {
    pub fn new() -> Self {
        Self::default()
    }

    // First failing rule of a field wins, later rules for the same key are skipped
    fn fail(&mut self, key: &str, message: &str) {
        if !self.errors.contains(key) {
            self.errors.insert(key, message);
        }
    }

    /// Value must contain something other than whitespace
    pub fn required(&mut self, key: &str, value: &str, message: &str) -> &mut Self {
        if is_blank(value) {
            self.fail(key, message);
        }
        self
    }

    /// A choice must have an option selected
    pub fn selected(&mut self, key: &str, value: &str, message: &str) -> &mut Self {
        if value.is_empty() {
            self.fail(key, message);
        }
        self
    }

    /// Required email with a valid shape
    pub fn email(&mut self, key: &str, value: &str, required_message: &str) -> &mut Self {
        if is_blank(value) {
            self.fail(key, required_message);
        } else if !is_valid_email(value) {
            self.fail(key, "Please enter a valid email");
        }
        self
    }

    /// Required text of at least `min` characters
    pub fn min_length(
        &mut self,
        key: &str,
        value: &str,
        min: usize,
        required_message: &str,
    ) -> &mut Self {
        if is_blank(value) {
            self.fail(key, required_message);
        } else if value.chars().count() < min {
            self.fail(key, &format!("Please provide at least {min} characters"));
        }
        self
    }

    /// Required only while `condition` holds
    pub fn required_if(
        &mut self,
        condition: bool,
        key: &str,
        value: &str,
        message: &str,
    ) -> &mut Self {
        if condition {
            self.required(key, value, message);
        }
        self
    }

    pub fn finish(self) -> ErrorState {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("ab.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn test_required_email_messages() {
        let mut check = SectionCheck::new();
        check.email("email", "", "Email is required");
        check.email("work", "a@b", "Email is required");
        let errors = check.finish();
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("work"), Some("Please enter a valid email"));
    }

    #[test]
    fn test_required_rejects_whitespace() {
        let mut check = SectionCheck::new();
        check.required("fullName", "   ", "Full name is required");
        assert_eq!(check.finish().get("fullName"), Some("Full name is required"));
    }

    #[test]
    fn test_min_length_boundary() {
        let short = "x".repeat(49);
        let exact = "x".repeat(50);

        let mut check = SectionCheck::new();
        check.min_length("whyJoin", &short, 50, "Please tell us why you want to join");
        assert_eq!(
            check.finish().get("whyJoin"),
            Some("Please provide at least 50 characters")
        );

        let mut check = SectionCheck::new();
        check.min_length("whyJoin", &exact, 50, "Please tell us why you want to join");
        assert!(check.finish().is_empty());
    }

    #[test]
    fn test_min_length_counts_characters() {
        let mut check = SectionCheck::new();
        check.min_length("whyJoin", &"é".repeat(50), 50, "required");
        assert!(check.finish().is_empty());
    }

    #[test]
    fn test_min_length_empty_uses_required_message() {
        let mut check = SectionCheck::new();
        check.min_length("whyJoin", "", 50, "Please tell us why you want to join");
        assert_eq!(
            check.finish().get("whyJoin"),
            Some("Please tell us why you want to join")
        );
    }

    #[test]
    fn test_required_if() {
        let mut check = SectionCheck::new();
        check.required_if(false, "pivotExplanation", "", "Please explain the pivot");
        assert!(check.finish().is_empty());

        let mut check = SectionCheck::new();
        check.required_if(true, "pivotExplanation", "", "Please explain the pivot");
        assert!(check.finish().contains("pivotExplanation"));
    }

    #[test]
    fn test_first_failure_wins() {
        let mut check = SectionCheck::new();
        check
            .required("whyJoin", "", "Please tell us why you want to join")
            .min_length("whyJoin", "short", 50, "unused");
        assert_eq!(
            check.finish().get("whyJoin"),
            Some("Please tell us why you want to join")
        );
    }
}
