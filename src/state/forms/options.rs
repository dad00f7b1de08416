//! Option lists for choice fields

use super::field::ChoiceOption;

pub const TEAM_SIZES: &[ChoiceOption] = &[
    ChoiceOption::new("Solo", "Solo founder"),
    ChoiceOption::new("2-3", "2-3 people"),
    ChoiceOption::new("4-5", "4-5 people"),
    ChoiceOption::new("6+", "6+ people"),
];

pub const EXPERIENCE_LEVELS: &[ChoiceOption] = &[
    ChoiceOption::new("First-time", "First-time founder"),
    ChoiceOption::new("Previous-startup", "Previous startup experience"),
    ChoiceOption::new("Scaled-before", "Have scaled a product before"),
    ChoiceOption::new("Multiple-exits", "Multiple successful exits"),
];

pub const STAGES: &[ChoiceOption] = &[
    ChoiceOption::new("Idea", "Idea stage"),
    ChoiceOption::new("MVP", "Building an MVP"),
    ChoiceOption::new("Launched", "Launched, pre-revenue"),
    ChoiceOption::new("Revenue", "Generating revenue"),
];

pub const INDUSTRIES: &[ChoiceOption] = &[
    ChoiceOption::new("Fintech", "Fintech"),
    ChoiceOption::new("Health", "Health"),
    ChoiceOption::new("Climate", "Climate"),
    ChoiceOption::new("DevTools", "Developer tools"),
    ChoiceOption::new("Consumer", "Consumer"),
    ChoiceOption::new("Other", "Other"),
];

pub const FUNDING_RAISED: &[ChoiceOption] = &[
    ChoiceOption::new("Bootstrapped", "Bootstrapped"),
    ChoiceOption::new("Pre-seed", "Pre-seed"),
    ChoiceOption::new("Seed", "Seed"),
    ChoiceOption::new("Series-A+", "Series A or later"),
];

pub const CONTACT_TOPICS: &[ChoiceOption] = &[
    ChoiceOption::new("Applying", "Question about applying"),
    ChoiceOption::new("Partnership", "Partnership"),
    ChoiceOption::new("Press", "Press"),
    ChoiceOption::new("Other", "Something else"),
];
