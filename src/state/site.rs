//! Branded site content for the landing pages

use super::forms::FormKind;
use serde::{Deserialize, Serialize};

/// One card of a landing page section
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

/// A titled landing page section the navbar can jump to
#[derive(Debug, Clone, Copy)]
pub struct PageSection {
    pub anchor: &'static str,
    pub nav_label: &'static str,
    pub heading: &'static str,
    pub cards: &'static [Card],
}

/// Which brand the client is running as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Site {
    #[default]
    #[serde(alias = "30under30")]
    ThirtyUnderThirty,
    #[serde(alias = "forebridge")]
    ForeBridge,
}

impl Site {
    /// Parse a site name from config or the environment
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "30under30" | "30under30.ai" | "thirty-under-thirty" => Some(Self::ThirtyUnderThirty),
            "forebridge" | "fore-bridge" => Some(Self::ForeBridge),
            _ => None,
        }
    }

    pub fn brand(&self) -> &'static str {
        match self {
            Self::ThirtyUnderThirty => "30under30.ai",
            Self::ForeBridge => "ForeBridge",
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Self::ThirtyUnderThirty => "Build. Launch. Scale",
            Self::ForeBridge => "Bridge the gap to product-market fit",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Self::ThirtyUnderThirty => {
                "Join the accelerator that takes you from zero to 30,000 users or $30,000 MRR in just one month."
            }
            Self::ForeBridge => {
                "Hands-on support for early teams turning a working product into a growing business."
            }
        }
    }

    pub fn home_title(&self) -> String {
        match self {
            Self::ThirtyUnderThirty => "30under30.ai - Build. Launch. Scale.".to_string(),
            Self::ForeBridge => "ForeBridge - Bridge the gap".to_string(),
        }
    }

    pub fn page_title(&self, page: &str) -> String {
        format!("{page} - {}", self.brand())
    }

    /// The form behind `/apply`
    pub fn primary_form(&self) -> FormKind {
        match self {
            Self::ThirtyUnderThirty => FormKind::CohortApply,
            Self::ForeBridge => FormKind::ForeBridgeApply,
        }
    }

    /// Notification shown once a form was accepted
    pub fn success_notice(&self, kind: FormKind) -> (&'static str, &'static str) {
        match (self, kind) {
            (_, FormKind::ForeBridgeContact) => (
                "Message Sent",
                "Thanks for reaching out to ForeBridge! We'll get back to you shortly.",
            ),
            (Self::ForeBridge, _) => (
                "Application Submitted",
                "Thank you for applying to ForeBridge! We'll review your application and get back to you soon.",
            ),
            (Self::ThirtyUnderThirty, _) => (
                "Application Submitted",
                "Thank you for applying to 30under30.ai! We'll review your application and get back to you soon.",
            ),
        }
    }

    pub fn sections(&self) -> &'static [PageSection] {
        match self {
            Self::ThirtyUnderThirty => THIRTY_SECTIONS,
            Self::ForeBridge => FOREBRIDGE_SECTIONS,
        }
    }

    pub fn footer(&self) -> &'static str {
        match self {
            Self::ThirtyUnderThirty => "© 30under30.ai. All rights reserved.",
            Self::ForeBridge => "© ForeBridge. All rights reserved.",
        }
    }
}

const THIRTY_SECTIONS: &[PageSection] = &[
    PageSection {
        anchor: "what-we-do",
        nav_label: "What We Do",
        heading: "What We Do",
        cards: &[
            Card {
                title: "Build",
                body: "Hands-on MVP creation with guidance from experienced founders. Get your product ready for market testing in record time.",
            },
            Card {
                title: "Launch",
                body: "Product testing and iteration based on real user feedback. Refine your offering to match market needs perfectly.",
            },
            Card {
                title: "Scale",
                body: "Sprint to 30k users or 30k MRR with proven growth strategies tailored to your specific product and market.",
            },
        ],
    },
    PageSection {
        anchor: "why-us",
        nav_label: "Why Us",
        heading: "Why 30under30.ai",
        cards: &[
            Card {
                title: "San Francisco",
                body: "Build in the heart of tech, surrounded by innovation and opportunity. Network with industry leaders and investors.",
            },
            Card {
                title: "Founder Mentors",
                body: "Work directly with experienced founders who have scaled successful businesses and know what it takes to succeed.",
            },
            Card {
                title: "Everything Covered",
                body: "We handle housing, workspace, and tools. You focus entirely on building and growing your product.",
            },
            Card {
                title: "One Month Sprint",
                body: "Achieve rapid growth in just one month by following our structured program designed for maximum efficiency.",
            },
        ],
    },
    PageSection {
        anchor: "process",
        nav_label: "Process",
        heading: "The Process",
        cards: &[
            Card {
                title: "1. Apply",
                body: "Submit your application and share your startup vision. We select only 2-3 teams per cohort.",
            },
            Card {
                title: "2. Build",
                body: "Move to SF and start developing your product with our team of experienced mentors.",
            },
            Card {
                title: "3. Grow",
                body: "Enter our intensive 30-day growth program focused on reaching your 30k target.",
            },
            Card {
                title: "4. Scale",
                body: "Continue growing beyond the program with our extended support and investor network.",
            },
        ],
    },
];

const FOREBRIDGE_SECTIONS: &[PageSection] = &[
    PageSection {
        anchor: "what-we-do",
        nav_label: "What We Do",
        heading: "What We Do",
        cards: &[
            Card {
                title: "Diagnose",
                body: "A two-week deep dive into your product, customers and numbers to find what is really holding growth back.",
            },
            Card {
                title: "Build",
                body: "Embedded operators help your team ship the changes that matter, from onboarding to pricing.",
            },
            Card {
                title: "Connect",
                body: "Introductions to customers, hires and investors once the numbers start to move.",
            },
        ],
    },
    PageSection {
        anchor: "why-us",
        nav_label: "Why Us",
        heading: "Why ForeBridge",
        cards: &[
            Card {
                title: "Operators, not advisors",
                body: "Everyone on the team has built and scaled a product of their own.",
            },
            Card {
                title: "No fixed cohort",
                body: "Start when you are ready. We work with a handful of teams at a time.",
            },
        ],
    },
    PageSection {
        anchor: "process",
        nav_label: "Process",
        heading: "How It Works",
        cards: &[
            Card {
                title: "1. Apply",
                body: "Tell us about your company, your team and your traction so far.",
            },
            Card {
                title: "2. Meet",
                body: "A call with two operators to see whether we are the right fit.",
            },
            Card {
                title: "3. Bridge",
                body: "Twelve weeks of hands-on work toward the milestones we agree on together.",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_site_names() {
        assert_eq!(Site::parse("30under30"), Some(Site::ThirtyUnderThirty));
        assert_eq!(Site::parse(" ForeBridge "), Some(Site::ForeBridge));
        assert_eq!(Site::parse("elsewhere"), None);
    }

    #[test]
    fn test_page_titles() {
        assert_eq!(Site::ThirtyUnderThirty.page_title("Apply"), "Apply - 30under30.ai");
        assert_eq!(
            Site::ThirtyUnderThirty.page_title("Page Not Found"),
            "Page Not Found - 30under30.ai"
        );
        assert_eq!(
            Site::ThirtyUnderThirty.home_title(),
            "30under30.ai - Build. Launch. Scale."
        );
    }

    #[test]
    fn test_primary_forms() {
        assert_eq!(Site::ThirtyUnderThirty.primary_form(), FormKind::CohortApply);
        assert_eq!(Site::ForeBridge.primary_form(), FormKind::ForeBridgeApply);
    }

    #[test]
    fn test_sections_share_anchors() {
        for site in [Site::ThirtyUnderThirty, Site::ForeBridge] {
            let anchors: Vec<_> = site.sections().iter().map(|s| s.anchor).collect();
            assert_eq!(anchors, vec!["what-we-do", "why-us", "process"]);
        }
    }

    #[test]
    fn test_site_serde() {
        let site: Site = serde_json::from_str("\"fore-bridge\"").unwrap();
        assert_eq!(site, Site::ForeBridge);
        let site: Site = serde_json::from_str("\"30under30\"").unwrap();
        assert_eq!(site, Site::ThirtyUnderThirty);
    }
}
