//! Copy and link data shown on the landing page. Everything here is fixed at
//! build time; display order is list order.

pub const SITE_TITLE: &str = "Atobue | List, Manage, Rent & Earn";
pub const SITE_DESCRIPTION: &str =
    "Digitize your property, find verified rentals fast, or become a caretaker and start earning.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

impl Alignment {
    pub fn is_left(self) -> bool {
        self == Alignment::Left
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureItem {
    pub title: &'static str,
    pub body: &'static str,
    pub align: Alignment,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[Link] = &[
    Link { label: "Feature", href: "#features" },
    Link { label: "More", href: "#more" },
    Link { label: "Faq", href: "#faq" },
];

pub const FEATURES: &[FeatureItem] = &[
    FeatureItem {
        title: "List and manage your property",
        body: "As a property owner, you can easily set up your property, list any space you have available for rent, keep track of your tenants, and even hire someone to help manage things for you. It’s a simple way to stay in control of your property without stress.",
        align: Alignment::Left,
    },
    FeatureItem {
        title: "Looking for a place? Start here",
        body: "You can easily find places to rent, whether it’s a room, apartment, condo, or an entire house. You can also discover lands available for rent for things like farming, business, or other personal use. Whatever you’re looking for, Atobue helps you find the right space that fits your needs.",
        align: Alignment::Right,
    },
    FeatureItem {
        title: "Earn monthly as a caretaker",
        body: "Start earning a monthly income by managing a property assigned to you. Your job can include routine weekly checks, responding to tenant complaints, reporting issues, and ensuring repairs are handled properly.",
        align: Alignment::Left,
    },
];

pub const MORE_ABOUT_HEADING: &str = "Everything you need in one place";
pub const MORE_ABOUT_BODY: &str = "Whether you’re renting, managing, or working, Atobue brings it all together in one simple app. Property owners can list and manage rental spaces, track tenants, and assign caretakers to handle complaints and repairs. Renters can find rooms, houses, apartments, or land. Caretakers can earn monthly by helping owners with checks and issue follow-ups.";

pub const HERO_PANEL_TEXT: &str = "Digitize your property, find verified rentals fast, or become a caretaker and start earning in our all in one powerful app.";

pub const FAQ_BLURB: &str = "Got questions? We’ve answered the most common things users ask about using, renting, managing, or earning with Atobue.";

pub const FAQ_ITEMS: &[FaqItem] = &[
    FaqItem {
        question: "What can I do on the Atobue app as a property owner?",
        answer: "You can list your property for rent, manage tenant information, and assign a caretaker to handle complaints, routine checks, and repairs. The app helps you stay organized without needing to be physically present.",
    },
    FaqItem {
        question: "What kind of spaces can renters find on Atobue?",
        answer: "Renters can find rooms, apartments, houses, and other rentable spaces. Depending on your listings, this may also include land for business or personal use.",
    },
    FaqItem {
        question: "How do I earn money through the caretaker program?",
        answer: "If you’re approved and assigned to manage a property, you can earn a monthly income by performing agreed tasks like checks, issue reporting, and coordinating repairs.",
    },
    FaqItem {
        question: "As a caretaker do I have to work every day?",
        answer: "No. Care tasks are typically scheduled (e.g., weekly checks) plus responding when issues occur. The exact schedule depends on the property owner’s agreement.",
    },
    FaqItem {
        question: "Can I list more than one property on Atobue?",
        answer: "Yes. You can list multiple properties and manage them within your account, depending on your plan and verification requirements.",
    },
];

// (aria label, glyph)
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("X", "𝕏"),
    ("Instagram", "⌁"),
    ("TikTok", "♪"),
    ("YouTube", "▶"),
    ("LinkedIn", "in"),
];

pub const LEGAL_LINKS: &[Link] = &[
    Link { label: "Privacy Policies", href: "#" },
    Link { label: "Terms & Conditions", href: "#" },
    Link { label: "Cookie Policy", href: "#" },
];

pub const COPYRIGHT: &str = "© Atobue 2024";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_alternate_sides() {
        let sides: Vec<Alignment> = FEATURES.iter().map(|f| f.align).collect();
        assert_eq!(sides, vec![Alignment::Left, Alignment::Right, Alignment::Left]);
    }

    #[test]
    fn faq_questions_are_unique() {
        // Questions double as list keys.
        for (i, a) in FAQ_ITEMS.iter().enumerate() {
            for b in &FAQ_ITEMS[i + 1..] {
                assert_ne!(a.question, b.question);
            }
        }
        assert_eq!(FAQ_ITEMS.len(), 5);
    }

    #[test]
    fn copy_has_no_mis_encoded_punctuation() {
        let all = FEATURES
            .iter()
            .flat_map(|f| [f.title, f.body])
            .chain(FAQ_ITEMS.iter().flat_map(|f| [f.question, f.answer]))
            .chain([MORE_ABOUT_BODY, FAQ_BLURB, HERO_PANEL_TEXT]);
        for text in all {
            assert!(!text.contains("â€"), "garbled glyph in {text:?}");
            assert!(!text.contains('\u{FFFD}'), "replacement char in {text:?}");
        }
    }

    #[test]
    fn nav_targets_page_sections() {
        let anchors: Vec<&str> = NAV_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(anchors, vec!["#features", "#more", "#faq"]);
    }
}
