//! Notification category tagging.
//!
//! Runs after classification to tag the notification for display: spam splits
//! into `promo` (food/discount solicitations) and `spam`, legitimate messages
//! bucket by source app into `social` or `work`. An existing `promo` tag is
//! never downgraded.

use serde::Serialize;
use std::fmt;

/// Keywords that reclassify spam as promotional rather than malicious.
const PROMO_KEYWORDS: &[&str] = &["food", "delivery", "discount", "offer"];

/// Apps whose legitimate notifications tag as `social`.
const SOCIAL_APPS: &[&str] = &["whatsapp", "messenger", "imessage"];

/// Apps whose legitimate notifications tag as `work`.
const WORK_APPS: &[&str] = &["gmail", "outlook", "slack"];

/// Display category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Social,
    Work,
    Promo,
    Spam,
    Other,
}

impl Category {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Social => "social",
            Category::Work => "work",
            Category::Promo => "promo",
            Category::Spam => "spam",
            Category::Other => "other",
        }
    }

    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "social" => Some(Category::Social),
            "work" => Some(Category::Work),
            "promo" => Some(Category::Promo),
            "spam" => Some(Category::Spam),
            "other" => Some(Category::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derive the display category from the spam verdict, source app, and message
/// body, starting from any category already stored on the notification.
pub fn categorize(app: &str, message: &str, current: Category, is_spam: bool) -> Category {
    if is_spam {
        let message = message.to_lowercase();
        if PROMO_KEYWORDS.iter().any(|kw| message.contains(kw)) {
            return Category::Promo;
        }
        return Category::Spam;
    }

    if current == Category::Promo {
        return current;
    }

    let app = app.to_lowercase();
    if SOCIAL_APPS.contains(&app.as_str()) {
        Category::Social
    } else if WORK_APPS.contains(&app.as_str()) {
        Category::Work
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spam_with_promo_keyword_tags_promo() {
        let category = categorize("unknown", "50% discount on your next order", Category::Other, true);
        assert_eq!(category, Category::Promo);
    }

    #[test]
    fn test_spam_without_promo_keyword_tags_spam() {
        let category = categorize("unknown", "you have been selected", Category::Other, true);
        assert_eq!(category, Category::Spam);
    }

    #[test]
    fn test_ham_buckets_by_app() {
        assert_eq!(
            categorize("WhatsApp", "see you soon", Category::Other, false),
            Category::Social
        );
        assert_eq!(
            categorize("Slack", "standup in 5", Category::Other, false),
            Category::Work
        );
        assert_eq!(
            categorize("CameraApp", "photo saved", Category::Other, false),
            Category::Other
        );
    }

    #[test]
    fn test_existing_promo_tag_is_preserved_for_ham() {
        assert_eq!(
            categorize("gmail", "weekly newsletter", Category::Promo, false),
            Category::Promo
        );
    }

    #[test]
    fn test_category_round_trip() {
        for category in [
            Category::Social,
            Category::Work,
            Category::Promo,
            Category::Spam,
            Category::Other,
        ] {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(Category::parse("unknown"), None);
    }
}
