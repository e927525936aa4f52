//! Curated training exemplars.
//!
//! Hand-written examples injected into the corpus after balancing to sharpen
//! the decision boundary on known confusable cases: canonical phishing/promo
//! phrasing on the spam side, and legitimate messages that lexically resemble
//! spam triggers (genuine congratulations, delivery notices) on the ham side.

/// Canonical spam phrasings the corpus tends to under-represent.
pub const SPAM_EXEMPLARS: &[&str] = &[
    "You've won a free iPhone! Claim now!",
    "Congratulations! You won $1000!",
    "Click here for your special offer",
    "URGENT: Your account has been compromised",
    "Limited time offer - 50% off today only",
    "Exclusive deal, act fast to get 90% off everything",
    "Verify your bank account now to avoid suspension",
    "Final notice: collect your cash reward before midnight",
    "Hot singles in your area want to chat",
];

/// Legitimate messages that lexically resemble spam triggers.
pub const HAM_EXEMPLARS: &[&str] = &[
    "Congratulations on your promotion, well deserved",
    "Congrats on finishing the marathon!",
    "Team meeting at 3 PM in the conference room",
    "Your meeting with HR is scheduled for tomorrow at 10",
    "Project status update attached",
    "Your package has been delivered to the front desk",
    "Dinner at our place on Saturday?",
    "The build finished, all tests are green",
    "Happy birthday! Hope the day is wonderful",
    "Can you review my pull request when you get a chance?",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::RuleStage;

    #[test]
    fn test_both_sides_are_non_empty() {
        assert!(!SPAM_EXEMPLARS.is_empty());
        assert!(!HAM_EXEMPLARS.is_empty());
    }

    // The ham side exists to teach the model path; at least some of it must
    // actually slip past the rules, otherwise the exemplars teach nothing the
    // rules don't already decide.
    #[test]
    fn test_some_ham_exemplars_reach_the_model() {
        let rules = RuleStage::new();
        assert!(HAM_EXEMPLARS.iter().any(|text| !rules.matches(text)));
    }
}
