//! Rule-based spam detection stage.
//!
//! An ordered set of regex patterns for canonical spam phrasing. A hit on any
//! pattern short-circuits the pipeline with a fixed high-confidence spam
//! verdict; the statistical stage is never consulted on that path.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::pipeline::{Stage, Verdict};
use crate::Error;

/// Confidence assigned to rule-based verdicts. Rule hits are treated as
/// ground truth, not re-scored by the model.
pub const RULE_CONFIDENCE: f64 = 0.99;

/// Spam-indicator patterns, matched any-of against lower-cased text.
///
/// Kept as plain data so the set can be extended and tested independently of
/// the statistical path. Order mirrors checking cost: vocabulary first, then
/// currency amounts, then call-to-action phone numbers.
///
/// `congrat\w*` intentionally matches genuine congratulations too; those
/// messages classify as spam at [`RULE_CONFIDENCE`] without reaching the
/// model. Removing it moves them to the statistical path.
pub const RULE_PATTERNS: &[&str] = &[
    // Incentive vocabulary with common inflections (wins, winner, claimed...)
    r"\b(?:win|won|free|claim|click|prize|offer|congrat)\w*\b",
    // Urgency vocabulary, exact words only
    r"\b(?:urgent|limited|time|special)\b",
    // Currency amount: symbol followed by digits
    r"\$\d+",
    // Call-to-action phone number
    r"\b(?:call|text)\s+\d+",
];

static COMPILED_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    RULE_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("invalid built-in rule pattern"))
        .collect()
});

/// Stage that checks the message text against the spam rule patterns.
pub struct RuleStage {
    _private: (),
}

impl RuleStage {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Check whether any rule pattern matches the text.
    ///
    /// The text is lower-cased before matching. Empty input never matches.
    pub fn matches(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        COMPILED_PATTERNS.iter().any(|re| re.is_match(&lowered))
    }
}

impl Default for RuleStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for RuleStage {
    fn name(&self) -> &'static str {
        "rules"
    }

    fn classify(&self, text: &str) -> Result<Option<Verdict>, Error> {
        if self.matches(text) {
            return Ok(Some(Verdict::new(true, RULE_CONFIDENCE, "rules")));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage() -> RuleStage {
        RuleStage::new()
    }

    #[test]
    fn test_incentive_keywords_match() {
        assert!(stage().matches("You've won a free iPhone! Claim now!"));
        assert!(stage().matches("special offer just for you"));
        assert!(stage().matches("Winner announced"));
        assert!(stage().matches("Your prize awaits"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert!(stage().matches("URGENT: account review required"));
        assert!(stage().matches("FREE SHIPPING"));
    }

    #[test]
    fn test_inflections_match() {
        // congrat\w* covers congrats, congratulations, congratulating
        assert!(stage().matches("congrats on the new job"));
        assert!(stage().matches("Congratulations! You qualify."));
        assert!(stage().matches("claimed by thousands already"));
    }

    #[test]
    fn test_currency_amount_matches() {
        assert!(stage().matches("Send $100 to unlock your account"));
        assert!(stage().matches("you owe $5"));
        assert!(!stage().matches("the price is $ unknown"));
    }

    #[test]
    fn test_call_to_action_phone_matches() {
        assert!(stage().matches("call 5551234 to confirm"));
        assert!(stage().matches("Text 800123 for details"));
        assert!(!stage().matches("call me later"));
    }

    #[test]
    fn test_legitimate_text_does_not_match() {
        assert!(!stage().matches("Team meeting at 3 PM in conference room"));
        assert!(!stage().matches("Your package has been delivered"));
        assert!(!stage().matches("Dinner tonight?"));
    }

    #[test]
    fn test_empty_text_does_not_match() {
        assert!(!stage().matches(""));
        assert!(!stage().matches("   "));
    }

    #[test]
    fn test_stage_short_circuit_verdict() {
        let verdict = stage().classify("limited availability").unwrap().unwrap();
        assert!(verdict.is_spam);
        assert_eq!(verdict.confidence, RULE_CONFIDENCE);
        assert_eq!(verdict.source, "rules");
    }

    #[test]
    fn test_stage_passes_on_no_match() {
        assert!(stage().classify("lunch at noon").unwrap().is_none());
    }

    // Pinned product decision: "congrat*" stays in the rule set, so genuine
    // congratulations are rule-classified as spam without reaching the model.
    #[test]
    fn congratulations_rule_matches_even_when_genuine() {
        let verdict = stage()
            .classify("congratulations on your promotion!")
            .unwrap()
            .unwrap();
        assert!(verdict.is_spam);
        assert_eq!(verdict.confidence, RULE_CONFIDENCE);
    }
}
