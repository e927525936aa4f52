//! Core types for the classification pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The class assigned to a training or test example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Ham,
    Spam,
}

impl Label {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Ham => "ham",
            Label::Spam => "spam",
        }
    }

    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ham" => Some(Label::Ham),
            "spam" => Some(Label::Spam),
            _ => None,
        }
    }

    /// Binary target used by the Naive Bayes classifier (ham=0, spam=1).
    pub fn as_target(&self) -> usize {
        match self {
            Label::Ham => 0,
            Label::Spam => 1,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of classifying one message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    /// Whether the message was classified as spam.
    pub is_spam: bool,
    /// Probability mass assigned to the winning class (0.0 to 1.0).
    ///
    /// Note the asymmetry: for a ham verdict this is the ham posterior, for a
    /// spam verdict the spam posterior. It is not "probability of spam".
    pub confidence: f64,
    /// Name of the stage that produced this verdict.
    pub source: &'static str,
}

impl Verdict {
    /// Create a new verdict.
    pub fn new(is_spam: bool, confidence: f64, source: &'static str) -> Self {
        Self {
            is_spam,
            confidence,
            source,
        }
    }

    /// The label this verdict corresponds to.
    pub fn label(&self) -> Label {
        if self.is_spam {
            Label::Spam
        } else {
            Label::Ham
        }
    }
}
