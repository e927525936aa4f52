//! Built-in classification stages.
//!
//! This module contains the two stages used by the default pipeline:
//!
//! - `RuleStage`: deterministic regex pre-filter for canonical spam phrasing
//! - `ModelStage`: Naive Bayes fallback for everything the rules miss

mod model;
mod rules;

pub use model::ModelStage;
pub use rules::{RuleStage, RULE_CONFIDENCE, RULE_PATTERNS};
