//! Classification pipeline.
//!
//! The pipeline runs a series of stages in order, returning as soon as any
//! stage produces a verdict. The default pipeline is the rule stage followed
//! by the statistical model stage.
//!
//! # Example
//!
//! ```no_run
//! use spamsift::{Pipeline, TrainedModel, DEFAULT_MODEL_PATH};
//!
//! let model = TrainedModel::load(DEFAULT_MODEL_PATH).unwrap();
//! let pipeline = Pipeline::with_model(model);
//!
//! let verdict = pipeline
//!     .classify("Special Offer", "Get 50% off on all products today only!", None)
//!     .unwrap();
//! assert!(verdict.is_spam);
//! ```

mod stage;
pub mod stages;
mod types;


pub use stage::Stage;
pub use stages::{ModelStage, RuleStage, RULE_CONFIDENCE, RULE_PATTERNS};
pub use types::{Label, Verdict};

use crate::model::TrainedModel;
use crate::Error;

/// A classification pipeline that runs stages in order until one decides.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create an empty pipeline (no stages).
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Create a pipeline with the given stages.
    pub fn with_stages(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) {
        self.stages.push(Box::new(stage));
    }

    /// Create a pipeline with the rule stage only (no statistical fallback).
    ///
    /// Useful for debugging the deterministic path; anything the rules do not
    /// match falls through to the terminal ham fallback.
    pub fn rules_only() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_stage(RuleStage::new());
        pipeline
    }

    /// Create the default serving pipeline: rules first, model fallback.
    pub fn with_model(model: TrainedModel) -> Self {
        let mut pipeline = Self::rules_only();
        pipeline.add_stage(ModelStage::new(model));
        pipeline
    }

    /// Classify one notification message.
    ///
    /// Title, message, and sender (if present) are joined into one text blob
    /// and trimmed. A blank blob is a validation failure
    /// ([`Error::EmptyInput`]), not a classifiable message.
    pub fn classify(
        &self,
        title: &str,
        message: &str,
        sender: Option<&str>,
    ) -> Result<Verdict, Error> {
        let blob = compose_text(title, message, sender);
        self.classify_text(&blob)
    }

    /// Classify an already-composed text blob.
    pub fn classify_text(&self, text: &str) -> Result<Verdict, Error> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }

        for stage in &self.stages {
            if let Some(verdict) = stage.classify(text)? {
                return Ok(verdict);
            }
        }

        // Terminal fallback; unreachable when a model stage is present.
        Ok(Verdict::new(false, 0.5, "fallback"))
    }

    /// Get the number of stages in the pipeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Join title, message, and optional sender into one classification blob.
pub fn compose_text(title: &str, message: &str, sender: Option<&str>) -> String {
    let blob = match sender {
        Some(sender) => format!("{} {} {}", title, message, sender),
        None => format!("{} {}", title, message),
    };
    blob.trim().to_string()
}
