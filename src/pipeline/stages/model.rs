//! Statistical classification fallback stage.
//!
//! Wraps the trained Naive Bayes model as the terminal pipeline stage. Unlike
//! the rule stage it always produces a verdict, so it should be placed last.

use crate::model::TrainedModel;
use crate::pipeline::{Stage, Verdict};
use crate::Error;

/// Stage that scores the message with the trained statistical model.
pub struct ModelStage {
    model: TrainedModel,
}

impl ModelStage {
    /// Create a model stage from an already-loaded artifact.
    pub fn new(model: TrainedModel) -> Self {
        Self { model }
    }

    /// Score raw text: `(is_spam, confidence)`.
    ///
    /// The message is spam when the spam posterior strictly exceeds
    /// [`crate::model::SPAM_THRESHOLD`]. Confidence is the maximum class
    /// posterior, not the spam posterior.
    pub fn score(&self, text: &str) -> (bool, f64) {
        let prediction = self.model.predict(text);
        (prediction.label.as_target() == 1, prediction.confidence)
    }

    /// Access the underlying trained model.
    pub fn model(&self) -> &TrainedModel {
        &self.model
    }
}

impl Stage for ModelStage {
    fn name(&self) -> &'static str {
        "model"
    }

    fn classify(&self, text: &str) -> Result<Option<Verdict>, Error> {
        let (is_spam, confidence) = self.score(text);
        Ok(Some(Verdict::new(is_spam, confidence, "model")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::train::exemplars::{HAM_EXEMPLARS, SPAM_EXEMPLARS};
    use crate::{MultinomialNb, TfidfVectorizer, VectorizerConfig};

    // Fit a small real model from the curated exemplars; no artifact file
    // needed at test time.
    fn exemplar_stage() -> ModelStage {
        let texts: Vec<&str> = SPAM_EXEMPLARS
            .iter()
            .chain(HAM_EXEMPLARS.iter())
            .copied()
            .collect();
        let targets: Vec<usize> = SPAM_EXEMPLARS
            .iter()
            .map(|_| 1)
            .chain(HAM_EXEMPLARS.iter().map(|_| 0))
            .collect();

        let config = VectorizerConfig {
            min_df: 1,
            ..VectorizerConfig::default()
        };
        let vectorizer = TfidfVectorizer::fit(&texts, config).unwrap();
        let rows: Vec<_> = texts.iter().map(|t| vectorizer.transform(t)).collect();
        let classifier = MultinomialNb::fit(&rows, &targets, 0.05).unwrap();

        ModelStage::new(TrainedModel::new(vectorizer, classifier))
    }

    #[test]
    fn test_stage_always_returns_a_verdict() {
        let stage = exemplar_stage();
        let verdict = stage.classify("completely unrelated gibberish").unwrap();
        assert!(verdict.is_some());
        assert_eq!(verdict.unwrap().source, "model");
    }

    #[test]
    fn test_score_confidence_in_unit_range() {
        let stage = exemplar_stage();
        for text in ["hello there", "exclusive deal act fast", ""] {
            let (_, confidence) = stage.score(text);
            assert!((0.0..=1.0).contains(&confidence), "confidence {confidence}");
            assert!(!confidence.is_nan());
        }
    }

    #[test]
    fn test_score_is_deterministic() {
        let stage = exemplar_stage();
        let first = stage.score("project status update attached");
        let second = stage.score("project status update attached");
        assert_eq!(first, second);
    }

    #[test]
    fn test_exemplar_like_ham_scores_ham() {
        let stage = exemplar_stage();
        let (is_spam, confidence) = stage.score("team meeting moved to the conference room");
        assert!(!is_spam);
        assert!(confidence >= 0.5);
    }

    #[test]
    fn test_exemplar_like_spam_scores_spam() {
        let stage = exemplar_stage();
        // Wording shares distinctive tokens with spam exemplars only, and none
        // of the rule keywords, so this exercises the statistical path.
        let (is_spam, confidence) = stage.score("exclusive deal act fast verify your bank account");
        assert!(is_spam);
        assert!(confidence > 0.7);
    }
}
