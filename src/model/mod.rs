//! Trained model artifact.
//!
//! A [`TrainedModel`] binds a fitted TF-IDF vectorizer to a fitted Naive
//! Bayes classifier. It is produced by the offline training pipeline,
//! persisted as a single JSON artifact, loaded once at process start, and
//! shared read-only by all classification calls.

mod bayes;
mod stopwords;
mod vectorizer;

pub use bayes::{MultinomialNb, N_CLASSES};
pub use stopwords::STOP_WORDS;
pub use vectorizer::{TfidfVectorizer, VectorizerConfig};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::pipeline::Label;
use crate::Error;

/// Spam decision threshold on the spam posterior.
///
/// Deliberately above the naive 0.5 boundary to suppress false positives on
/// ambiguous legitimate messages. A posterior of exactly 0.7 is ham.
pub const SPAM_THRESHOLD: f64 = 0.7;

/// Decide the label for a spam posterior.
pub fn decide(spam_posterior: f64) -> Label {
    if spam_posterior > SPAM_THRESHOLD {
        Label::Spam
    } else {
        Label::Ham
    }
}

/// Output of one statistical prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Label chosen by the thresholded spam posterior.
    pub label: Label,
    /// Maximum class posterior (not necessarily the spam posterior).
    pub confidence: f64,
    /// Posterior probability of the spam class.
    pub spam_posterior: f64,
}

/// The persisted statistical classifier: vectorizer + classifier parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainedModel {
    vectorizer: TfidfVectorizer,
    classifier: MultinomialNb,
}

impl TrainedModel {
    /// Bind a fitted vectorizer and classifier into one artifact.
    pub fn new(vectorizer: TfidfVectorizer, classifier: MultinomialNb) -> Self {
        Self {
            vectorizer,
            classifier,
        }
    }

    /// Score one raw text.
    ///
    /// The vectorizer performs its own normalization; callers pass the text
    /// as-is. Texts with no known terms fall back to the class priors.
    pub fn predict(&self, text: &str) -> Prediction {
        let features = self.vectorizer.transform(text);
        let probs = self.classifier.predict_proba(&features);
        let spam_posterior = probs[1];
        Prediction {
            label: decide(spam_posterior),
            confidence: f64::max(probs[0], probs[1]),
            spam_posterior,
        }
    }

    /// Load the artifact from disk.
    ///
    /// A missing or corrupt artifact is a fatal startup error
    /// ([`Error::ModelLoad`]); the classification subsystem is unusable
    /// without it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::ModelLoad(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::ModelLoad(format!("{}: {}", path.display(), e)))
    }

    /// Persist the artifact to disk as one JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string(self)?;
        fs::write(path, raw)?;
        Ok(())
    }

    /// Access the fitted vectorizer.
    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    /// Access the fitted classifier.
    pub fn classifier(&self) -> &MultinomialNb {
        &self.classifier
    }
}
