//! Spamsift - Notification spam classifier
//!
//! A two-stage classifier that decides whether a short notification-style
//! message (title + body + optional sender) is spam.
//!
//! # Architecture
//!
//! The classifier uses a cascade approach:
//! 1. A deterministic rule stage (regex patterns for known spam phrasing)
//! 2. A Naive Bayes fallback trained offline on a labeled corpus
//!
//! A rule hit short-circuits with a fixed 0.99 confidence; everything else is
//! scored by the statistical model against a conservative 0.7 spam threshold.
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
//!     .classify("You Won!", "You've won a free iPhone! Claim now!", None)
//!     .unwrap();
//!
//! assert!(verdict.is_spam);
//! println!("confidence: {:.2}", verdict.confidence);
//! println!("decided by: {}", verdict.source);
//! ```

pub use error::Error;

// Cascade classification pipeline
pub mod pipeline;

// Trained model artifact (TF-IDF vectorizer + Multinomial Naive Bayes)
pub mod model;

// Offline training pipeline
pub mod train;

// Notification category tagging
pub mod category;

pub use category::{categorize, Category};
pub use model::{MultinomialNb, TfidfVectorizer, TrainedModel, VectorizerConfig};
pub use pipeline::{Label, ModelStage, Pipeline, RuleStage, Stage, Verdict};

/// Default location of the trained model artifact.
pub const DEFAULT_MODEL_PATH: &str = "models/spam_model.json";

mod error {
    use std::fmt;

    #[derive(Debug)]
    pub enum Error {
        Io(std::io::Error),
        Csv(csv::Error),
        Json(serde_json::Error),
        /// Classification requested on blank or whitespace-only text.
        EmptyInput,
        /// The trained artifact is missing or corrupt at startup.
        ModelLoad(String),
        /// The training corpus is missing, malformed, or degenerate.
        TrainingData(String),
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Error::Io(e) => write!(f, "IO error: {}", e),
                Error::Csv(e) => write!(f, "CSV error: {}", e),
                Error::Json(e) => write!(f, "JSON error: {}", e),
                Error::EmptyInput => write!(f, "empty text for classification"),
                Error::ModelLoad(e) => write!(f, "model load error: {}", e),
                Error::TrainingData(e) => write!(f, "training data error: {}", e),
            }
        }
    }

    impl std::error::Error for Error {}

    impl From<std::io::Error> for Error {
        fn from(e: std::io::Error) -> Self {
            Error::Io(e)
        }
    }

    impl From<csv::Error> for Error {
        fn from(e: csv::Error) -> Self {
            Error::Csv(e)
        }
    }

    impl From<serde_json::Error> for Error {
        fn from(e: serde_json::Error) -> Self {
            Error::Json(e)
        }
    }
}
