//! Offline training pipeline.
//!
//! A single-shot batch job: load the labeled corpus, balance it, inject the
//! curated exemplars, fit the TF-IDF vectorizer and Naive Bayes classifier on
//! a train split, evaluate on the held-out split, persist the artifact, and
//! run the fixed regression suite through the full pipeline.
//!
//! Not part of the request path; the serving process only ever loads the
//! artifact this module produces.

pub mod corpus;
pub mod exemplars;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::PathBuf;

use crate::model::{MultinomialNb, TfidfVectorizer, TrainedModel, VectorizerConfig};
use crate::pipeline::{Label, Pipeline};
use crate::Error;

use exemplars::{HAM_EXEMPLARS, SPAM_EXEMPLARS};

/// Configuration for one training run.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// CSV corpus with `text` and `label` columns.
    pub corpus_path: PathBuf,
    /// Where to write the trained artifact.
    pub artifact_path: PathBuf,
    /// Down-sample ham to this many examples per spam example.
    pub ham_ratio: usize,
    /// Fraction of the data held out for evaluation.
    pub test_fraction: f64,
    /// RNG seed for down-sampling and the train/test shuffle.
    pub seed: u64,
    /// Feature-extraction configuration.
    pub vectorizer: VectorizerConfig,
    /// Naive Bayes smoothing strength.
    pub alpha: f64,
}

impl TrainConfig {
    /// Default configuration for the given corpus and artifact paths.
    pub fn new(corpus_path: impl Into<PathBuf>, artifact_path: impl Into<PathBuf>) -> Self {
        Self {
            corpus_path: corpus_path.into(),
            artifact_path: artifact_path.into(),
            ham_ratio: 2,
            test_fraction: 0.2,
            seed: 42,
            vectorizer: VectorizerConfig::default(),
            alpha: 0.05,
        }
    }
}

/// Evaluation metrics on the held-out split; spam is the positive class.
#[derive(Debug, Clone)]
pub struct Metrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub test_examples: usize,
}

impl Metrics {
    /// Compute from (expected, predicted) pairs. Zero denominators yield 0.
    fn compute(pairs: &[(Label, Label)]) -> Self {
        let mut true_positive = 0usize;
        let mut false_positive = 0usize;
        let mut false_negative = 0usize;
        let mut correct = 0usize;

        for (expected, predicted) in pairs {
            if expected == predicted {
                correct += 1;
            }
            match (expected, predicted) {
                (Label::Spam, Label::Spam) => true_positive += 1,
                (Label::Ham, Label::Spam) => false_positive += 1,
                (Label::Spam, Label::Ham) => false_negative += 1,
                (Label::Ham, Label::Ham) => {}
            }
        }

        let ratio = |numerator: usize, denominator: usize| {
            if denominator == 0 {
                0.0
            } else {
                numerator as f64 / denominator as f64
            }
        };

        let precision = ratio(true_positive, true_positive + false_positive);
        let recall = ratio(true_positive, true_positive + false_negative);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        Self {
            accuracy: ratio(correct, pairs.len()),
            precision,
            recall,
            f1,
            test_examples: pairs.len(),
        }
    }
}

/// Hand-labeled tricky messages run through the fitted pipeline after every
/// training run. This is a manual acceptance gate for the shipped artifact,
/// not an automated test.
pub const REGRESSION_SUITE: &[(&str, Label)] = &[
    ("You've won a free iPhone!", Label::Spam),
    ("Claim your prize now", Label::Spam),
    ("Special Offer: Get 50% off on all products today only!", Label::Spam),
    ("URGENT: Your account has been compromised", Label::Spam),
    // Rule-matched via congrat*; see RULE_PATTERNS.
    ("Congratulations on your promotion!", Label::Spam),
    ("Team meeting at 3pm", Label::Ham),
    ("Project status update", Label::Ham),
    ("Your package has been delivered", Label::Ham),
];

/// Outcome of one regression-suite example.
#[derive(Debug, Clone)]
pub struct RegressionOutcome {
    pub text: &'static str,
    pub expected: Label,
    pub predicted: Label,
    pub confidence: f64,
    pub source: &'static str,
}

impl RegressionOutcome {
    pub fn passed(&self) -> bool {
        self.expected == self.predicted
    }
}

/// Everything a training run reports.
#[derive(Debug)]
pub struct TrainReport {
    /// Spam examples used for fitting (after augmentation).
    pub spam_count: usize,
    /// Ham examples used for fitting (after balancing and augmentation).
    pub ham_count: usize,
    /// Corpus rows dropped for unknown labels.
    pub skipped_rows: usize,
    pub train_examples: usize,
    pub vocabulary_size: usize,
    pub metrics: Metrics,
    pub regression: Vec<RegressionOutcome>,
}

impl TrainReport {
    /// True when every regression example predicted its expected label.
    pub fn regression_passed(&self) -> bool {
        self.regression.iter().all(RegressionOutcome::passed)
    }
}

/// Run the full training pipeline and persist the artifact.
pub fn run(config: &TrainConfig) -> Result<TrainReport, Error> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let corpus = corpus::load(&config.corpus_path)?;
    let skipped_rows = corpus.skipped_rows;
    let (mut spam, ham) = corpus.partition();

    if spam.is_empty() {
        return Err(Error::TrainingData(
            "corpus contains no spam examples".to_string(),
        ));
    }
    let mut ham = downsample(ham, spam.len() * config.ham_ratio, &mut rng);
    if ham.is_empty() {
        return Err(Error::TrainingData(
            "corpus contains no ham examples".to_string(),
        ));
    }

    spam.extend(SPAM_EXEMPLARS.iter().map(|s| s.to_string()));
    ham.extend(HAM_EXEMPLARS.iter().map(|s| s.to_string()));
    let spam_count = spam.len();
    let ham_count = ham.len();

    // Textual labels to binary targets, then one shuffle for the split.
    let mut examples: Vec<(String, usize)> = spam
        .into_iter()
        .map(|text| (text, Label::Spam.as_target()))
        .chain(ham.into_iter().map(|text| (text, Label::Ham.as_target())))
        .collect();
    examples.shuffle(&mut rng);

    let test_len = (examples.len() as f64 * config.test_fraction).round() as usize;
    let test_len = test_len.min(examples.len().saturating_sub(2));
    let (test, train) = examples.split_at(test_len);

    let train_texts: Vec<&str> = train.iter().map(|(text, _)| text.as_str()).collect();
    let train_targets: Vec<usize> = train.iter().map(|(_, target)| *target).collect();

    let vectorizer = TfidfVectorizer::fit(&train_texts, config.vectorizer.clone())?;
    let rows: Vec<_> = train_texts.iter().map(|t| vectorizer.transform(t)).collect();
    let classifier = MultinomialNb::fit(&rows, &train_targets, config.alpha)?;

    let vocabulary_size = vectorizer.vocabulary_size();
    let model = TrainedModel::new(vectorizer, classifier);

    let pairs: Vec<(Label, Label)> = test
        .iter()
        .map(|(text, target)| {
            let expected = if *target == 1 { Label::Spam } else { Label::Ham };
            (expected, model.predict(text).label)
        })
        .collect();
    let metrics = Metrics::compute(&pairs);

    model.save(&config.artifact_path)?;

    let regression = run_regression_suite(model)?;

    Ok(TrainReport {
        spam_count,
        ham_count,
        skipped_rows,
        train_examples: train.len(),
        vocabulary_size,
        metrics,
        regression,
    })
}

/// Down-sample to at most `cap` examples, keeping a random subset.
fn downsample(mut texts: Vec<String>, cap: usize, rng: &mut StdRng) -> Vec<String> {
    texts.shuffle(rng);
    texts.truncate(cap);
    texts
}

/// Run the fixed regression suite through the full pipeline (rules + model).
fn run_regression_suite(model: TrainedModel) -> Result<Vec<RegressionOutcome>, Error> {
    let pipeline = Pipeline::with_model(model);
    REGRESSION_SUITE
        .iter()
        .map(|&(text, expected)| {
            let verdict = pipeline.classify_text(text)?;
            Ok(RegressionOutcome {
                text,
                expected,
                predicted: verdict.label(),
                confidence: verdict.confidence,
                source: verdict.source,
            })
        })
        .collect()
}
