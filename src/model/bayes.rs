//! Multinomial Naive Bayes over TF-IDF features.
//!
//! Two-class generative model: class log priors plus alpha-smoothed
//! per-feature log likelihoods, with posteriors computed in log space and
//! normalized via log-sum-exp.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Number of classes (ham=0, spam=1).
pub const N_CLASSES: usize = 2;

/// A fitted Multinomial Naive Bayes classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNb {
    class_log_prior: Array1<f64>,
    /// Shape `(N_CLASSES, n_features)`.
    feature_log_prob: Array2<f64>,
    alpha: f64,
}

impl MultinomialNb {
    /// Fit the classifier on extracted feature rows and binary targets.
    ///
    /// `targets` must contain only 0 (ham) and 1 (spam), and both classes
    /// must be present; anything else is a degenerate training set.
    pub fn fit(rows: &[Array1<f64>], targets: &[usize], alpha: f64) -> Result<Self, Error> {
        if rows.is_empty() || rows.len() != targets.len() {
            return Err(Error::TrainingData(format!(
                "feature/target size mismatch: {} rows, {} targets",
                rows.len(),
                targets.len()
            )));
        }
        if !(alpha > 0.0) {
            return Err(Error::TrainingData(format!(
                "smoothing strength must be positive, got {}",
                alpha
            )));
        }
        if targets.iter().any(|t| *t >= N_CLASSES) {
            return Err(Error::TrainingData("target out of range".to_string()));
        }

        let n_features = rows[0].len();
        if rows.iter().any(|r| r.len() != n_features) {
            return Err(Error::TrainingData("ragged feature rows".to_string()));
        }

        let mut class_count = [0usize; N_CLASSES];
        let mut feature_count = Array2::<f64>::zeros((N_CLASSES, n_features));
        for (row, &target) in rows.iter().zip(targets) {
            class_count[target] += 1;
            for (j, value) in row.iter().enumerate() {
                feature_count[[target, j]] += value;
            }
        }

        if class_count.iter().any(|c| *c == 0) {
            return Err(Error::TrainingData(
                "both spam and ham examples are required".to_string(),
            ));
        }

        let n_examples = rows.len() as f64;
        let class_log_prior =
            Array1::from_iter(class_count.iter().map(|c| (*c as f64 / n_examples).ln()));

        let mut feature_log_prob = Array2::<f64>::zeros((N_CLASSES, n_features));
        for class in 0..N_CLASSES {
            let total: f64 = feature_count.row(class).sum();
            let denominator = total + alpha * n_features as f64;
            for j in 0..n_features {
                feature_log_prob[[class, j]] =
                    ((feature_count[[class, j]] + alpha) / denominator).ln();
            }
        }

        Ok(Self {
            class_log_prior,
            feature_log_prob,
            alpha,
        })
    }

    /// Class posteriors `[p_ham, p_spam]` for one feature vector.
    pub fn predict_proba(&self, features: &Array1<f64>) -> [f64; N_CLASSES] {
        let mut joint_log_likelihood = [0.0f64; N_CLASSES];
        for class in 0..N_CLASSES {
            let row = self.feature_log_prob.row(class);
            let dot: f64 = features.iter().zip(row.iter()).map(|(x, lp)| x * lp).sum();
            joint_log_likelihood[class] = self.class_log_prior[class] + dot;
        }

        // log-sum-exp normalization
        let max = joint_log_likelihood
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        let total: f64 = joint_log_likelihood.iter().map(|v| (v - max).exp()).sum();

        let mut probs = [0.0f64; N_CLASSES];
        for class in 0..N_CLASSES {
            probs[class] = (joint_log_likelihood[class] - max).exp() / total;
        }
        probs
    }

    /// Number of features this classifier was fitted on.
    pub fn feature_count(&self) -> usize {
        self.feature_log_prob.ncols()
    }

    /// The smoothing strength used at fit time.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}
