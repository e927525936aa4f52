//! TF-IDF word n-gram vectorizer.
//!
//! Turns raw text into a fixed-width feature vector: lower-case, tokenize,
//! drop stop words, expand to word n-grams, weight term counts by smoothed
//! inverse document frequency, then L2-normalize. The fitted vocabulary and
//! IDF weights are part of the persisted model artifact.

use ndarray::Array1;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::model::stopwords::is_stop_word;
use crate::Error;

// Tokens are runs of two or more word characters.
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Feature-extraction configuration, fixed at fit time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerConfig {
    /// Inclusive n-gram range over tokens, e.g. `(1, 3)` for uni/bi/trigrams.
    pub ngram_range: (usize, usize),
    /// Cap on vocabulary size; highest corpus-frequency terms are kept.
    pub max_features: Option<usize>,
    /// Minimum number of documents a term must appear in.
    pub min_df: usize,
    /// Maximum fraction of documents a term may appear in.
    pub max_df: f64,
    /// Whether to drop stop words before building n-grams.
    pub strip_stop_words: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            ngram_range: (1, 3),
            max_features: Some(10_000),
            min_df: 5,
            max_df: 1.0,
            strip_stop_words: true,
        }
    }
}

/// A fitted TF-IDF vectorizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    config: VectorizerConfig,
    // BTreeMap keeps the persisted artifact byte-stable across runs.
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Fit the vocabulary and IDF weights over a corpus.
    ///
    /// Fails with [`Error::TrainingData`] when the corpus is empty or the
    /// document-frequency filters leave no terms.
    pub fn fit(texts: &[&str], config: VectorizerConfig) -> Result<Self, Error> {
        if texts.is_empty() {
            return Err(Error::TrainingData("empty corpus".to_string()));
        }
        if config.ngram_range.0 == 0 || config.ngram_range.0 > config.ngram_range.1 {
            return Err(Error::TrainingData(format!(
                "invalid ngram range {:?}",
                config.ngram_range
            )));
        }

        let n_docs = texts.len();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        let mut corpus_frequency: HashMap<String, u64> = HashMap::new();

        for text in texts {
            let counts = term_counts(text, &config);
            for (term, count) in counts {
                *document_frequency.entry(term.clone()).or_insert(0) += 1;
                *corpus_frequency.entry(term).or_insert(0) += count;
            }
        }

        let max_df_count = config.max_df * n_docs as f64;
        let mut candidates: Vec<(String, usize)> = document_frequency
            .into_iter()
            .filter(|(_, df)| *df >= config.min_df && (*df as f64) <= max_df_count)
            .collect();

        if candidates.is_empty() {
            return Err(Error::TrainingData(
                "document-frequency filters left an empty vocabulary".to_string(),
            ));
        }

        if let Some(cap) = config.max_features {
            if candidates.len() > cap {
                // Keep the terms most frequent in the corpus; ties break
                // alphabetically for a stable vocabulary.
                candidates.sort_by(|a, b| {
                    let fa = corpus_frequency[&a.0];
                    let fb = corpus_frequency[&b.0];
                    fb.cmp(&fa).then_with(|| a.0.cmp(&b.0))
                });
                candidates.truncate(cap);
            }
        }

        candidates.sort_by(|a, b| a.0.cmp(&b.0));

        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(candidates.len());
        for (index, (term, df)) in candidates.into_iter().enumerate() {
            // Smoothed IDF: ln((1 + n) / (1 + df)) + 1
            idf.push(((1.0 + n_docs as f64) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        Ok(Self {
            config,
            vocabulary,
            idf,
        })
    }

    /// Transform one text into an L2-normalized TF-IDF vector.
    ///
    /// Unknown terms are ignored; a text with no known terms maps to the zero
    /// vector.
    pub fn transform(&self, text: &str) -> Array1<f64> {
        let mut features = Array1::zeros(self.idf.len());

        for (term, count) in term_counts(text, &self.config) {
            if let Some(&index) = self.vocabulary.get(&term) {
                features[index] = count as f64 * self.idf[index];
            }
        }

        let norm = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            features.mapv_inplace(|v| v / norm);
        }
        features
    }

    /// Number of features in the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// The configuration this vectorizer was fitted with.
    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }
}

/// Count n-gram occurrences in one text.
fn term_counts(text: &str, config: &VectorizerConfig) -> HashMap<String, u64> {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|t| !config.strip_stop_words || !is_stop_word(t))
        .collect();

    let mut counts = HashMap::new();
    let (lo, hi) = config.ngram_range;
    for n in lo..=hi {
        if tokens.len() < n {
            break;
        }
        for window in tokens.windows(n) {
            *counts.entry(window.join(" ")).or_insert(0) += 1;
        }
    }
    counts
}
