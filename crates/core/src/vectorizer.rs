//! Text vectorization: tokenizer and fitted TF-IDF transform.
//!
//! The vectorizer artifact is exported by the training side (see the
//! `pipeline` module for the file format). Only the fitted behaviour is
//! reproduced here: count in-vocabulary tokens, scale counts by the
//! per-column idf weight, L2-normalize. Tokens outside the vocabulary
//! are dropped silently.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::error::ArtifactError;

// ---------------------------------------------------------------------------
// SparseVector
// ---------------------------------------------------------------------------

/// Sparse feature vector: `(column, value)` pairs sorted by column.
///
/// The empty vector (text with no in-vocabulary tokens) is valid and
/// scores intercept-only in the classifier.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparseVector {
    pub entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tokenization
// ---------------------------------------------------------------------------

/// Split raw text into lowercase tokens.
///
/// A token is a maximal run of alphanumeric/underscore characters of
/// at least two characters, matching the analyzer the vocabulary was
/// built with. Everything else (punctuation, whitespace) separates
/// tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Vectorizer
// ---------------------------------------------------------------------------

/// Fitted TF-IDF vectorizer.
#[derive(Debug, Clone, Deserialize)]
pub struct Vectorizer {
    /// Term to feature-column mapping.
    pub vocabulary: HashMap<String, usize>,
    /// Per-column inverse document frequency weights.
    pub idf: Vec<f64>,
}

impl Vectorizer {
    /// Number of feature columns.
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Check internal consistency of a freshly deserialized artifact.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.vocabulary.is_empty() {
            return Err(ArtifactError::Invalid(
                "vectorizer vocabulary is empty".into(),
            ));
        }
        for (term, &column) in &self.vocabulary {
            if column >= self.idf.len() {
                return Err(ArtifactError::Invalid(format!(
                    "vocabulary term '{term}' maps to column {column}, but only {} idf weights are present",
                    self.idf.len()
                )));
            }
        }
        Ok(())
    }

    /// Transform raw text into a TF-IDF feature vector.
    ///
    /// Token counts are looked up against the vocabulary (unknown
    /// tokens are dropped), scaled by the column's idf weight, then
    /// L2-normalized. Text with no in-vocabulary tokens transforms to
    /// the empty vector.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokenize(text) {
            if let Some(&column) = self.vocabulary.get(&token) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(column, count)| (column, count * self.idf[column]))
            .collect();

        let norm: f64 = entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for entry in &mut entries {
                entry.1 /= norm;
            }
        }

        SparseVector { entries }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
