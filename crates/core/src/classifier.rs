//! Linear classification over sparse TF-IDF features.

use serde::Deserialize;

use crate::error::ArtifactError;
use crate::vectorizer::SparseVector;

/// Fitted linear classifier.
///
/// `weights` holds one row per class, except the two-class case which
/// may carry a single row (the training side's binary convention): a
/// positive decision score selects `classes[1]`, otherwise
/// `classes[0]`.
#[derive(Debug, Clone, Deserialize)]
pub struct Classifier {
    /// Output labels, in training order.
    pub classes: Vec<String>,
    /// Weight rows (`n_rows x n_features`).
    pub weights: Vec<Vec<f64>>,
    /// Per-row intercepts.
    pub intercepts: Vec<f64>,
}

impl Classifier {
    /// Feature count expected by the weight rows.
    pub fn n_features(&self) -> usize {
        self.weights.first().map_or(0, Vec::len)
    }

    fn is_binary(&self) -> bool {
        self.classes.len() == 2 && self.weights.len() == 1
    }

    /// Check internal consistency of a freshly deserialized artifact.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.classes.is_empty() {
            return Err(ArtifactError::Invalid("classifier has no classes".into()));
        }
        if self.weights.len() != self.classes.len() && !self.is_binary() {
            return Err(ArtifactError::Invalid(format!(
                "classifier has {} classes but {} weight rows",
                self.classes.len(),
                self.weights.len()
            )));
        }
        if self.intercepts.len() != self.weights.len() {
            return Err(ArtifactError::Invalid(format!(
                "classifier has {} weight rows but {} intercepts",
                self.weights.len(),
                self.intercepts.len()
            )));
        }
        let n_features = self.n_features();
        if self.weights.iter().any(|row| row.len() != n_features) {
            return Err(ArtifactError::Invalid(
                "classifier weight rows have differing lengths".into(),
            ));
        }
        Ok(())
    }

    /// Decision score per weight row: `intercept + w . x`.
    ///
    /// Columns in `features` must be within this classifier's feature
    /// count; the pipeline guarantees that by cross-checking against
    /// the vectorizer at load time.
    pub fn decision_scores(&self, features: &SparseVector) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                intercept
                    + features
                        .entries
                        .iter()
                        .map(|&(column, value)| row[column] * value)
                        .sum::<f64>()
            })
            .collect()
    }

    /// Predict the label for a feature vector.
    ///
    /// Multiclass: argmax over decision scores, first maximum wins on
    /// ties. Binary single-row: positive score selects `classes[1]`.
    /// The empty vector scores intercept-only and still maps to a
    /// label.
    pub fn predict(&self, features: &SparseVector) -> &str {
        let scores = self.decision_scores(features);

        if self.is_binary() {
            let picked = if scores[0] > 0.0 { 1 } else { 0 };
            return &self.classes[picked];
        }

        let mut best = 0;
        for (index, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[best] {
                best = index;
            }
        }
        &self.classes[best]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
