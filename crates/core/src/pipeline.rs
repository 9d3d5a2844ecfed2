//! Artifact loading and the end-to-end inference pipeline.
//!
//! Two JSON artifacts are exported by the training side and read once
//! at startup:
//!
//! `vectorizer.json`
//! ```json
//! { "vocabulary": { "fever": 0 }, "idf": [1.2] }
//! ```
//!
//! `disease_model.json`
//! ```json
//! { "classes": ["flu", "measles"], "weights": [[0.8], [-0.8]], "intercepts": [0.1, -0.1] }
//! ```
//!
//! Both artifacts are validated individually and cross-checked for
//! feature-count agreement before the pipeline is handed to the
//! server.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::classifier::Classifier;
use crate::error::ArtifactError;
use crate::vectorizer::Vectorizer;

/// A loaded vectorizer/classifier pair ready to serve predictions.
#[derive(Debug, Clone)]
pub struct InferencePipeline {
    vectorizer: Vectorizer,
    classifier: Classifier,
}

/// Read and deserialize one JSON artifact.
fn load_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let raw = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl InferencePipeline {
    /// Assemble a pipeline from already-deserialized parts, validating
    /// each and cross-checking that the classifier was trained on this
    /// vectorizer's feature space.
    pub fn new(vectorizer: Vectorizer, classifier: Classifier) -> Result<Self, ArtifactError> {
        vectorizer.validate()?;
        classifier.validate()?;

        if classifier.n_features() != vectorizer.n_features() {
            return Err(ArtifactError::Invalid(format!(
                "classifier expects {} features but the vectorizer produces {}",
                classifier.n_features(),
                vectorizer.n_features()
            )));
        }

        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Load both artifacts from disk and assemble the pipeline.
    pub fn from_files(vectorizer_path: &Path, model_path: &Path) -> Result<Self, ArtifactError> {
        let vectorizer: Vectorizer = load_artifact(vectorizer_path)?;
        let classifier: Classifier = load_artifact(model_path)?;
        Self::new(vectorizer, classifier)
    }

    /// Predict the disease label for a raw symptom description.
    pub fn predict(&self, symptoms: &str) -> &str {
        let features = self.vectorizer.transform(symptoms);
        self.classifier.predict(&features)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
