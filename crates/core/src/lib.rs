//! Inference domain for the medbot service.
//!
//! Pure text-classification logic: tokenization, fitted TF-IDF
//! vectorization, linear classification, and model artifact loading.
//! No HTTP concerns here; `medbot-api` owns the serving surface.

pub mod classifier;
pub mod error;
pub mod pipeline;
pub mod vectorizer;

pub use classifier::Classifier;
pub use error::ArtifactError;
pub use pipeline::InferencePipeline;
pub use vectorizer::{tokenize, SparseVector, Vectorizer};
