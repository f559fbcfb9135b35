//! Text embeddings for the semantic matching tier.
//!
//! Embeddings come from a hosted feature-extraction API. Callers go through
//! [`FailOpenEmbedder`], which never fails: any provider error yields a zero
//! vector of the configured dimension.

pub mod client;
pub mod errors;
pub mod models;
pub mod provider;

pub use client::{EmbeddingConfig, InferenceApiProvider};
pub use errors::{DecodeError, EmbeddingError};
pub use models::{FeatureExtractionRequest, FeatureExtractionResponse};
pub use provider::{zero_vector, EmbeddingProvider, FailOpenEmbedder};
