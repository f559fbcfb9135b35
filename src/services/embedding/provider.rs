use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use super::errors::EmbeddingError;

/// Source of fixed-length text embeddings, one call per text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Length of every vector this provider returns
    fn dimension(&self) -> usize;
}

pub fn zero_vector(dimension: usize) -> Vec<f32> {
    vec![0.0; dimension]
}

/// Wraps a provider so that every failure becomes the zero-vector sentinel.
///
/// A zero vector scores 0.0 against everything, so a failed embedding ranks
/// last instead of aborting corpus loading or a live query.
#[derive(Clone)]
pub struct FailOpenEmbedder {
    inner: Arc<dyn EmbeddingProvider>,
}

impl FailOpenEmbedder {
    pub fn new(inner: Arc<dyn EmbeddingProvider>) -> Self {
        Self { inner }
    }

    pub fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    pub async fn embed_or_zero(&self, text: &str) -> Vec<f32> {
        let dimension = self.dimension();

        match self.inner.embed(text).await {
            Ok(vector) if vector.len() == dimension => vector,
            Ok(vector) => {
                warn!(
                    expected = dimension,
                    actual = vector.len(),
                    "Embedding has wrong dimension, using zero vector"
                );
                zero_vector(dimension)
            }
            Err(e) => {
                warn!(error = %e, "Embedding request failed, using zero vector");
                zero_vector(dimension)
            }
        }
    }
}

impl std::fmt::Debug for FailOpenEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FailOpenEmbedder")
            .field("dimension", &self.dimension())
            .finish()
    }
}
