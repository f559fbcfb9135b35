use serde::{Deserialize, Serialize};

use super::errors::DecodeError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FeatureExtractionRequest {
    pub inputs: String,
}

impl FeatureExtractionRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            inputs: text.into(),
        }
    }
}

/// The two body shapes the feature-extraction endpoint returns for one input.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum FeatureExtractionResponse {
    Flat(Vec<f32>),
    Wrapped(Vec<Vec<f32>>),
}

impl FeatureExtractionResponse {
    pub fn parse(body: &str) -> Result<Self, DecodeError> {
        serde_json::from_str(body).map_err(|e| DecodeError::UnexpectedShape {
            message: e.to_string(),
        })
    }

    /// Collapse either shape into one vector of exactly `dimension` components.
    pub fn into_vector(self, dimension: usize) -> Result<Vec<f32>, DecodeError> {
        let vector = match self {
            FeatureExtractionResponse::Flat(vector) => vector,
            FeatureExtractionResponse::Wrapped(mut vectors) => {
                if vectors.len() != 1 {
                    return Err(DecodeError::NotSingleton {
                        count: vectors.len(),
                    });
                }
                vectors.remove(0)
            }
        };

        if vector.len() != dimension {
            return Err(DecodeError::DimensionMismatch {
                expected: dimension,
                actual: vector.len(),
            });
        }

        Ok(vector)
    }
}
