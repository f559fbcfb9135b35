//! Three-tier question matching: exact key, substring containment, then
//! embedding similarity above a fixed threshold. Tiers run in that order and
//! the first one that produces an answer wins.

use thiserror::Error;
use tracing::debug;

use crate::models::{normalize_question, AnswerResult, Corpus, MatchStage, QaEntry};
use crate::services::embedding::FailOpenEmbedder;

/// Minimum cosine similarity (exclusive) for a semantic match
pub const SIMILARITY_THRESHOLD: f32 = 0.6;

#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error("No question supplied")]
    EmptyQuestion,

    #[error("Semantic matching failed: {message}")]
    Semantic { message: String },
}

/// Cosine similarity of two vectors; 0.0 when either has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}

pub fn exceeds_threshold(score: f32, threshold: f32) -> bool {
    score > threshold
}

pub fn exact_match<'a>(corpus: &'a Corpus, query: &str) -> Option<&'a QaEntry> {
    corpus.get(query)
}

/// First entry, in load order, whose question contains the query or is contained by it.
pub fn substring_match<'a>(corpus: &'a Corpus, query: &str) -> Option<&'a QaEntry> {
    corpus
        .entries()
        .iter()
        .find(|entry| query.contains(entry.question.as_str()) || entry.question.contains(query))
}

/// Highest-scoring entry with a strictly positive score; ties keep the earliest.
pub fn best_semantic_match<'a>(
    corpus: &'a Corpus,
    query_embedding: &[f32],
) -> Option<(&'a QaEntry, f32)> {
    let mut best: Option<&QaEntry> = None;
    let mut best_score = 0.0_f32;

    for entry in corpus.entries() {
        let Some(embedding) = entry.embedding.as_deref() else {
            continue;
        };
        let score = cosine_similarity(query_embedding, embedding);
        if score > best_score {
            best_score = score;
            best = Some(entry);
        }
    }

    best.map(|entry| (entry, best_score))
}

#[derive(Debug, Clone)]
pub struct Matcher {
    embedder: Option<FailOpenEmbedder>,
    threshold: f32,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Matcher {
    /// Without an embedder only the exact and substring tiers run.
    pub fn new(embedder: Option<FailOpenEmbedder>) -> Self {
        Self {
            embedder,
            threshold: SIMILARITY_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn embedder(&self) -> Option<&FailOpenEmbedder> {
        self.embedder.as_ref()
    }

    pub async fn answer(&self, corpus: &Corpus, query: &str) -> Result<AnswerResult, MatchError> {
        let query = normalize_question(query);
        if query.is_empty() {
            return Err(MatchError::EmptyQuestion);
        }

        if let Some(entry) = exact_match(corpus, &query) {
            return Ok(AnswerResult::matched(&entry.answer, MatchStage::Exact));
        }

        if let Some(entry) = substring_match(corpus, &query) {
            debug!(question = %entry.question, "Substring match");
            return Ok(AnswerResult::matched(&entry.answer, MatchStage::Substring));
        }

        self.semantic_match(corpus, &query).await
    }

    async fn semantic_match(&self, corpus: &Corpus, query: &str) -> Result<AnswerResult, MatchError> {
        let (Some(embedder), Some(dimension)) = (&self.embedder, corpus.embedding_dimension())
        else {
            return Ok(AnswerResult::NoMatch);
        };

        let query_embedding = embedder.embed_or_zero(query).await;
        if query_embedding.len() != dimension {
            return Err(MatchError::Semantic {
                message: format!(
                    "query embedding has {} components but the corpus uses {dimension}",
                    query_embedding.len()
                ),
            });
        }

        match best_semantic_match(corpus, &query_embedding) {
            Some((entry, score)) if exceeds_threshold(score, self.threshold) => {
                debug!(question = %entry.question, score, "Semantic match");
                Ok(AnswerResult::matched(&entry.answer, MatchStage::Semantic))
            }
            Some((entry, score)) => {
                debug!(question = %entry.question, score, "Best semantic score below threshold");
                Ok(AnswerResult::NoMatch)
            }
            None => Ok(AnswerResult::NoMatch),
        }
    }
}
