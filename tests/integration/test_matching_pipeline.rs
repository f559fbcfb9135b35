use async_trait::async_trait;
use qabot::models::{AnswerResult, Corpus, MatchStage};
use qabot::services::{EmbeddingError, EmbeddingProvider, FailOpenEmbedder, MatchError, Matcher};
use std::sync::Arc;

struct FixedEmbedder(Vec<f32>);

#[async_trait]
impl EmbeddingProvider for FixedEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self.0.clone())
    }

    fn dimension(&self) -> usize {
        self.0.len()
    }
}

struct DownEmbedder;

#[async_trait]
impl EmbeddingProvider for DownEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err(EmbeddingError::Timeout { timeout_ms: 10_000 })
    }

    fn dimension(&self) -> usize {
        2
    }
}

fn matcher_with(provider: impl EmbeddingProvider + 'static) -> Matcher {
    Matcher::new(Some(FailOpenEmbedder::new(Arc::new(provider))))
}

#[tokio::test]
async fn test_every_stored_question_matches_exactly() {
    let pairs: Vec<(String, String)> = (0..200)
        .map(|i| (format!("question number {i:03}"), format!("answer {i}")))
        .collect();
    let corpus = Corpus::from_pairs(pairs.clone());
    let matcher = Matcher::default();

    for (question, answer) in &pairs {
        let result = matcher.answer(&corpus, question).await.unwrap();
        assert_eq!(result, AnswerResult::matched(answer.as_str(), MatchStage::Exact));
    }
}

#[tokio::test]
async fn test_whitespace_only_is_validation_failure() {
    let corpus = Corpus::from_pairs([("a", "b")]);
    for input in ["", " ", "\t\n "] {
        assert_eq!(
            Matcher::default().answer(&corpus, input).await,
            Err(MatchError::EmptyQuestion)
        );
    }
}

#[tokio::test]
async fn test_substring_first_hit_beats_better_semantic_candidate() {
    let mut corpus = Corpus::from_pairs([("fees", "See bursar"), ("tuition fees", "5000 per term")]);
    // The later entry is a perfect semantic match for the query embedding
    corpus
        .enable_semantic(2, vec![vec![0.0, 1.0], vec![1.0, 0.0]])
        .unwrap();
    let matcher = matcher_with(FixedEmbedder(vec![1.0, 0.0]));

    let result = matcher.answer(&corpus, "what are the tuition fees").await.unwrap();
    assert_eq!(result, AnswerResult::matched("See bursar", MatchStage::Substring));
}

#[tokio::test]
async fn test_exact_beats_substring() {
    let corpus = Corpus::from_pairs([("deadline", "Generic"), ("the deadline", "Specific")]);
    let result = Matcher::default()
        .answer(&corpus, "The Deadline")
        .await
        .unwrap();
    assert_eq!(result, AnswerResult::matched("Specific", MatchStage::Exact));
}

#[tokio::test]
async fn test_scaling_embeddings_does_not_change_winner() {
    let embeddings = vec![vec![0.9, 0.1], vec![0.6, 0.8]];
    let scaled: Vec<Vec<f32>> = embeddings
        .iter()
        .map(|v| v.iter().map(|x| x * 37.5).collect())
        .collect();

    for set in [embeddings, scaled] {
        let mut corpus = Corpus::from_pairs([("alpha", "A"), ("beta", "B")]);
        corpus.enable_semantic(2, set).unwrap();
        let matcher = matcher_with(FixedEmbedder(vec![5.0, 6.0]));

        let result = matcher.answer(&corpus, "gamma").await.unwrap();
        assert_eq!(result.answer(), Some("B"));
    }
}

#[tokio::test]
async fn test_provider_outage_never_errors() {
    let mut corpus = Corpus::from_pairs([("alpha", "A"), ("beta", "B")]);
    corpus
        .enable_semantic(2, vec![vec![0.0, 0.0], vec![1.0, 0.0]])
        .unwrap();

    let result = matcher_with(DownEmbedder).answer(&corpus, "gamma").await;
    assert_eq!(result, Ok(AnswerResult::NoMatch));
}

#[tokio::test]
async fn test_deadline_scenario() {
    let corpus = Corpus::from_pairs([
        ("what is the deadline", "May 1"),
        ("how do i apply", "Online portal"),
    ]);

    let result = Matcher::default()
        .answer(&corpus, "What Is The Deadline?")
        .await
        .unwrap();
    assert_eq!(result, AnswerResult::matched("May 1", MatchStage::Substring));
}
