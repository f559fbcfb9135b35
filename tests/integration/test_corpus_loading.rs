use async_trait::async_trait;
use qabot::services::{CorpusLoader, EmbeddingError, EmbeddingProvider, FailOpenEmbedder};
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Fails for every text containing "broken", otherwise returns a unit vector
struct FlakyEmbedder {
    calls: AtomicUsize,
}

#[async_trait]
impl EmbeddingProvider for FlakyEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if text.contains("broken") {
            Err(EmbeddingError::ServerError {
                status: 500,
                message: "boom".to_string(),
            })
        } else {
            Ok(vec![1.0, 0.0, 0.0])
        }
    }

    fn dimension(&self) -> usize {
        3
    }
}

fn write(dir: &Path, name: &str, contents: &[u8]) {
    fs::write(dir.join(name), contents).unwrap();
}

#[tokio::test]
async fn test_mixed_directory() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "admissions.csv",
        b"Question,Answer\nWhat is the deadline,May 1\nHow do I apply,Online portal\n",
    );
    write(dir.path(), "canteen.csv", b"QUESTION,ANSWER\nCaf\xe9 hours,8 to 4\n");
    write(dir.path(), "invalid.csv", b"topic,text\nx,y\n");
    write(dir.path(), "readme.md", b"question,answer\nignored,yes\n");

    let loaded = CorpusLoader::new(dir.path()).load().await.unwrap();

    assert_eq!(loaded.corpus.len(), 3);
    assert_eq!(loaded.report.files_seen, 3);
    assert_eq!(loaded.report.files_loaded, 2);
    assert_eq!(loaded.report.files_skipped, 1);
    assert_eq!(loaded.corpus.get("café hours").unwrap().answer, "8 to 4");
    assert!(loaded.corpus.get("ignored").is_none());
}

#[tokio::test]
async fn test_embedding_failures_become_zero_vectors() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "faq.csv",
        b"question,answer\nworking question,yes\nbroken question,no\n",
    );

    let provider = Arc::new(FlakyEmbedder {
        calls: AtomicUsize::new(0),
    });
    let loader =
        CorpusLoader::new(dir.path()).with_embedder(FailOpenEmbedder::new(provider.clone()));

    let loaded = loader.load().await.unwrap();

    assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    assert_eq!(loaded.corpus.embedding_dimension(), Some(3));
    assert_eq!(loaded.report.embeddings_failed, 1);

    let broken = loaded.corpus.get("broken question").unwrap();
    assert_eq!(broken.embedding.as_deref(), Some(&[0.0, 0.0, 0.0][..]));
    let working = loaded.corpus.get("working question").unwrap();
    assert_eq!(working.embedding.as_deref(), Some(&[1.0, 0.0, 0.0][..]));
}

#[tokio::test]
async fn test_missing_data_directory_is_empty_corpus() {
    let dir = TempDir::new().unwrap();
    let loaded = CorpusLoader::new(dir.path().join("data")).load().await.unwrap();

    assert!(loaded.corpus.is_empty());
    assert_eq!(loaded.report.files_seen, 0);
}

#[tokio::test]
async fn test_quoted_fields_and_extra_columns() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "quoted.csv",
        b"id,question,category,answer\n1,\"Where is the library, exactly?\",campus,\"Building C, floor 2\"\n",
    );

    let loaded = CorpusLoader::new(dir.path()).load().await.unwrap();
    let entry = loaded
        .corpus
        .get("where is the library, exactly?")
        .unwrap();
    assert_eq!(entry.answer, "Building C, floor 2");
}
