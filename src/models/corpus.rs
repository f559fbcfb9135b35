use std::collections::HashMap;

use super::qa_entry::QaEntry;
use crate::error::{QaBotError, Result};

/// Immutable-after-load set of question/answer pairs.
///
/// Entries keep load order for the substring and similarity scans; `index`
/// maps each question to its slot for exact lookup. Re-inserting a question
/// replaces the answer in place and keeps the original position.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<QaEntry>,
    index: HashMap<String, usize>,
    embedding_dimension: Option<usize>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from raw pairs, dropping blank ones. Test and tooling helper.
    pub fn from_pairs<Q, A>(pairs: impl IntoIterator<Item = (Q, A)>) -> Self
    where
        Q: AsRef<str>,
        A: AsRef<str>,
    {
        let mut corpus = Self::new();
        for (question, answer) in pairs {
            if let Some(entry) = QaEntry::new(question.as_ref(), answer.as_ref()) {
                corpus.insert(entry);
            }
        }
        corpus
    }

    /// Insert an entry. Returns `true` when an existing question was overwritten.
    pub fn insert(&mut self, entry: QaEntry) -> bool {
        match self.index.get(&entry.question) {
            Some(&slot) => {
                self.entries[slot] = entry;
                true
            }
            None => {
                self.index.insert(entry.question.clone(), self.entries.len());
                self.entries.push(entry);
                false
            }
        }
    }

    pub fn get(&self, question: &str) -> Option<&QaEntry> {
        self.index.get(question).map(|&slot| &self.entries[slot])
    }

    pub fn entries(&self) -> &[QaEntry] {
        &self.entries
    }

    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.question.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dimension shared by every stored embedding, once semantic matching is enabled
    pub fn embedding_dimension(&self) -> Option<usize> {
        self.embedding_dimension
    }

    pub fn is_semantic(&self) -> bool {
        self.embedding_dimension.is_some()
    }

    /// Attach one embedding per entry, in load order.
    ///
    /// Every vector must have exactly `dimension` components; failed embeddings
    /// are expected to arrive as zero vectors rather than be missing.
    pub fn enable_semantic(&mut self, dimension: usize, embeddings: Vec<Vec<f32>>) -> Result<()> {
        if embeddings.len() != self.entries.len() {
            return Err(QaBotError::validation(
                "embeddings".to_string(),
                format!(
                    "expected {} vectors, got {}",
                    self.entries.len(),
                    embeddings.len()
                ),
            ));
        }

        if let Some(bad) = embeddings.iter().position(|v| v.len() != dimension) {
            return Err(QaBotError::validation(
                "embeddings".to_string(),
                format!(
                    "vector {bad} has {} components, expected {dimension}",
                    embeddings[bad].len()
                ),
            ));
        }

        for (entry, embedding) in self.entries.iter_mut().zip(embeddings) {
            entry.embedding = Some(embedding);
        }
        self.embedding_dimension = Some(dimension);

        Ok(())
    }
}
