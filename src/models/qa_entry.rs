use serde::{Deserialize, Serialize};

/// Normalize text the way stored questions are keyed: trimmed and lowercased.
///
/// Punctuation is kept, so `"deadline?"` and `"deadline"` are different keys.
pub fn normalize_question(text: &str) -> String {
    text.trim().to_lowercase()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QaEntry {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

impl QaEntry {
    /// Build a normalized entry, or `None` when either side is blank after trimming.
    pub fn new(question: &str, answer: &str) -> Option<Self> {
        let question = normalize_question(question);
        let answer = answer.trim();

        if question.is_empty() || answer.is_empty() {
            return None;
        }

        Some(Self {
            question,
            answer: answer.to_string(),
            embedding: None,
        })
    }
}
