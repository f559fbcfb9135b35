use serde::{Deserialize, Serialize};

/// Response body text when no tier produced an answer
pub const NO_ANSWER_RESPONSE: &str = "Sorry, I don't have an answer for that yet.";

/// Response body text when the question is blank
pub const EMPTY_QUESTION_RESPONSE: &str = "Please ask a question.";

/// Which matching tier produced an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStage {
    Exact,
    Substring,
    Semantic,
}

impl std::fmt::Display for MatchStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStage::Exact => write!(f, "exact"),
            MatchStage::Substring => write!(f, "substring"),
            MatchStage::Semantic => write!(f, "semantic"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnswerResult {
    Matched { answer: String, stage: MatchStage },
    NoMatch,
}

impl AnswerResult {
    pub fn matched(answer: impl Into<String>, stage: MatchStage) -> Self {
        AnswerResult::Matched {
            answer: answer.into(),
            stage,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, AnswerResult::Matched { .. })
    }

    pub fn answer(&self) -> Option<&str> {
        match self {
            AnswerResult::Matched { answer, .. } => Some(answer),
            AnswerResult::NoMatch => None,
        }
    }

    pub fn stage(&self) -> Option<MatchStage> {
        match self {
            AnswerResult::Matched { stage, .. } => Some(*stage),
            AnswerResult::NoMatch => None,
        }
    }

    /// Text shown to the user, substituting the fallback apology on no match
    pub fn into_response_text(self) -> String {
        match self {
            AnswerResult::Matched { answer, .. } => answer,
            AnswerResult::NoMatch => NO_ANSWER_RESPONSE.to_string(),
        }
    }
}
