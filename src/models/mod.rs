pub mod answer;
pub mod corpus;
pub mod qa_entry;

pub use answer::{AnswerResult, MatchStage, EMPTY_QUESTION_RESPONSE, NO_ANSWER_RESPONSE};
pub use corpus::Corpus;
pub use qa_entry::{normalize_question, QaEntry};
