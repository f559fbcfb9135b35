pub mod corpus_loader;
pub mod embedding;
pub mod matcher;

pub use corpus_loader::{CorpusLoader, LoadReport, LoadedCorpus, TextEncoding};
pub use embedding::{
    EmbeddingConfig, EmbeddingError, EmbeddingProvider, FailOpenEmbedder, InferenceApiProvider,
};
pub use matcher::{cosine_similarity, MatchError, Matcher, SIMILARITY_THRESHOLD};
