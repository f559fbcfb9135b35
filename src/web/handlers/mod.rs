pub mod chat;
pub mod error;
pub mod health;
pub mod reload;

pub use chat::{chat, ChatRequest, ChatResponse};
pub use error::AppError;
pub use health::{home, ping, HOME_MESSAGE};
pub use reload::{reload_corpus, ReloadResponse};
