use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::info;

use crate::error::Result;
use crate::models::Corpus;
use crate::services::{CorpusLoader, LoadReport, Matcher};

pub type SharedState = Arc<AppState>;

#[derive(Debug, Clone)]
pub struct ReloadSummary {
    pub report: LoadReport,
    pub entries: usize,
    pub semantic: bool,
}

/// Request-handling state: the current corpus snapshot plus what is needed to rebuild it.
///
/// Handlers clone the `Arc<Corpus>` and drop the read lock immediately, so a
/// reload never blocks on in-flight matching and in-flight requests keep the
/// snapshot they started with.
pub struct AppState {
    corpus: RwLock<Arc<Corpus>>,
    matcher: Matcher,
    loader: CorpusLoader,
    reload_lock: Mutex<()>,
}

impl AppState {
    pub fn new(corpus: Corpus, matcher: Matcher, loader: CorpusLoader) -> Self {
        Self {
            corpus: RwLock::new(Arc::new(corpus)),
            matcher,
            loader,
            reload_lock: Mutex::new(()),
        }
    }

    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }

    pub async fn snapshot(&self) -> Arc<Corpus> {
        self.corpus.read().await.clone()
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Rebuild the corpus off to the side, then swap it in with a single write.
    pub async fn reload(&self) -> Result<ReloadSummary> {
        let _guard = self.reload_lock.lock().await;

        let loaded = self.loader.load().await?;
        let semantic = loaded.corpus.is_semantic();
        let entries = loaded.corpus.len();

        *self.corpus.write().await = Arc::new(loaded.corpus);

        info!(entries, "Corpus reloaded");
        Ok(ReloadSummary {
            report: loaded.report,
            entries,
            semantic,
        })
    }
}
