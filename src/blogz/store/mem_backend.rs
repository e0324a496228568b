use super::SnapshotBackend;
use crate::error::{BlogzError, Result};
use crate::model::Article;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory snapshot for tests and embedding.
///
/// Starts out empty but present, so an `ArticleStore` can be opened on it
/// directly. Use [`MemBackend::missing`] to model a store that was never
/// initialized.
pub struct MemBackend {
    snapshot: Mutex<Option<Vec<Article>>>,
    simulate_write_error: AtomicBool,
    saves: AtomicUsize,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self::with_articles(Vec::new())
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            snapshot: Mutex::new(Some(articles)),
            simulate_write_error: AtomicBool::new(false),
            saves: AtomicUsize::new(0),
        }
    }

    pub fn missing() -> Self {
        Self {
            snapshot: Mutex::new(None),
            simulate_write_error: AtomicBool::new(false),
            saves: AtomicUsize::new(0),
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// The stored snapshot, bypassing the error simulation.
    pub fn snapshot(&self) -> Option<Vec<Article>> {
        self.snapshot.lock().ok().and_then(|guard| guard.clone())
    }
}

impl SnapshotBackend for MemBackend {
    fn load(&self) -> Result<Vec<Article>> {
        let guard = self
            .snapshot
            .lock()
            .map_err(|_| BlogzError::Store("memory snapshot lock poisoned".to_string()))?;
        guard
            .clone()
            .ok_or_else(|| BlogzError::Store("no snapshot in memory".to_string()))
    }

    fn save(&self, articles: &[Article]) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(BlogzError::Store("Simulated write error".to_string()));
        }
        let mut guard = self
            .snapshot
            .lock()
            .map_err(|_| BlogzError::Store("memory snapshot lock poisoned".to_string()))?;
        *guard = Some(articles.to_vec());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn exists(&self) -> bool {
        self.snapshot
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ArticleId;
    use crate::store::ArticleStore;

    /// Articles with ids 1..=count, titled "Article N".
    pub fn numbered_articles(count: u64) -> Vec<Article> {
        (1..=count)
            .map(|n| {
                Article::new(
                    ArticleId::new(n),
                    format!("Article {}", n),
                    format!("Body of article {}", n),
                )
            })
            .collect()
    }

    pub fn store_with(articles: Vec<Article>) -> ArticleStore<MemBackend> {
        ArticleStore::open(MemBackend::with_articles(articles)).unwrap()
    }

    pub fn empty_store() -> ArticleStore<MemBackend> {
        store_with(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ArticleId;

    #[test]
    fn save_then_load_returns_same_collection() {
        let backend = MemBackend::new();
        let articles = fixtures::numbered_articles(3);
        backend.save(&articles).unwrap();

        assert_eq!(backend.load().unwrap(), articles);
        assert_eq!(backend.save_count(), 1);
    }

    #[test]
    fn simulated_write_error_keeps_previous_snapshot() {
        let backend = MemBackend::with_articles(fixtures::numbered_articles(1));
        backend.set_simulate_write_error(true);

        let extra = Article::new(ArticleId::new(9), "x".into(), "y".into());
        assert!(backend.save(&[extra]).is_err());
        assert_eq!(backend.load().unwrap().len(), 1);
        assert_eq!(backend.save_count(), 0);
    }

    #[test]
    fn missing_snapshot_fails_to_load() {
        let backend = MemBackend::missing();
        assert!(!backend.exists());
        assert!(backend.load().is_err());
    }
}
