use super::SnapshotBackend;
use crate::error::{BlogzError, Result};
use crate::model::{Article, ArticleId};
use crate::query;
use chrono::Utc;
use rand::Rng;
use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{info, warn};

/// The authoritative article collection.
///
/// Every mutation runs under the write lock. It builds the next collection,
/// writes it to the snapshot, and only then swaps it into memory. Readers
/// therefore only ever see states that are also on disk.
pub struct ArticleStore<B: SnapshotBackend> {
    backend: B,
    articles: RwLock<Vec<Article>>,
}

impl<B: SnapshotBackend> ArticleStore<B> {
    /// Load the snapshot from `backend` and take ownership of it.
    pub fn open(backend: B) -> Result<Self> {
        let articles = backend.load()?;
        ensure_unique_ids(&articles)?;
        info!(
            location = %backend.location(),
            count = articles.len(),
            "opened article store"
        );
        Ok(Self {
            backend,
            articles: RwLock::new(articles),
        })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn get_all(&self) -> Vec<Article> {
        self.read().clone()
    }

    pub fn get(&self, id: ArticleId) -> Option<Article> {
        self.read().iter().find(|a| a.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn search(&self, keyword: &str) -> Vec<Article> {
        query::filter(&self.read(), keyword)
    }

    /// Append a new article with a freshly minted id.
    ///
    /// Header and body are stored as given; rejecting empty fields is the
    /// caller's job.
    pub fn create(&self, header: String, body: String) -> Result<Article> {
        let mut articles = self.write();
        let id = mint_id(&articles);
        let article = Article::new(id, header, body);

        let mut next = articles.clone();
        next.push(article.clone());
        self.commit(&mut articles, next)
            .inspect_err(|e| warn!(%id, error = %e, "create not persisted"))?;

        info!(%id, "article created");
        Ok(article)
    }

    pub fn update(&self, id: ArticleId, header: String, body: String) -> Result<Article> {
        let mut articles = self.write();
        let pos = position(&articles, id)?;

        let mut next = articles.clone();
        next[pos].revise(header, body);
        let updated = next[pos].clone();
        self.commit(&mut articles, next)
            .inspect_err(|e| warn!(%id, error = %e, "update not persisted"))?;

        info!(%id, "article updated");
        Ok(updated)
    }

    /// Remove an article, returning it.
    pub fn delete(&self, id: ArticleId) -> Result<Article> {
        let mut articles = self.write();
        let pos = position(&articles, id)?;

        let mut next = articles.clone();
        let removed = next.remove(pos);
        self.commit(&mut articles, next)
            .inspect_err(|e| warn!(%id, error = %e, "delete not persisted"))?;

        info!(%id, "article deleted");
        Ok(removed)
    }

    /// Replace the in-memory collection with a fresh read of the snapshot.
    ///
    /// Leaves the current collection untouched if the snapshot cannot be read
    /// or holds duplicate ids.
    pub fn reload(&self) -> Result<usize> {
        let mut articles = self.write();
        let fresh = self.backend.load()?;
        ensure_unique_ids(&fresh)?;
        *articles = fresh;
        info!(count = articles.len(), "article store reloaded");
        Ok(articles.len())
    }

    /// Persist `next`, then make it the in-memory collection.
    ///
    /// Memory is only touched after `save` returns `Ok`, so an error or a
    /// panic inside the backend leaves the collection equal to the snapshot.
    fn commit(&self, articles: &mut Vec<Article>, next: Vec<Article>) -> Result<()> {
        self.backend.save(&next)?;
        *articles = next;
        Ok(())
    }

    // Memory is never modified before a backend call, so a poisoned lock still
    // guards the last persisted collection.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Article>> {
        self.articles.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Article>> {
        self.articles.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn position(articles: &[Article], id: ArticleId) -> Result<usize> {
    articles
        .iter()
        .position(|a| a.id == id)
        .ok_or(BlogzError::ArticleNotFound(id))
}

fn ensure_unique_ids(articles: &[Article]) -> Result<()> {
    let mut seen = HashSet::with_capacity(articles.len());
    for article in articles {
        if !seen.insert(article.id) {
            return Err(BlogzError::DuplicateId(article.id));
        }
    }
    Ok(())
}

/// Random id in `1..=now_millis`, redrawn until it is not already taken.
fn mint_id(articles: &[Article]) -> ArticleId {
    let taken: HashSet<ArticleId> = articles.iter().map(|a| a.id).collect();
    let ceiling = (Utc::now().timestamp_millis().max(0) as u64).max(1 << 20);
    let mut rng = rand::thread_rng();
    loop {
        let candidate = ArticleId::new(rng.gen_range(1..=ceiling));
        if !taken.contains(&candidate) {
            return candidate;
        }
    }
}
