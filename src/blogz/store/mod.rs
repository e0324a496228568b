//! # Storage Layer
//!
//! Articles are persisted as one snapshot of the whole collection. The
//! [`SnapshotBackend`] trait is the persistence adapter: it only knows how to
//! read and overwrite that snapshot. [`ArticleStore`] sits on top of it, owns
//! the in-memory collection and is the only component that mutates it.
//!
//! ## Implementations
//!
//! - [`fs_backend::FileBackend`]: production storage
//!   - Snapshot stored as a JSON array in `data.json` (configurable)
//!   - Writes go to a temp file that is renamed over the snapshot
//!
//! - [`mem_backend::MemBackend`]: in-process snapshot for tests
//!   - No filesystem
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! ```text
//! <root>/
//! ├── data.json     # All articles, in collection order
//! └── config.json   # Optional configuration
//! ```

use crate::error::Result;
use crate::model::Article;

pub mod article_store;
pub mod fs_backend;
pub mod mem_backend;

pub use article_store::ArticleStore;

/// Reads and writes the full article collection as a single snapshot.
///
/// Implementations must never leave a partially written snapshot behind:
/// after `save` returns, the snapshot is either the old collection or the
/// new one.
pub trait SnapshotBackend: Send + Sync {
    /// Read the whole collection. A missing or unreadable snapshot is an error.
    fn load(&self) -> Result<Vec<Article>>;

    /// Overwrite the snapshot with `articles`.
    fn save(&self, articles: &[Article]) -> Result<()>;

    /// Whether a snapshot currently exists.
    fn exists(&self) -> bool;

    /// Where the snapshot lives, for messages and logs.
    fn location(&self) -> String;
}
