//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every UI (the CLI today; an HTTP router would sit in the
//! same place).
//!
//! It dispatches to `commands/*.rs` and returns `Result<CmdResult>`. It does no
//! printing and holds no business logic. Ids arrive as text, exactly as a
//! request path or command-line argument would carry them, and are converted
//! by the commands.
//!
//! `BlogzApi<B: SnapshotBackend>` is generic over the persistence backend:
//! - Production: `BlogzApi<FileBackend>`
//! - Testing: `BlogzApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::store::{ArticleStore, SnapshotBackend};
use std::path::Path;

pub struct BlogzApi<B: SnapshotBackend> {
    store: ArticleStore<B>,
}

impl<B: SnapshotBackend> BlogzApi<B> {
    pub fn new(store: ArticleStore<B>) -> Self {
        Self { store }
    }

    /// Open the snapshot held by `backend`.
    pub fn open(backend: B) -> Result<Self> {
        Ok(Self::new(ArticleStore::open(backend)?))
    }

    pub fn list_articles(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn create_article(&self, header: String, body: String) -> Result<CmdResult> {
        commands::create::run(&self.store, header, body)
    }

    pub fn update_article(&self, id: &str, header: String, body: String) -> Result<CmdResult> {
        commands::update::run(&self.store, id, header, body)
    }

    pub fn delete_article(&self, id: &str) -> Result<CmdResult> {
        commands::delete::run(&self.store, id)
    }

    pub fn search_articles(&self, keyword: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, keyword)
    }

    pub fn view_article(&self, id: &str) -> Result<CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn store(&self) -> &ArticleStore<B> {
        &self.store
    }
}

/// Create an empty snapshot if none exists. Runs before any store is opened.
pub fn init_store<B: SnapshotBackend>(backend: &B) -> Result<CmdResult> {
    commands::init::run(backend)
}

/// Read or change the configuration stored under `root`.
pub fn configure(root: &Path, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(root, action)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
