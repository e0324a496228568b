use crate::model::ArticleId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogzError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Article not found: {0}")]
    ArticleNotFound(ArticleId),

    #[error("Invalid article id: {0:?}")]
    InvalidId(String),

    #[error("Duplicate article id in snapshot: {0}")]
    DuplicateId(ArticleId),

    #[error("No article snapshot at {} (run `blogz init` first)", .0.display())]
    SnapshotMissing(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl BlogzError {
    /// True for failures of the durable snapshot rather than of the request.
    ///
    /// Callers may retry these; the store never does.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            BlogzError::Io(_)
                | BlogzError::Serialization(_)
                | BlogzError::Store(_)
                | BlogzError::SnapshotMissing(_)
                | BlogzError::DuplicateId(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BlogzError>;
