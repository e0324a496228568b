//! # Commands
//!
//! One module per operation. Each `run` takes the store (or the data root for
//! `init`/`config`), validates its request, calls the store and describes the
//! outcome as a [`CmdResult`]. Nothing here prints.

use crate::config::BlogzConfig;
use crate::model::Article;

pub mod config;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod init;
pub mod list;
pub mod search;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Articles created, changed or removed by the command
    pub affected_articles: Vec<Article>,
    /// Articles the command wants displayed
    pub listed_articles: Vec<Article>,
    pub config: Option<BlogzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_articles(mut self, articles: Vec<Article>) -> Self {
        self.affected_articles = articles;
        self
    }

    pub fn with_listed_articles(mut self, articles: Vec<Article>) -> Self {
        self.listed_articles = articles;
        self
    }

    pub fn with_config(mut self, config: BlogzConfig) -> Self {
        self.config = Some(config);
        self
    }
}
