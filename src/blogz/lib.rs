//! # Blogz Architecture
//!
//! Blogz manages a single collection of short text articles (`id`, `header`,
//! `body`, `date`) persisted as one JSON snapshot. It is a library with a thin
//! CLI client; the same core could sit behind an HTTP router or a UI.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses arguments, prints output, owns exit codes         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) and Commands (commands/*.rs)                  │
//! │  - Request validation, textual id conversion, messages      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  ArticleStore (store/article_store.rs) + query.rs           │
//! │  - Owns the collection, mints ids, filters                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  SnapshotBackend (store/)                                   │
//! │  - FileBackend (production), MemBackend (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency
//!
//! Every mutation rewrites the whole snapshot before it returns. If the write
//! fails the in-memory collection is put back as it was, so memory and disk
//! never disagree after an operation completes. Mutations are serialized by
//! the store's lock; reads may run in parallel.
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go through `tracing`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: Article store and snapshot backends
//! - [`query`]: Keyword filtering
//! - [`model`]: `Article` and `ArticleId`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod store;
