use super::SnapshotBackend;
use crate::error::{BlogzError, Result};
use crate::model::Article;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "data.json";
pub const DEFAULT_INDENT: usize = 4;
pub const MAX_INDENT: usize = 16;

pub struct FileBackend {
    root: PathBuf,
    data_file: String,
    indent: usize,
}

impl FileBackend {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            data_file: DEFAULT_DATA_FILE.to_string(),
            indent: DEFAULT_INDENT,
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        self.data_file = name.to_string();
        self
    }

    /// Spaces per nesting level in the snapshot, at most [`MAX_INDENT`].
    /// Zero writes compact JSON.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent.min(MAX_INDENT);
        self
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.root.join(&self.data_file)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(BlogzError::Io)?;
        }
        Ok(())
    }

    fn encode(&self, articles: &[Article]) -> Result<Vec<u8>> {
        if self.indent == 0 {
            return serde_json::to_vec(articles).map_err(BlogzError::Serialization);
        }

        let indent = vec![b' '; self.indent];
        let mut buf = Vec::new();
        {
            let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
            articles
                .serialize(&mut ser)
                .map_err(BlogzError::Serialization)?;
        }
        Ok(buf)
    }
}

impl SnapshotBackend for FileBackend {
    fn load(&self) -> Result<Vec<Article>> {
        let data_file = self.snapshot_path();
        if !data_file.exists() {
            return Err(BlogzError::SnapshotMissing(data_file));
        }
        let content = fs::read_to_string(&data_file).map_err(BlogzError::Io)?;
        let articles: Vec<Article> =
            serde_json::from_str(&content).map_err(BlogzError::Serialization)?;
        debug!(path = %data_file.display(), count = articles.len(), "loaded snapshot");
        Ok(articles)
    }

    fn save(&self, articles: &[Article]) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content = self.encode(articles)?;
        let data_file = self.snapshot_path();

        // Atomic write: the snapshot is replaced in one rename
        let tmp_file = self.root.join(format!(".data-{}.tmp", Uuid::new_v4()));
        let written = fs::write(&tmp_file, &content)
            .and_then(|_| fs::rename(&tmp_file, &data_file));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_file);
            return Err(BlogzError::Io(e));
        }

        debug!(path = %data_file.display(), count = articles.len(), "saved snapshot");
        Ok(())
    }

    fn exists(&self) -> bool {
        self.snapshot_path().exists()
    }

    fn location(&self) -> String {
        self.snapshot_path().display().to_string()
    }
}
