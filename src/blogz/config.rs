use crate::error::{BlogzError, Result};
use crate::store::fs_backend::{FileBackend, DEFAULT_DATA_FILE, DEFAULT_INDENT, MAX_INDENT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for blogz, stored in `<root>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogzConfig {
    /// Name of the snapshot file inside the data root
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Spaces per level when writing the snapshot (0 = compact)
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl Default for BlogzConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            indent: default_indent(),
        }
    }
}

impl BlogzConfig {
    /// Read `config.json` from the data root. A missing file means defaults;
    /// a file with out-of-range values is rejected.
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let config = match fs::read_to_string(root.as_ref().join(CONFIG_FILENAME)) {
            Ok(text) => serde_json::from_str::<BlogzConfig>(&text)?,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, root: P) -> Result<()> {
        let root = root.as_ref();
        fs::create_dir_all(root)?;
        fs::write(
            root.join(CONFIG_FILENAME),
            serde_json::to_string_pretty(self)?,
        )?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        check_data_file(&self.data_file)?;
        check_indent(self.indent)
    }

    /// Set the snapshot file name. Must be a bare file name.
    pub fn set_data_file(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        check_data_file(name)?;
        self.data_file = name.to_string();
        Ok(())
    }

    pub fn set_indent(&mut self, value: &str) -> Result<()> {
        let indent = value.trim().parse().map_err(|_| {
            BlogzError::Validation(format!("indent must be a non-negative integer, got {:?}", value))
        })?;
        check_indent(indent)?;
        self.indent = indent;
        Ok(())
    }

    /// A file backend rooted at `root` with this configuration applied.
    pub fn file_backend(&self, root: PathBuf) -> FileBackend {
        FileBackend::new(root)
            .with_data_file(&self.data_file)
            .with_indent(self.indent)
    }
}

fn check_data_file(name: &str) -> Result<()> {
    let is_bare = Path::new(name)
        .file_name()
        .map(|f| f == name)
        .unwrap_or(false);
    if name.is_empty() || !is_bare || name == CONFIG_FILENAME {
        return Err(BlogzError::Validation(format!(
            "data-file must be a plain file name, got {:?}",
            name
        )));
    }
    Ok(())
}

fn check_indent(indent: usize) -> Result<()> {
    if indent > MAX_INDENT {
        return Err(BlogzError::Validation(format!(
            "indent must be between 0 and {}, got {}",
            MAX_INDENT, indent
        )));
    }
    Ok(())
}
