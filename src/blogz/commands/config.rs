use crate::commands::{CmdMessage, CmdResult};
use crate::config::BlogzConfig;
use crate::error::{BlogzError, Result};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub const KNOWN_KEYS: &[&str] = &["data-file", "indent"];

pub fn run(root: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = BlogzConfig::load(root)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            ensure_known(&key)?;
        }
        ConfigAction::Set(key, value) => {
            match key.as_str() {
                "data-file" => config.set_data_file(&value)?,
                "indent" => config.set_indent(&value)?,
                other => return Err(unknown_key(other)),
            }
            config.save(root)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
        }
    }

    Ok(result.with_config(config))
}

fn ensure_known(key: &str) -> Result<()> {
    if KNOWN_KEYS.contains(&key) {
        Ok(())
    } else {
        Err(unknown_key(key))
    }
}

fn unknown_key(key: &str) -> BlogzError {
    BlogzError::Validation(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        KNOWN_KEYS.join(", ")
    ))
}
