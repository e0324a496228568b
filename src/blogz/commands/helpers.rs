use crate::error::{BlogzError, Result};
use crate::model::ArticleId;

/// Rejects a required text field that is empty after trimming.
pub fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BlogzError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(())
}

pub fn require_article(header: &str, body: &str) -> Result<()> {
    require_text("Header", header)?;
    require_text("Body", body)
}

pub fn parse_id(raw: &str) -> Result<ArticleId> {
    raw.parse()
}
