use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ArticleStore, SnapshotBackend};

use super::helpers::require_article;

pub fn run<B: SnapshotBackend>(
    store: &ArticleStore<B>,
    header: String,
    body: String,
) -> Result<CmdResult> {
    require_article(&header, &body)?;

    let article = store.create(header, body)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Article created ({}): {}",
        article.id, article.header
    )));
    Ok(result.with_affected_articles(vec![article]))
}
