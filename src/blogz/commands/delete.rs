use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ArticleStore, SnapshotBackend};

use super::helpers::parse_id;

pub fn run<B: SnapshotBackend>(store: &ArticleStore<B>, id: &str) -> Result<CmdResult> {
    let id = parse_id(id)?;
    let article = store.delete(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Article deleted ({}): {}",
        article.id, article.header
    )));
    Ok(result.with_affected_articles(vec![article]))
}
