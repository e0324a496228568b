use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ArticleStore, SnapshotBackend};

pub fn run<B: SnapshotBackend>(store: &ArticleStore<B>, keyword: &str) -> Result<CmdResult> {
    let found = store.search(keyword);
    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info(format!("No articles match {:?}", keyword)));
    }
    Ok(result.with_listed_articles(found))
}
