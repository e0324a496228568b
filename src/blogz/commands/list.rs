use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{ArticleStore, SnapshotBackend};

pub fn run<B: SnapshotBackend>(store: &ArticleStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_articles(store.get_all()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::fixtures::{numbered_articles, store_with};

    #[test]
    fn lists_in_stored_order() {
        let store = store_with(numbered_articles(3));
        let result = run(&store).unwrap();
        let headers: Vec<_> = result
            .listed_articles
            .iter()
            .map(|a| a.header.as_str())
            .collect();
        assert_eq!(headers, vec!["Article 1", "Article 2", "Article 3"]);
    }
}
