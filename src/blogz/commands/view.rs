use crate::commands::CmdResult;
use crate::error::{BlogzError, Result};
use crate::store::{ArticleStore, SnapshotBackend};

use super::helpers::parse_id;

pub fn run<B: SnapshotBackend>(store: &ArticleStore<B>, id: &str) -> Result<CmdResult> {
    let id = parse_id(id)?;
    let article = store.get(id).ok_or(BlogzError::ArticleNotFound(id))?;
    Ok(CmdResult::default().with_listed_articles(vec![article]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::fixtures::{numbered_articles, store_with};

    #[test]
    fn views_single_article() {
        let store = store_with(numbered_articles(3));
        let result = run(&store, "3").unwrap();
        assert_eq!(result.listed_articles.len(), 1);
        assert_eq!(result.listed_articles[0].body, "Body of article 3");
    }

    #[test]
    fn missing_article_is_not_found() {
        let store = store_with(numbered_articles(1));
        assert!(matches!(
            run(&store, "2").unwrap_err(),
            BlogzError::ArticleNotFound(_)
        ));
    }
}
