use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ArticleStore, SnapshotBackend};

use super::helpers::{parse_id, require_article};

pub fn run<B: SnapshotBackend>(
    store: &ArticleStore<B>,
    id: &str,
    header: String,
    body: String,
) -> Result<CmdResult> {
    let id = parse_id(id)?;
    require_article(&header, &body)?;

    let article = store.update(id, header, body)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Article updated ({}): {}",
        article.id, article.header
    )));
    Ok(result.with_affected_articles(vec![article]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlogzError;
    use crate::model::ArticleId;
    use crate::store::mem_backend::fixtures::{numbered_articles, store_with};

    #[test]
    fn updates_article_by_textual_id() {
        let store = store_with(numbered_articles(2));
        let result = run(&store, "2", "New".into(), "Text".into()).unwrap();

        assert_eq!(result.affected_articles[0].id, ArticleId::new(2));
        let stored = store.get(ArticleId::new(2)).unwrap();
        assert_eq!(stored.header, "New");
        assert_eq!(stored.body, "Text");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = store_with(numbered_articles(1));
        let err = run(&store, "5", "New".into(), "Text".into()).unwrap_err();
        assert!(matches!(err, BlogzError::ArticleNotFound(_)));
    }

    #[test]
    fn malformed_id_is_rejected() {
        let store = store_with(numbered_articles(1));
        let err = run(&store, "one", "New".into(), "Text".into()).unwrap_err();
        assert!(matches!(err, BlogzError::InvalidId(_)));
    }

    #[test]
    fn blank_header_is_rejected() {
        let store = store_with(numbered_articles(1));
        let err = run(&store, "1", "".into(), "Text".into()).unwrap_err();
        assert!(matches!(err, BlogzError::Validation(_)));
        assert_eq!(store.get(ArticleId::new(1)).unwrap().header, "Article 1");
    }
}
