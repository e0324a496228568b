//! Keyword filtering over article header and body.
//!
//! Matching is a case-insensitive substring test. The keyword is taken
//! literally, so `c++` or `a.b` match exactly those characters. An empty
//! keyword matches everything.

use crate::model::Article;

/// Returns the articles whose header or body contains `keyword`, ignoring
/// case, in their original order.
pub fn filter(articles: &[Article], keyword: &str) -> Vec<Article> {
    articles
        .iter()
        .filter(|article| matches(article, keyword))
        .cloned()
        .collect()
}

/// Whether one article passes the keyword filter.
pub fn matches(article: &Article, keyword: &str) -> bool {
    if keyword.is_empty() {
        return true;
    }
    let needle = keyword.to_lowercase();
    article.header.to_lowercase().contains(&needle) || article.body.to_lowercase().contains(&needle)
}
