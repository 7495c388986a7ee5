//! Sorted article collection and page-slice queries
//!
//! The store holds the collection exactly as the loader produced it
//! (newest first) and never reorders it. Page queries clamp to the
//! collection bounds; an out-of-range page yields fewer or zero articles,
//! never an error.

use crate::article::Article;

/// The immutable sorted article collection.
#[derive(Debug, Default)]
pub struct ArticleStore {
    articles: Vec<Article>,
}

impl ArticleStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection wholesale with a freshly loaded one.
    pub fn replace(&mut self, articles: Vec<Article>) {
        self.articles = articles;
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.articles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// The articles for one 1-indexed page: `[(page-1)*size, page*size)`
    /// clamped to the collection bounds.
    #[must_use]
    pub fn slice(&self, page: usize, page_size: usize) -> &[Article] {
        let start = page
            .saturating_sub(1)
            .saturating_mul(page_size)
            .min(self.articles.len());
        let end = start.saturating_add(page_size).min(self.articles.len());
        &self.articles[start..end]
    }

    /// The whole collection in load order.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }
}
