//! Feed provider abstraction, HTTP client, and article loading
//!
//! The provider is opaque to the rest of the application: one read operation
//! returning the feed document or a [`LoadError`]. The concrete provider is
//! an HTTP GET of a static JSON file; tests substitute their own
//! [`ArticleProvider`] implementations.

use std::cmp::Ordering;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};

use crate::article::Article;

/// Errors surfaced by a feed load.
///
/// Whatever the cause, the view shows one fixed message; the variants exist
/// for the operational log.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The provider was unreachable or answered with a non-success status.
    #[error("feed transport failure (status {status:?})")]
    Transport {
        status: Option<u16>,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The response body could not be parsed as the expected feed document.
    #[error("feed body did not match the expected shape: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::Transport {
            status: err.status().map(|s| s.as_u16()),
            source: Some(err),
        }
    }
}

/// The feed document as it appears on the wire.
///
/// A missing or non-array `articles` field deserializes as an empty
/// collection rather than an error; an unreachable feed is worth surfacing,
/// a half-written one is not.
#[derive(Debug, Default, Deserialize)]
pub struct FeedDocument {
    #[serde(default, deserialize_with = "articles_or_empty")]
    pub articles: Vec<Article>,
}

fn articles_or_empty<'de, D>(deserializer: D) -> Result<Vec<Article>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

/// The external source of the article collection.
#[async_trait]
pub trait ArticleProvider: Send + Sync {
    /// Fetch the feed document.
    async fn fetch(&self) -> Result<FeedDocument, LoadError>;
}

/// HTTP provider reading a static JSON feed.
pub struct HttpFeed {
    client: reqwest::Client,
    url: String,
}

impl HttpFeed {
    #[must_use]
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl ArticleProvider for HttpFeed {
    async fn fetch(&self) -> Result<FeedDocument, LoadError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Transport {
                status: Some(status.as_u16()),
                source: None,
            });
        }

        let body = response.text().await?;
        let document: FeedDocument = serde_json::from_str(&body)?;
        Ok(document)
    }
}

/// Load the article collection: fetch, then sort newest-first.
///
/// Purely functional with respect to the caller's data; the only side
/// effect is the provider's own request.
pub async fn load(provider: &dyn ArticleProvider) -> Result<Vec<Article>, LoadError> {
    let document = provider.fetch().await?;
    let mut articles = document.articles;
    sort_newest_first(&mut articles);
    Ok(articles)
}

/// Stable-sort articles by timestamp, newest first.
///
/// Articles with unparseable timestamps compare equal to everything, so the
/// stable sort leaves their relative order untouched. That ordering is
/// deliberately unspecified-but-stable; the feed is not validated here.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| match (b.parsed_timestamp(), a.parsed_timestamp()) {
        (Some(b_ts), Some(a_ts)) => b_ts.cmp(&a_ts),
        _ => Ordering::Equal,
    });
}
