//! Article data model and feed wire shapes
//!
//! The feed document is `{ "articles": [ ... ] }` with camelCase fields.
//! Articles are immutable once loaded; the collection is only ever replaced
//! wholesale by a new load.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_AUTHOR;
use crate::utils::datetime;

/// One published essay's metadata and preview content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub headline: String,
    #[serde(default)]
    pub preview: String,
    /// Raw ISO-8601 timestamp as sent by the feed; the sort key.
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    /// Link target for the full essay.
    pub detail_page: String,
}

impl Article {
    /// The timestamp parsed for ordering; `None` when unparseable.
    #[must_use]
    pub fn parsed_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        datetime::parse_timestamp(&self.timestamp)
    }

    /// Author for display; unset or blank authors read "Anonymous".
    #[must_use]
    pub fn display_author(&self) -> &str {
        self.author
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(DEFAULT_AUTHOR)
    }

    /// Whether the card should carry an image line at all.
    ///
    /// A blank image URL is treated the same as an absent one.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|i| !i.trim().is_empty())
    }
}
