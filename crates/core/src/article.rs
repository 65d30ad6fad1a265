use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Published article from the DEV API
///
/// Counter fields are absent from the payload for drafts and for accounts
/// without extended stats, so they all default to zero. `published_at`
/// arrives as ISO-8601 with a `Z` or explicit offset suffix and is
/// normalized to UTC during deserialization; a malformed timestamp fails
/// the deserialization of the whole payload.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub page_views_count: u64,
    #[serde(default)]
    pub public_reactions_count: u64,
    #[serde(default)]
    pub comments_count: u64,
    #[serde(default)]
    pub reading_time_minutes: u64,
    #[serde(default)]
    pub tag_list: Vec<String>,
}

impl Article {
    /// Engagement rate: (reactions + comments) / views * 100
    ///
    /// An article with zero views has a rate of 0.0 regardless of its
    /// reaction and comment counts.
    pub fn engagement_rate(&self) -> f64 {
        if self.page_views_count == 0 {
            return 0.0;
        }
        let interactions = self.public_reactions_count + self.comments_count;
        interactions as f64 / self.page_views_count as f64 * 100.0
    }
}
