//! Trailing-window date filter
//!
//! Restricts a fetched article set to the records published within the
//! last N days. The reference instant is a parameter so the filter stays
//! pure; the shell passes `Utc::now()`.

use chrono::{DateTime, Duration, Utc};

use crate::article::Article;

/// Keep the articles published within the last `days` days of `now`
///
/// `days` of `None` or zero disables the filter and returns the full set.
/// Original order is preserved either way, and an empty result is a valid
/// value rather than an error.
pub fn filter_by_window(
    articles: &[Article],
    days: Option<u32>,
    now: DateTime<Utc>,
) -> Vec<Article> {
    let days = match days {
        Some(d) if d > 0 => d,
        _ => return articles.to_vec(),
    };

    let cutoff = now - Duration::days(i64::from(days));
    articles
        .iter()
        .filter(|a| a.published_at >= cutoff)
        .cloned()
        .collect()
}
