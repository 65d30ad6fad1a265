//! Export assembly
//!
//! Pure builders for the two export formats: a JSON document carrying the
//! filtered record list verbatim, and a CSV table with one row per
//! record. File writing stays in the shell.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::article::Article;

/// JSON export document
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ExportData {
    pub exported_at: DateTime<Utc>,
    pub total_articles: usize,
    pub total_views: u64,
    pub total_reactions: u64,
    pub articles: Vec<Article>,
}

/// Assemble the JSON export document for an already-filtered set
///
/// The record list is carried verbatim in input order. `exported_at` is
/// supplied by the caller so the builder stays pure.
pub fn build_export(articles: &[Article], exported_at: DateTime<Utc>) -> ExportData {
    ExportData {
        exported_at,
        total_articles: articles.len(),
        total_views: articles.iter().map(|a| a.page_views_count).sum(),
        total_reactions: articles.iter().map(|a| a.public_reactions_count).sum(),
        articles: articles.to_vec(),
    }
}

/// Column headers of the CSV export
pub const CSV_HEADER: [&str; 9] = [
    "Title",
    "URL",
    "Published",
    "Views",
    "Reactions",
    "Comments",
    "Engagement %",
    "Reading Time",
    "Tags",
];

/// Render an already-filtered set as CSV, header row included
///
/// Row order follows the input and every record appears exactly once.
/// Published dates keep the date portion only; engagement rates are
/// rendered with two decimals; tags are comma-joined into one field.
pub fn to_csv(articles: &[Article]) -> String {
    let mut out = String::new();
    out.push_str(&CSV_HEADER.join(","));
    out.push('\n');

    for article in articles {
        let row = [
            csv_field(&article.title),
            csv_field(&article.url),
            article.published_at.format("%Y-%m-%d").to_string(),
            article.page_views_count.to_string(),
            article.public_reactions_count.to_string(),
            article.comments_count.to_string(),
            format!("{:.2}", article.engagement_rate()),
            article.reading_time_minutes.to_string(),
            csv_field(&article.tag_list.join(", ")),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// Quote a field when it contains a comma, a quote or a newline
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
