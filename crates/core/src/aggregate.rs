//! Report aggregators
//!
//! Each aggregator is an independent reducer: it consumes an article
//! sequence (usually pre-filtered by [`crate::filter::filter_by_window`])
//! and produces one summary structure. No aggregator depends on another's
//! output, and none of them mutate their input.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::article::Article;

/// Totals and averages across the input set
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Overview {
    pub total_articles: usize,
    pub total_views: u64,
    pub total_reactions: u64,
    pub total_comments: u64,
    pub avg_views: f64,
    pub avg_engagement: f64,
}

/// Compute overview totals and averages, `None` when there is no data
pub fn overview(articles: &[Article]) -> Option<Overview> {
    if articles.is_empty() {
        return None;
    }

    let count = articles.len();
    let total_views: u64 = articles.iter().map(|a| a.page_views_count).sum();
    let total_reactions: u64 = articles.iter().map(|a| a.public_reactions_count).sum();
    let total_comments: u64 = articles.iter().map(|a| a.comments_count).sum();

    // The average engagement rate is the arithmetic mean of per-article
    // rates, not total interactions over total views.
    let total_engagement: f64 = articles.iter().map(|a| a.engagement_rate()).sum();

    Some(Overview {
        total_articles: count,
        total_views,
        total_reactions,
        total_comments,
        avg_views: total_views as f64 / count as f64,
        avg_engagement: total_engagement / count as f64,
    })
}

/// Ranking key for the top-N aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Views,
    Reactions,
    Comments,
    Engagement,
}

/// Error for an unrecognized sort key string
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("invalid sort key: {0}. Valid keys: views, reactions, comments, engagement")]
pub struct ParseSortKeyError(String);

impl std::str::FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "views" => Ok(SortKey::Views),
            "reactions" => Ok(SortKey::Reactions),
            "comments" => Ok(SortKey::Comments),
            "engagement" => Ok(SortKey::Engagement),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Views => "views",
            SortKey::Reactions => "reactions",
            SortKey::Comments => "comments",
            SortKey::Engagement => "engagement",
        }
    }

    fn metric(self, article: &Article) -> f64 {
        match self {
            SortKey::Views => article.page_views_count as f64,
            SortKey::Reactions => article.public_reactions_count as f64,
            SortKey::Comments => article.comments_count as f64,
            SortKey::Engagement => article.engagement_rate(),
        }
    }
}

/// Top `n` articles ranked descending by `key`
///
/// The sort is stable, so articles with equal keys keep their original
/// relative order. An `n` larger than the input returns everything.
pub fn top_articles(articles: &[Article], n: usize, key: SortKey) -> Vec<Article> {
    let mut ranked = articles.to_vec();
    ranked.sort_by(|a, b| key.metric(b).total_cmp(&key.metric(a)));
    ranked.truncate(n);
    ranked
}

#[derive(Debug, Default)]
struct TagAccumulator {
    count: usize,
    views: u64,
    reactions: u64,
    comments: u64,
}

/// Per-tag performance summary
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TagSummary {
    pub tag: String,
    pub count: usize,
    pub views: u64,
    pub avg_views: f64,
    pub reactions: u64,
    pub comments: u64,
}

/// Group performance counters by tag
///
/// An article contributes its full counters to every tag it bears, so the
/// sum over all tags is at least the plain total. Accumulators are
/// zero-initialized on first sight of a new tag. Output is ordered by
/// total views descending, tag name ascending on ties.
pub fn tag_performance(articles: &[Article]) -> Vec<TagSummary> {
    let mut stats: HashMap<String, TagAccumulator> = HashMap::new();

    for article in articles {
        for tag in &article.tag_list {
            let acc = stats.entry(tag.clone()).or_default();
            acc.count += 1;
            acc.views += article.page_views_count;
            acc.reactions += article.public_reactions_count;
            acc.comments += article.comments_count;
        }
    }

    let mut summaries: Vec<TagSummary> = stats
        .into_iter()
        .map(|(tag, acc)| TagSummary {
            tag,
            count: acc.count,
            views: acc.views,
            avg_views: acc.views as f64 / acc.count as f64,
            reactions: acc.reactions,
            comments: acc.comments,
        })
        .collect();

    summaries.sort_by(|a, b| b.views.cmp(&a.views).then_with(|| a.tag.cmp(&b.tag)));
    summaries
}

/// Fixed reading-time ranges in minutes, with display labels
const READING_TIME_RANGES: [(u64, u64, &str); 5] = [
    (0, 3, "0-3 min"),
    (4, 5, "4-5 min"),
    (6, 10, "6-10 min"),
    (11, 15, "11-15 min"),
    (16, u64::MAX, "16+ min"),
];

/// Summary of one reading-time bucket
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ReadingTimeBucket {
    pub range: String,
    pub count: usize,
    pub avg_views: f64,
    pub avg_reactions: f64,
}

/// Partition articles into the fixed reading-time buckets
///
/// The ranges are mutually exclusive and cover every non-negative value,
/// so each article lands in exactly one bucket. Buckets that caught no
/// articles are omitted from the output.
pub fn reading_time_buckets(articles: &[Article]) -> Vec<ReadingTimeBucket> {
    READING_TIME_RANGES
        .iter()
        .filter_map(|&(min, max, label)| {
            let in_range: Vec<&Article> = articles
                .iter()
                .filter(|a| (min..=max).contains(&a.reading_time_minutes))
                .collect();

            if in_range.is_empty() {
                return None;
            }

            let count = in_range.len();
            let views: u64 = in_range.iter().map(|a| a.page_views_count).sum();
            let reactions: u64 = in_range.iter().map(|a| a.public_reactions_count).sum();

            Some(ReadingTimeBucket {
                range: label.to_string(),
                count,
                avg_views: views as f64 / count as f64,
                avg_reactions: reactions as f64 / count as f64,
            })
        })
        .collect()
}

#[derive(Debug, Default)]
struct MonthAccumulator {
    articles: usize,
    views: u64,
    reactions: u64,
    comments: u64,
}

/// Totals for one calendar month of publishing
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MonthlyStats {
    pub month: String,
    pub articles: usize,
    pub views: u64,
    pub reactions: u64,
    pub comments: u64,
}

/// The most recent 12 months of publishing activity, oldest first
///
/// Months are keyed `YYYY-MM` in UTC. Callers pass the full fetched set:
/// the growth picture deliberately ignores any trailing-window filter.
pub fn monthly_trend(articles: &[Article]) -> Vec<MonthlyStats> {
    let mut months: BTreeMap<String, MonthAccumulator> = BTreeMap::new();

    for article in articles {
        let key = article.published_at.format("%Y-%m").to_string();
        let acc = months.entry(key).or_default();
        acc.articles += 1;
        acc.views += article.page_views_count;
        acc.reactions += article.public_reactions_count;
        acc.comments += article.comments_count;
    }

    // BTreeMap iteration is already chronological for YYYY-MM keys.
    let mut trend: Vec<MonthlyStats> = months
        .into_iter()
        .map(|(month, acc)| MonthlyStats {
            month,
            articles: acc.articles,
            views: acc.views,
            reactions: acc.reactions,
            comments: acc.comments,
        })
        .collect();

    if trend.len() > 12 {
        trend.drain(..trend.len() - 12);
    }
    trend
}

/// A flagged article with the numbers that flagged it
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Underperformer {
    pub title: String,
    pub url: String,
    pub views: u64,
    pub engagement: f64,
}

/// Underperformer detection result
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct UnderperformerReport {
    pub avg_views: f64,
    pub avg_engagement: f64,
    pub flagged: Vec<Underperformer>,
}

/// Flag articles earning less than half the mean views or engagement
///
/// Either deficiency alone flags an article. `None` means there was
/// nothing to measure; an empty `flagged` list means nothing is lagging.
/// Both are ordinary outcomes, not errors.
pub fn underperformers(articles: &[Article]) -> Option<UnderperformerReport> {
    if articles.is_empty() {
        return None;
    }

    let count = articles.len() as f64;
    let avg_views = articles.iter().map(|a| a.page_views_count).sum::<u64>() as f64 / count;
    let avg_engagement = articles.iter().map(|a| a.engagement_rate()).sum::<f64>() / count;

    let flagged = articles
        .iter()
        .filter(|a| {
            (a.page_views_count as f64) < avg_views * 0.5
                || a.engagement_rate() < avg_engagement * 0.5
        })
        .map(|a| Underperformer {
            title: a.title.clone(),
            url: a.url.clone(),
            views: a.page_views_count,
            engagement: a.engagement_rate(),
        })
        .collect();

    Some(UnderperformerReport {
        avg_views,
        avg_engagement,
        flagged,
    })
}
