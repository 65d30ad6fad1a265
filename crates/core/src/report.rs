//! Report selection and assembly
//!
//! The shell asks for an ordered list of reports; this module applies the
//! trailing window once, runs each requested aggregator, and returns
//! explicit result structures for the presenters to render. Building and
//! rendering stay decoupled.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::aggregate::{
    monthly_trend, overview, reading_time_buckets, tag_performance, top_articles, underperformers,
    MonthlyStats, Overview, ReadingTimeBucket, SortKey, TagSummary, UnderperformerReport,
};
use crate::article::Article;
use crate::filter::filter_by_window;

/// Which report to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Overview,
    Top,
    Tags,
    ReadingTime,
    Growth,
    Underperformers,
}

/// The fixed order of the full-report mode
pub const FULL_REPORT: [ReportKind; 6] = [
    ReportKind::Overview,
    ReportKind::Top,
    ReportKind::Tags,
    ReportKind::ReadingTime,
    ReportKind::Growth,
    ReportKind::Underperformers,
];

/// Window the underperformer detector falls back to when none is given
pub const DEFAULT_UNDERPERFORMER_WINDOW_DAYS: u32 = 30;

/// Knobs shared by the report builders
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Trailing window in days. `None` or zero means all time, except for
    /// the underperformer report which then uses its own 30-day default.
    pub window_days: Option<u32>,
    /// How many articles the ranking report keeps.
    pub top_n: usize,
    /// Ranking key for the top report.
    pub sort_key: SortKey,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            window_days: None,
            top_n: 10,
            sort_key: SortKey::Views,
        }
    }
}

/// One built report, ready to render
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum Report {
    Overview {
        window_days: Option<u32>,
        summary: Option<Overview>,
    },
    Top {
        key: SortKey,
        articles: Vec<Article>,
    },
    Tags {
        tags: Vec<TagSummary>,
    },
    ReadingTime {
        buckets: Vec<ReadingTimeBucket>,
    },
    Growth {
        months: Vec<MonthlyStats>,
    },
    Underperformers {
        window_days: u32,
        outcome: Option<UnderperformerReport>,
    },
}

/// Build the requested reports in the given order
///
/// The trailing window applies to every aggregator except growth, which
/// always sees the full fetched set, and underperformers, which uses the
/// 30-day default when no positive window was requested.
pub fn build_reports(
    articles: &[Article],
    kinds: &[ReportKind],
    config: &ReportConfig,
    now: DateTime<Utc>,
) -> Vec<Report> {
    let filtered = filter_by_window(articles, config.window_days, now);

    kinds
        .iter()
        .map(|kind| match kind {
            ReportKind::Overview => Report::Overview {
                window_days: config.window_days,
                summary: overview(&filtered),
            },
            ReportKind::Top => Report::Top {
                key: config.sort_key,
                articles: top_articles(&filtered, config.top_n, config.sort_key),
            },
            ReportKind::Tags => Report::Tags {
                tags: tag_performance(&filtered),
            },
            ReportKind::ReadingTime => Report::ReadingTime {
                buckets: reading_time_buckets(&filtered),
            },
            ReportKind::Growth => Report::Growth {
                months: monthly_trend(articles),
            },
            ReportKind::Underperformers => {
                let window = match config.window_days {
                    Some(d) if d > 0 => d,
                    _ => DEFAULT_UNDERPERFORMER_WINDOW_DAYS,
                };
                let windowed = filter_by_window(articles, Some(window), now);
                Report::Underperformers {
                    window_days: window,
                    outcome: underperformers(&windowed),
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn article_days_ago(title: &str, days: i64, views: u64, now: DateTime<Utc>) -> Article {
        Article {
            title: title.to_string(),
            url: format!("https://dev.to/u/{title}"),
            published_at: now - Duration::days(days),
            page_views_count: views,
            public_reactions_count: 0,
            comments_count: 0,
            reading_time_minutes: 5,
            tag_list: vec!["rust".to_string()],
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_full_report_builds_all_six_in_fixed_order() {
        let articles = vec![article_days_ago("a", 1, 100, now())];

        let reports = build_reports(&articles, &FULL_REPORT, &ReportConfig::default(), now());

        assert_eq!(reports.len(), 6);
        assert!(matches!(reports[0], Report::Overview { .. }));
        assert!(matches!(reports[1], Report::Top { .. }));
        assert!(matches!(reports[2], Report::Tags { .. }));
        assert!(matches!(reports[3], Report::ReadingTime { .. }));
        assert!(matches!(reports[4], Report::Growth { .. }));
        assert!(matches!(reports[5], Report::Underperformers { .. }));
    }

    #[test]
    fn test_window_applies_to_overview_but_not_growth() {
        let articles = vec![
            article_days_ago("recent", 2, 100, now()),
            article_days_ago("ancient", 400, 900, now()),
        ];
        let config = ReportConfig {
            window_days: Some(7),
            ..Default::default()
        };

        let reports = build_reports(
            &articles,
            &[ReportKind::Overview, ReportKind::Growth],
            &config,
            now(),
        );

        match &reports[0] {
            Report::Overview { summary, .. } => {
                let summary = summary.as_ref().unwrap();
                assert_eq!(summary.total_articles, 1);
                assert_eq!(summary.total_views, 100);
            }
            other => panic!("expected overview, got {other:?}"),
        }
        match &reports[1] {
            // The growth trend sees the ancient article despite the window.
            Report::Growth { months } => {
                let articles_total: usize = months.iter().map(|m| m.articles).sum();
                assert_eq!(articles_total, 2);
            }
            other => panic!("expected growth, got {other:?}"),
        }
    }

    #[test]
    fn test_underperformers_default_to_thirty_days() {
        let articles = vec![
            article_days_ago("in-window", 10, 100, now()),
            article_days_ago("out-of-window", 60, 1, now()),
        ];

        let reports = build_reports(
            &articles,
            &[ReportKind::Underperformers],
            &ReportConfig::default(),
            now(),
        );

        match &reports[0] {
            Report::Underperformers {
                window_days,
                outcome,
            } => {
                assert_eq!(*window_days, 30);
                // The 1-view article is outside the default window, so
                // nothing drags the mean down and nothing is flagged.
                let outcome = outcome.as_ref().unwrap();
                assert_eq!(outcome.avg_views, 100.0);
                assert!(outcome.flagged.is_empty());
            }
            other => panic!("expected underperformers, got {other:?}"),
        }
    }

    #[test]
    fn test_underperformers_honor_explicit_window() {
        let articles = vec![
            article_days_ago("a", 10, 100, now()),
            article_days_ago("b", 60, 100, now()),
            article_days_ago("c", 70, 100, now()),
            article_days_ago("lagging", 80, 10, now()),
        ];
        let config = ReportConfig {
            window_days: Some(90),
            ..Default::default()
        };

        let reports = build_reports(&articles, &[ReportKind::Underperformers], &config, now());

        match &reports[0] {
            Report::Underperformers {
                window_days,
                outcome,
            } => {
                assert_eq!(*window_days, 90);
                let outcome = outcome.as_ref().unwrap();
                assert_eq!(outcome.flagged.len(), 1);
                assert_eq!(outcome.flagged[0].title, "lagging");
            }
            other => panic!("expected underperformers, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_window_yields_no_data_outcomes() {
        let articles = vec![article_days_ago("old", 100, 50, now())];
        let config = ReportConfig {
            window_days: Some(7),
            ..Default::default()
        };

        let reports = build_reports(
            &articles,
            &[ReportKind::Overview, ReportKind::Top],
            &config,
            now(),
        );

        match &reports[0] {
            Report::Overview { summary, .. } => assert!(summary.is_none()),
            other => panic!("expected overview, got {other:?}"),
        }
        match &reports[1] {
            Report::Top { articles, .. } => assert!(articles.is_empty()),
            other => panic!("expected top, got {other:?}"),
        }
    }

    #[test]
    fn test_top_report_uses_configured_n_and_key() {
        let articles = vec![
            article_days_ago("a", 1, 10, now()),
            article_days_ago("b", 2, 30, now()),
            article_days_ago("c", 3, 20, now()),
        ];
        let config = ReportConfig {
            top_n: 2,
            sort_key: SortKey::Views,
            ..Default::default()
        };

        let reports = build_reports(&articles, &[ReportKind::Top], &config, now());

        match &reports[0] {
            Report::Top { key, articles } => {
                assert_eq!(*key, SortKey::Views);
                assert_eq!(articles.len(), 2);
                assert_eq!(articles[0].title, "b");
                assert_eq!(articles[1].title, "c");
            }
            other => panic!("expected top, got {other:?}"),
        }
    }
}
