//! The `report` command
//!
//! Fetches the article set once, builds the requested reports through the
//! core builder, then renders each one. Rendering is the only thing that
//! differs between the formatted and `--json` paths.

use std::path::PathBuf;

use crate::prelude::{eprintln, println, *};
use chrono::Utc;
use colored::Colorize;
use devstats_core::aggregate::{
    MonthlyStats, Overview, ReadingTimeBucket, SortKey, TagSummary, UnderperformerReport,
};
use devstats_core::article::Article;
use devstats_core::filter::filter_by_window;
use devstats_core::report::{build_reports, Report, ReportConfig, ReportKind, FULL_REPORT};

use crate::devto::{create_authenticated_client, fetch_articles, DevtoConfig};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
#[command(after_help = "Examples:
  # Basic overview
  devstats report --api-key YOUR_KEY --overview

  # Top 20 articles by engagement
  devstats report --api-key YOUR_KEY --top 20 --sort engagement

  # Last 30 days overview
  devstats report --api-key YOUR_KEY --overview --days 30

  # Tag analysis for the last 90 days
  devstats report --api-key YOUR_KEY --tags --days 90

  # Export to CSV
  devstats report --api-key YOUR_KEY --export-csv analytics.csv

  # Full report
  devstats report --api-key YOUR_KEY --full-report
")]
pub struct ReportOptions {
    /// DEV API key used to authenticate the fetch
    #[arg(long, env = "DEVTO_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Show overview statistics
    #[arg(long)]
    overview: bool,

    /// Show the top N articles
    #[arg(long, value_name = "N")]
    top: Option<usize>,

    /// Sort criteria for the top articles: views, reactions, comments, engagement
    #[arg(long, default_value = "views")]
    sort: String,

    /// Show tag performance analysis
    #[arg(long)]
    tags: bool,

    /// Show reading time analysis
    #[arg(long)]
    reading_time: bool,

    /// Show monthly growth trends
    #[arg(long)]
    growth: bool,

    /// Find underperforming articles (last 30 days unless --days is given)
    #[arg(long)]
    underperformers: bool,

    /// Only consider articles published in the last N days
    #[arg(long, value_name = "N")]
    days: Option<u32>,

    /// Run every report in a fixed order
    #[arg(long)]
    full_report: bool,

    /// Output the built reports as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    /// Export the filtered articles to a JSON file
    #[arg(long, value_name = "FILE")]
    export_json: Option<PathBuf>,

    /// Export the filtered articles to a CSV file
    #[arg(long, value_name = "FILE")]
    export_csv: Option<PathBuf>,
}

pub async fn run(options: ReportOptions, global: crate::Global) -> Result<()> {
    let config = DevtoConfig::from_env(options.api_key.clone());
    let client = create_authenticated_client(&config)?;

    if global.verbose {
        println!("Fetching your articles from {}...", config.base_url);
    }

    let articles = fetch_articles(&client, &config).await?;

    if global.verbose {
        println!("Loaded {} articles", articles.len());
    }

    let sort_key: SortKey = options.sort.parse()?;
    let report_config = ReportConfig {
        window_days: options.days,
        // The full report always ranks the top ten.
        top_n: if options.full_report {
            10
        } else {
            options.top.unwrap_or(10)
        },
        sort_key,
    };

    let kinds = selected_kinds(&options);
    let now = Utc::now();

    if kinds.is_empty() && options.export_json.is_none() && options.export_csv.is_none() {
        eprintln!("No reports requested. Try --full-report, or see --help for selectors.");
        return Ok(());
    }

    let reports = build_reports(&articles, &kinds, &report_config, now);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            render(report);
        }
    }

    if options.export_json.is_some() || options.export_csv.is_some() {
        let filtered = filter_by_window(&articles, options.days, now);
        if let Some(path) = &options.export_json {
            crate::export::write_json(path, &filtered, now)?;
        }
        if let Some(path) = &options.export_csv {
            crate::export::write_csv(path, &filtered)?;
        }
    }

    Ok(())
}

/// Map the selector flags to an ordered report list
///
/// `--full-report` wins over individually-specified selectors and always
/// produces the fixed six-report order.
fn selected_kinds(options: &ReportOptions) -> Vec<ReportKind> {
    if options.full_report {
        return FULL_REPORT.to_vec();
    }

    let mut kinds = Vec::new();
    if options.overview {
        kinds.push(ReportKind::Overview);
    }
    if options.top.is_some() {
        kinds.push(ReportKind::Top);
    }
    if options.tags {
        kinds.push(ReportKind::Tags);
    }
    if options.reading_time {
        kinds.push(ReportKind::ReadingTime);
    }
    if options.growth {
        kinds.push(ReportKind::Growth);
    }
    if options.underperformers {
        kinds.push(ReportKind::Underperformers);
    }
    kinds
}

fn render(report: &Report) {
    match report {
        Report::Overview {
            window_days,
            summary,
        } => render_overview(*window_days, summary.as_ref()),
        Report::Top { key, articles } => render_top(*key, articles),
        Report::Tags { tags } => render_tags(tags),
        Report::ReadingTime { buckets } => render_reading_time(buckets),
        Report::Growth { months } => render_growth(months),
        Report::Underperformers {
            window_days,
            outcome,
        } => render_underperformers(*window_days, outcome.as_ref()),
    }
}

fn banner(title: &str) {
    println!("\n{}", "=".repeat(80).bright_cyan());
    println!("{}", title.bright_cyan().bold());
    println!("{}", "=".repeat(80).bright_cyan());
}

fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len).collect();
        format!("{truncated}...")
    }
}

fn render_overview(window_days: Option<u32>, summary: Option<&Overview>) {
    let period = match window_days {
        Some(d) if d > 0 => format!("last {d} days"),
        _ => "all time".to_string(),
    };
    banner(&format!("ANALYTICS OVERVIEW ({period})"));

    let Some(summary) = summary else {
        println!("\n{}", "No articles found in this time period.".yellow());
        return;
    };

    println!("Total Articles:      {}", summary.total_articles);
    println!("Total Views:         {}", summary.total_views);
    println!("Total Reactions:     {}", summary.total_reactions);
    println!("Total Comments:      {}", summary.total_comments);
    println!("Avg Views/Article:   {:.0}", summary.avg_views);
    println!("Engagement Rate:     {:.2}%", summary.avg_engagement);
}

fn render_top(key: SortKey, articles: &[Article]) {
    banner(&format!(
        "TOP {} ARTICLES (by {})",
        articles.len(),
        key.as_str()
    ));

    if articles.is_empty() {
        println!("\n{}", "No articles found in this time period.".yellow());
        return;
    }

    for (idx, article) in articles.iter().enumerate() {
        println!(
            "\n{} {}",
            format!("[{}]", idx + 1).yellow().bold(),
            truncate_text(&article.title, 70).white().bold()
        );
        println!(
            "    Views: {} | Reactions: {} | Comments: {} | Engagement: {:.2}%",
            article.page_views_count,
            article.public_reactions_count,
            article.comments_count,
            article.engagement_rate()
        );
        println!("    URL: {}", article.url.cyan().underline());
        println!("    Published: {}", article.published_at.format("%Y-%m-%d"));
    }
}

fn render_tags(tags: &[TagSummary]) {
    banner("TAG PERFORMANCE");

    if tags.is_empty() {
        println!("\n{}", "No tagged articles in this time period.".yellow());
        return;
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Tag",
        "Articles",
        "Total Views",
        "Avg Views",
        "Reactions",
        "Comments"
    ]);
    for tag in tags {
        table.add_row(prettytable::row![
            &tag.tag,
            tag.count,
            tag.views,
            format!("{:.0}", tag.avg_views),
            tag.reactions,
            tag.comments
        ]);
    }
    table.printstd();
}

fn render_reading_time(buckets: &[ReadingTimeBucket]) {
    banner("READING TIME ANALYSIS");

    if buckets.is_empty() {
        println!("\n{}", "No articles found in this time period.".yellow());
        return;
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Time Range",
        "Articles",
        "Avg Views",
        "Avg Reactions"
    ]);
    for bucket in buckets {
        table.add_row(prettytable::row![
            &bucket.range,
            bucket.count,
            format!("{:.0}", bucket.avg_views),
            format!("{:.1}", bucket.avg_reactions)
        ]);
    }
    table.printstd();
}

fn render_growth(months: &[MonthlyStats]) {
    banner("GROWTH TREND (last 12 months)");

    if months.is_empty() {
        println!("\n{}", "No published articles yet.".yellow());
        return;
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Month",
        "Articles",
        "Total Views",
        "Total Reactions",
        "Total Comments"
    ]);
    for month in months {
        table.add_row(prettytable::row![
            &month.month,
            month.articles,
            month.views,
            month.reactions,
            month.comments
        ]);
    }
    table.printstd();
}

fn render_underperformers(window_days: u32, outcome: Option<&UnderperformerReport>) {
    banner(&format!("UNDERPERFORMING ARTICLES (last {window_days} days)"));

    let Some(outcome) = outcome else {
        println!(
            "\n{}",
            format!("No articles published in the last {window_days} days.").yellow()
        );
        return;
    };

    if outcome.flagged.is_empty() {
        println!(
            "\n{}",
            format!("No significantly underperforming articles in the last {window_days} days.")
                .green()
        );
        return;
    }

    println!(
        "\nArticles with <50% of average views ({:.0}) or engagement ({:.2}%):",
        outcome.avg_views, outcome.avg_engagement
    );
    for entry in &outcome.flagged {
        println!("\n{}", truncate_text(&entry.title, 70).white().bold());
        println!(
            "    Views: {} (avg: {:.0}) | Engagement: {:.2}% (avg: {:.2}%)",
            entry.views, outcome.avg_views, entry.engagement, outcome.avg_engagement
        );
        println!("    URL: {}", entry.url.cyan().underline());
    }
}
