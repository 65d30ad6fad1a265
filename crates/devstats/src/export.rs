//! Export file writing
//!
//! The core assembles the export documents; this module only puts them on
//! disk. Existing files are overwritten.

use std::fs;
use std::path::Path;

use crate::prelude::{println, *};
use chrono::{DateTime, Utc};
use devstats_core::article::Article;
use devstats_core::export::{build_export, to_csv};

/// Write the JSON export document for an already-filtered set
pub fn write_json(path: &Path, articles: &[Article], exported_at: DateTime<Utc>) -> Result<()> {
    let export = build_export(articles, exported_at);
    let json = serde_json::to_string_pretty(&export)?;

    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Data exported to {}", path.display());
    Ok(())
}

/// Write the CSV export for an already-filtered set
pub fn write_csv(path: &Path, articles: &[Article]) -> Result<()> {
    fs::write(path, to_csv(articles))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Data exported to {}", path.display());
    Ok(())
}
