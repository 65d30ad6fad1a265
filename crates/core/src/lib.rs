//! Core library for devstats
//!
//! This crate implements the **Functional Core** of the devstats
//! application: every data transformation over a fetched set of DEV
//! Community articles lives here as a pure function.
//!
//! # Architecture Overview
//!
//! The devstats project uses a two-crate architecture to enforce
//! separation of concerns:
//!
//! - **`devstats_core`** (this crate): pure transformation functions with
//!   zero I/O
//! - **`devstats`**: CLI parsing, the HTTP fetch, rendering and file
//!   writing (the Imperative Shell)
//!
//! Functions in this crate never perform I/O and never read the clock;
//! wherever "now" matters (the trailing-window filter, export timestamps)
//! it is an explicit parameter supplied by the shell. This keeps every
//! aggregator deterministic and testable with plain fixture data.
//!
//! # Module Organization
//!
//! - [`article`]: the article record and the per-record engagement metric
//! - [`filter`]: the trailing-window date filter
//! - [`aggregate`]: the report aggregators (overview, top-N ranking, tag
//!   grouping, reading-time buckets, monthly trend, underperformer
//!   detection)
//! - [`report`]: report selection and the ordered report builder
//! - [`export`]: JSON export assembly and CSV rendering

pub mod aggregate;
pub mod article;
pub mod export;
pub mod filter;
pub mod report;
