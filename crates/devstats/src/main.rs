#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod devto;
mod error;
mod export;
mod prelude;
mod report;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Analytics reports for your DEV Community (dev.to) articles"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "DEVSTATS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Fetch your published articles and build analytics reports
    Report(crate::report::ReportOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Report(options) => crate::report::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
