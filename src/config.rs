// CLI configuration + logging setup for the holding-reports binary

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Parser)]
#[command(name = "holding-reports")]
#[command(about = "Reports over holdings, companies, users and their accounts")]
pub struct Cli {
    /// JSON dataset (array of holdings). Mock data is generated when omitted.
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Seed for the mock data generator
    #[arg(long, global = true, default_value = "2019")]
    pub seed: u64,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the full report (default)
    Summary,

    /// Export every account as NUMBER|AMOUNT|CURRENCY
    Export { file: PathBuf },

    /// Draw N distinct users at random
    Sample { n: usize },

    /// List users by last name, then first name, Z to A
    Users,

    /// Write the mock dataset as JSON
    Seed { file: PathBuf },
}

pub fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("holding_reports=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("holding_reports=info,warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
