use std::fs;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use progsport_fixture_scraper::config::ScraperConfig;
use progsport_fixture_scraper::scraper::FixtureScraper;
use progsport_fixture_scraper::{parser, report};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of fixtures to show in each table
    #[arg(short, long)]
    top: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Report from a saved front page instead of fetching it
    ProcessFile {
        /// Path to the HTML file to process
        #[arg(short, long)]
        file: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = ScraperConfig::from_env();
    if let Some(top) = cli.top {
        config.top_n = top;
    }

    let html = match cli.command {
        Some(Commands::ProcessFile { file }) => {
            fs::read_to_string(&file).with_context(|| format!("Failed to read {}", file))?
        }
        None => FixtureScraper::new(&config)?.fetch_front_page()?,
    };

    let fixtures = parser::parse_fixtures(&html);
    info!("Parsed {} fixtures", fixtures.len());

    report::print_report(&fixtures, config.top_n);
    Ok(())
}
