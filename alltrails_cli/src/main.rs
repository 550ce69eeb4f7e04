mod commands;
mod output;

use std::time::Duration;

use alltrails_lib::alltrails_api::DEFAULT_BASE_URL;
use alltrails_lib::{FetchConfig, ScrapeError, TrailScraper};
use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "alltrails")]
#[command(about = "Search trails in a park and look up trail details on AllTrails")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Site root to scrape (overrides ALLTRAILS_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "10", global = true)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List trails in a park
    Search(commands::search::SearchArgs),
    /// Show full details for one trail
    Trail(commands::trail::TrailArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("alltrails=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli).await {
        match err.downcast_ref::<ScrapeError>() {
            Some(scrape_err) => eprintln!("Error: {}: {}", scrape_err.category(), scrape_err),
            None => eprintln!("Error: {:#}", err),
        }
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: &Cli) -> Result<()> {
    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("ALLTRAILS_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let scraper = TrailScraper::with_config(FetchConfig {
        base_url,
        timeout: Duration::from_secs(cli.timeout_secs),
        ..FetchConfig::default()
    })?;

    match &cli.command {
        Commands::Search(args) => commands::search::run(args, &scraper, &format).await?,
        Commands::Trail(args) => commands::trail::run(args, &scraper, &format).await?,
    }

    Ok(())
}
