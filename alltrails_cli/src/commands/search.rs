use alltrails_lib::validation;
use alltrails_lib::TrailScraper;
use anyhow::Result;
use clap::Args;

use crate::output::{
    limit_trails, print_json, print_trails_csv, print_trails_markdown, print_trails_table,
    remainder_notice, OutputFormat,
};

#[derive(Args)]
pub struct SearchArgs {
    /// Park slug (e.g. us/tennessee/great-smoky-mountains-national-park) or park URL
    pub park: String,

    /// Maximum number of trails to print
    #[arg(long, default_value = "15")]
    pub limit: usize,
}

pub async fn run(args: &SearchArgs, scraper: &TrailScraper, format: &OutputFormat) -> Result<()> {
    let park = validation::validate_park_slug(&args.park)?;
    let trails = scraper.search_trails(&park).await?;

    if trails.is_empty() {
        eprintln!(
            "No trails found for park: {}. Please check the park slug format.",
            park
        );
        return Ok(());
    }

    eprintln!("Found {} trails in {}", trails.len(), park);

    let (shown, hidden) = limit_trails(&trails, args.limit);
    match format {
        OutputFormat::Table => print_trails_table(shown),
        OutputFormat::Json => print_json(shown),
        OutputFormat::Csv => print_trails_csv(shown)?,
        OutputFormat::Markdown => print_trails_markdown(shown),
    }

    if let Some(notice) = remainder_notice(hidden) {
        eprintln!("{}", notice);
    }

    Ok(())
}
