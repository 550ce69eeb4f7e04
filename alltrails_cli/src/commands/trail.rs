use alltrails_lib::validation;
use alltrails_lib::TrailScraper;
use anyhow::Result;
use clap::Args;

use crate::output::{
    print_detail_csv, print_detail_markdown, print_detail_table, print_json, OutputFormat,
};

#[derive(Args)]
pub struct TrailArgs {
    /// Trail slug (e.g. us/tennessee/alum-cave-trail-to-mount-leconte) or trail URL
    pub slug: String,
}

pub async fn run(args: &TrailArgs, scraper: &TrailScraper, format: &OutputFormat) -> Result<()> {
    let slug = validation::validate_trail_slug(&args.slug)?;
    let detail = scraper.trail_details(&slug).await?;

    match format {
        OutputFormat::Table => print_detail_table(&detail),
        OutputFormat::Json => print_json(&detail),
        OutputFormat::Csv => print_detail_csv(&detail)?,
        OutputFormat::Markdown => print_detail_markdown(&detail),
    }

    Ok(())
}
