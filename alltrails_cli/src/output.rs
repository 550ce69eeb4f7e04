use alltrails_lib::types::{Measure, TrailDetail, TrailSummary};
use anyhow::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

/// Excerpts longer than this are cut in table views.
const EXCERPT_WIDTH: usize = 80;

#[derive(Tabled, Serialize)]
struct TrailRow {
    #[tabled(rename = "#")]
    #[serde(rename = "#")]
    rank: usize,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Difficulty")]
    #[serde(rename = "Difficulty")]
    difficulty: String,
    #[tabled(rename = "Length")]
    #[serde(rename = "Length")]
    length: String,
    #[tabled(rename = "Elevation Gain")]
    #[serde(rename = "Elevation Gain")]
    elevation_gain: String,
    #[tabled(rename = "Rating")]
    #[serde(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Route")]
    #[serde(rename = "Route")]
    route_type: String,
    #[tabled(rename = "Summary")]
    #[serde(rename = "Summary")]
    excerpt: String,
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    url: String,
}

#[derive(Tabled, Serialize)]
struct DetailRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Slug")]
    #[serde(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Park")]
    #[serde(rename = "Park")]
    park: String,
    #[tabled(rename = "Difficulty")]
    #[serde(rename = "Difficulty")]
    difficulty: String,
    #[tabled(rename = "Length")]
    #[serde(rename = "Length")]
    length: String,
    #[tabled(rename = "Elevation Gain")]
    #[serde(rename = "Elevation Gain")]
    elevation_gain: String,
    #[tabled(rename = "Rating")]
    #[serde(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Route")]
    #[serde(rename = "Route")]
    route_type: String,
    #[tabled(rename = "Tags")]
    #[serde(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    url: String,
}

/// One line of the vertical trail detail view.
#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

// -- Result limiting --

/// First `limit` trails and the number left out.
pub fn limit_trails(trails: &[TrailSummary], limit: usize) -> (&[TrailSummary], usize) {
    let shown = &trails[..trails.len().min(limit)];
    (shown, trails.len() - shown.len())
}

/// Stderr line for trails cut by `--limit`, if any were cut.
pub fn remainder_notice(hidden: usize) -> Option<String> {
    (hidden > 0).then(|| format!("... and {} more trails.", hidden))
}

// -- Row builders --

fn build_trail_rows(trails: &[TrailSummary]) -> Vec<TrailRow> {
    trails
        .iter()
        .enumerate()
        .map(|(i, t)| TrailRow {
            rank: i + 1,
            name: t.name.clone().unwrap_or_default(),
            difficulty: t.difficulty.to_string(),
            length: format_measure(t.length.as_ref()),
            elevation_gain: format_measure(t.elevation_gain.as_ref()),
            rating: format_rating(t.rating),
            route_type: t.route_type.to_string(),
            excerpt: truncate(t.excerpt.as_deref().unwrap_or_default(), EXCERPT_WIDTH),
            url: t.url.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_detail_row(detail: &TrailDetail) -> DetailRow {
    let s = &detail.summary;
    DetailRow {
        name: s.name.clone().unwrap_or_default(),
        slug: s.slug.clone().unwrap_or_default(),
        park: detail
            .park
            .as_ref()
            .map(|p| p.to_string())
            .unwrap_or_default(),
        difficulty: s.difficulty.to_string(),
        length: format_measure(s.length.as_ref()),
        elevation_gain: format_measure(s.elevation_gain.as_ref()),
        rating: format_rating(s.rating),
        route_type: s.route_type.to_string(),
        tags: detail.tags.join("; "),
        description: detail.description.clone(),
        url: s.url.clone().unwrap_or_default(),
    }
}

fn build_field_rows(detail: &TrailDetail) -> Vec<FieldRow> {
    let row = build_detail_row(detail);
    vec![
        FieldRow { field: "Name", value: row.name },
        FieldRow { field: "Park", value: row.park },
        FieldRow { field: "Difficulty", value: row.difficulty },
        FieldRow { field: "Length", value: row.length },
        FieldRow { field: "Elevation Gain", value: row.elevation_gain },
        FieldRow { field: "Rating", value: row.rating },
        FieldRow { field: "Route", value: row.route_type },
        FieldRow { field: "Tags", value: row.tags },
        FieldRow { field: "URL", value: row.url },
        FieldRow { field: "Description", value: row.description },
    ]
}

// -- Table output --

pub fn print_trails_table(trails: &[TrailSummary]) {
    println!("{}", Table::new(build_trail_rows(trails)));
}

pub fn print_detail_table(detail: &TrailDetail) {
    println!("{}", Table::new(build_field_rows(detail)));
}

// -- Markdown output --

pub fn print_trails_markdown(trails: &[TrailSummary]) {
    let mut table = Table::new(build_trail_rows(trails));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_detail_markdown(detail: &TrailDetail) {
    let mut table = Table::new(build_field_rows(detail));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_trails_csv(trails: &[TrailSummary]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for mut row in build_trail_rows(trails) {
        row.name = sanitize_csv_field(&row.name);
        row.excerpt = sanitize_csv_field(&row.excerpt);
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_detail_csv(detail: &TrailDetail) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    let mut row = build_detail_row(detail);
    row.name = sanitize_csv_field(&row.name);
    row.tags = sanitize_csv_field(&row.tags);
    row.description = sanitize_csv_field(&row.description);
    wtr.serialize(row)?;
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Prefixes a tab to values a spreadsheet would read as a formula.
fn sanitize_csv_field(value: &str) -> String {
    if value.starts_with(['=', '+', '-', '@']) {
        format!("\t{}", value)
    } else {
        value.to_string()
    }
}

fn format_measure<U: std::fmt::Display>(measure: Option<&Measure<U>>) -> String {
    measure.map(|m| m.to_string()).unwrap_or_default()
}

fn format_rating(rating: Option<f64>) -> String {
    rating.map(|r| format!("{:.1}", r)).unwrap_or_default()
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let cut: String = text.chars().take(width).collect();
        format!("{}...", cut.trim_end())
    }
}
