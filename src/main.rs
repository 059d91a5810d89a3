//! Course-Harvest main entry point
//!
//! This is the command-line interface for the Course-Harvest catalog scraper.

use anyhow::Context;
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use course_harvest::config::{load_config_or_default, validate, Config};
use course_harvest::crawler::{build_http_client, discover_course_urls, harvest, HarvestRequest};
use course_harvest::output::print_statistics;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Course-Harvest: a course catalog scraper
///
/// Finds courses whose sitemap entry contains a keyword, extracts the title,
/// commitment, language, start date and ratings of each, and saves them
/// to a spreadsheet.
#[derive(Parser, Debug)]
#[command(name = "course-harvest")]
#[command(version)]
#[command(about = "Scrape course details from a catalog into a spreadsheet", long_about = None)]
struct Cli {
    /// Keyword for courses search (case-sensitive)
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    keyword: String,

    /// Number of courses to search
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    count: u64,

    /// File to save results [default: courses.xlsx]
    #[arg(short, long, value_name = "FILE")]
    path: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Sitemap to search instead of the configured one
    #[arg(long, value_name = "URL")]
    sitemap_url: Option<String>,

    /// Show which courses would be scraped without fetching them
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;
    let request = HarvestRequest {
        keyword: cli.keyword.clone(),
        count: cli.count as usize,
    };

    if cli.dry_run {
        handle_dry_run(&config, &request).await
    } else {
        handle_harvest(&config, &request, cli.quiet).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("course_harvest=info,warn"),
            1 => EnvFilter::new("course_harvest=debug,info"),
            2 => EnvFilter::new("course_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file (if any) and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    if let Some(path) = &cli.config {
        tracing::info!("Loading configuration from: {}", path.display());
    }

    let mut config = load_config_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    if let Some(path) = &cli.path {
        config.output.path = path.to_string_lossy().into_owned();
    }
    if let Some(url) = &cli.sitemap_url {
        config.catalog.sitemap_url = url.clone();
    }

    validate(&config).context("Invalid command-line override")?;
    Ok(config)
}

/// Handles the --dry-run mode: lists the courses that would be scraped
async fn handle_dry_run(
    config: &Config,
    request: &HarvestRequest,
) -> anyhow::Result<()> {
    let client = build_http_client(&config.http).context("Failed to build HTTP client")?;
    let urls = discover_course_urls(
        &client,
        &config.catalog.sitemap_url,
        &request.keyword,
        request.count,
    )
    .await
    .context("Course discovery failed")?;

    println!("=== Course-Harvest Dry Run ===\n");
    println!("Sitemap: {}", config.catalog.sitemap_url);
    println!("Keyword: {}", request.keyword);
    println!("Output: {}\n", config.output.path);

    println!("Courses ({}):", urls.len());
    for url in &urls {
        println!("  - {}", url);
    }

    Ok(())
}

/// Handles the main harvest operation
async fn handle_harvest(
    config: &Config,
    request: &HarvestRequest,
    quiet: bool,
) -> anyhow::Result<()> {
    tracing::info!(
        "Harvesting up to {} courses matching '{}'",
        request.count,
        request.keyword
    );

    let stats = harvest(config, request).await.context("Harvest failed")?;

    if !quiet {
        print_statistics(&stats);
        println!("\n✓ Saved to: {}", config.output.path);
    }

    Ok(())
}
