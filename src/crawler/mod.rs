//! Crawler module for course discovery and page processing
//!
//! This module contains the scraping pipeline:
//! - Sitemap fetching and keyword filtering
//! - HTTP fetching with lossy UTF-8 decoding
//! - Per-field extraction from course pages
//! - Sequential row collection

mod collector;
mod fetcher;
mod parser;
mod sitemap;

pub use collector::collect_courses;
pub use fetcher::{build_http_client, decode_lossy, fetch_text};
pub use parser::{CourseFields, FieldExtractor};
pub use sitemap::{discover_course_urls, matching_urls};

use crate::config::{validate, Config};
use crate::output::{write_xlsx, HarvestStatistics};
use crate::HarvestError;
use std::path::Path;

/// What to harvest in one run
#[derive(Debug, Clone)]
pub struct HarvestRequest {
    /// Substring a sitemap entry must contain
    pub keyword: String,

    /// Maximum number of courses to collect
    pub count: usize,
}

/// Runs a complete harvest
///
/// This is the main entry point for a run. It will:
/// 1. Validate the configuration, so a bad setting fails before any request
/// 2. Build the HTTP client and compile the field lookups
/// 3. Discover matching course URLs from the sitemap
/// 4. Fetch and extract every course page in order
/// 5. Write the spreadsheet to `config.output.path`
///
/// # Arguments
///
/// * `config` - The harvester configuration
/// * `request` - Keyword and course count
///
/// # Returns
///
/// * `Ok(HarvestStatistics)` - Run completed and the file was written
/// * `Err(HarvestError)` - Run failed; nothing was written
pub async fn harvest(
    config: &Config,
    request: &HarvestRequest,
) -> crate::Result<HarvestStatistics> {
    validate(config)?;

    let client = build_http_client(&config.http).map_err(HarvestError::Client)?;
    let extractor = FieldExtractor::new(&config.extract)?;

    let urls = discover_course_urls(
        &client,
        &config.catalog.sitemap_url,
        &request.keyword,
        request.count,
    )
    .await?;

    let table = collect_courses(&client, &extractor, &urls).await?;

    write_xlsx(&table, &config.output.sheet_name, Path::new(&config.output.path))?;

    let stats = HarvestStatistics::from_table(&table, &config.extract.fallback);
    tracing::info!(
        "Harvest finished: {} courses, {} missing fields",
        stats.total_courses,
        stats.total_fallbacks()
    );

    Ok(stats)
}
