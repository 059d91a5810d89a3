//! Row collection across discovered course pages
//!
//! Pages are fetched strictly one after another, in input order. The first
//! failure aborts the whole collection; no partial table is returned.

use crate::crawler::fetcher::fetch_text;
use crate::crawler::parser::FieldExtractor;
use crate::output::{CourseRecord, CourseTable};
use reqwest::Client;

/// Fetches every course page and extracts one record per URL
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `extractor` - Compiled field lookups
/// * `urls` - Course pages, in the order rows should appear
///
/// # Returns
///
/// * `Ok(CourseTable)` - One record per URL, in input order
/// * `Err(HarvestError)` - A page failed to fetch or a strict lookup failed
pub async fn collect_courses(
    client: &Client,
    extractor: &FieldExtractor,
    urls: &[String],
) -> crate::Result<CourseTable> {
    let mut table = CourseTable::new();

    for (index, url) in urls.iter().enumerate() {
        tracing::info!("[{}/{}] Fetching {}", index + 1, urls.len(), url);
        let html = fetch_text(client, url).await?;
        let fields = extractor.extract_html(&html)?;
        table.push(CourseRecord::new(fields, url.as_str()));
    }

    Ok(table)
}
