//! Sitemap-based course URL discovery
//!
//! The catalog sitemap is read as a stream of XML events. Every text node is
//! tested for the keyword (case-sensitive substring, no normalization) and
//! the first `count` matches are returned in document order.

use crate::crawler::fetcher::fetch_text;
use crate::HarvestError;
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;

/// Extracts up to `count` text nodes containing `keyword` from a sitemap
///
/// Reading stops as soon as `count` matches are collected, so malformed
/// XML after that point is never seen.
///
/// # Arguments
///
/// * `xml` - The sitemap document
/// * `keyword` - Substring every returned entry must contain
/// * `count` - Maximum number of entries to return
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Matching entries, possibly fewer than `count`
/// * `Err(quick_xml::Error)` - The document is not well-formed
///
/// # Example
///
/// ```
/// use course_harvest::crawler::matching_urls;
///
/// let xml = "<urlset><url><loc>https://x/learn/python-basics</loc></url></urlset>";
/// let urls = matching_urls(xml, "python", 5).unwrap();
/// assert_eq!(urls, vec!["https://x/learn/python-basics".to_string()]);
/// ```
pub fn matching_urls(
    xml: &str,
    keyword: &str,
    count: usize,
) -> Result<Vec<String>, quick_xml::Error> {
    let mut urls = Vec::new();
    if count == 0 {
        return Ok(urls);
    }

    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    loop {
        let text = match reader.read_event()? {
            Event::Text(e) => e.unescape()?.into_owned(),
            Event::CData(e) => String::from_utf8_lossy(&e.into_inner()).into_owned(),
            Event::Eof => break,
            _ => continue,
        };

        let text = text.trim();
        if !text.is_empty() && text.contains(keyword) {
            urls.push(text.to_string());
            if urls.len() == count {
                break;
            }
        }
    }

    Ok(urls)
}

/// Fetches the sitemap and returns the course URLs matching `keyword`
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `sitemap_url` - Location of the sitemap document
/// * `keyword` - Substring every returned URL must contain
/// * `count` - Maximum number of URLs to return
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Matching URLs in document order
/// * `Err(HarvestError)` - The sitemap could not be fetched or parsed
pub async fn discover_course_urls(
    client: &Client,
    sitemap_url: &str,
    keyword: &str,
    count: usize,
) -> crate::Result<Vec<String>> {
    tracing::info!("Fetching sitemap: {}", sitemap_url);
    let xml = fetch_text(client, sitemap_url).await?;

    let urls = matching_urls(&xml, keyword, count).map_err(|e| HarvestError::Sitemap {
        url: sitemap_url.to_string(),
        message: e.to_string(),
    })?;

    if urls.len() < count {
        tracing::warn!(
            "Only {} of {} requested courses match '{}'",
            urls.len(),
            count,
            keyword
        );
    } else {
        tracing::info!("Discovered {} courses matching '{}'", urls.len(), keyword);
    }

    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITEMAP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://catalog.example.com/learn/python-basics</loc></url>
  <url><loc>https://catalog.example.com/learn/java-intro</loc></url>
  <url><loc>https://catalog.example.com/learn/advanced-python</loc></url>
  <url><loc>https://catalog.example.com/learn/python-for-data</loc></url>
</urlset>"#;

    #[test]
    fn test_returns_first_count_matches_in_order() {
        let urls = matching_urls(SITEMAP, "python", 2).unwrap();
        assert_eq!(
            urls,
            vec![
                "https://catalog.example.com/learn/python-basics",
                "https://catalog.example.com/learn/advanced-python",
            ]
        );
    }

    #[test]
    fn test_fewer_matches_than_count() {
        let urls = matching_urls(SITEMAP, "java", 5).unwrap();
        assert_eq!(urls, vec!["https://catalog.example.com/learn/java-intro"]);
    }

    #[test]
    fn test_no_matches() {
        let urls = matching_urls(SITEMAP, "haskell", 5).unwrap();
        assert!(urls.is_empty());
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let urls = matching_urls(SITEMAP, "Python", 5).unwrap();
        assert!(urls.is_empty());
    }

    #[test]
    fn test_every_result_contains_keyword() {
        let urls = matching_urls(SITEMAP, "learn/", 10).unwrap();
        assert_eq!(urls.len(), 4);
        assert!(urls.iter().all(|u| u.contains("learn/")));
    }

    #[test]
    fn test_non_url_text_nodes_are_candidates() {
        let xml = r#"<urlset>
  <url><loc>https://catalog.example.com/learn/rust</loc><lastmod>rust-2024</lastmod></url>
</urlset>"#;
        let urls = matching_urls(xml, "rust", 5).unwrap();
        assert_eq!(urls, vec!["https://catalog.example.com/learn/rust", "rust-2024"]);
    }

    #[test]
    fn test_entities_are_unescaped() {
        let xml = "<urlset><url><loc>https://x/learn/c&amp;python</loc></url></urlset>";
        let urls = matching_urls(xml, "c&python", 1).unwrap();
        assert_eq!(urls, vec!["https://x/learn/c&python"]);
    }

    #[test]
    fn test_cdata_text() {
        let xml =
            "<urlset><url><loc><![CDATA[https://x/learn/python-cdata]]></loc></url></urlset>";
        let urls = matching_urls(xml, "python", 1).unwrap();
        assert_eq!(urls, vec!["https://x/learn/python-cdata"]);
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let xml = "<urlset><url><loc>https://x/learn/python</url></urlset>";
        assert!(matching_urls(xml, "nothing-matches", 5).is_err());
    }

    #[test]
    fn test_stops_reading_after_enough_matches() {
        let xml = "<urlset><loc>https://x/learn/python</loc></broken>";
        let urls = matching_urls(xml, "python", 1).unwrap();
        assert_eq!(urls.len(), 1);
    }
}
