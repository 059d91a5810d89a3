//! Integration tests for the harvest pipeline
//!
//! These tests use wiremock to serve a sitemap and course pages, then run
//! discovery, collection and export end-to-end.

use calamine::{open_workbook, Reader, Xlsx};
use course_harvest::config::{Config, ExtractConfig};
use course_harvest::crawler::{build_http_client, discover_course_urls, harvest, HarvestRequest};
use course_harvest::output::HEADER;
use course_harvest::HarvestError;
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing at the mock catalog
fn create_test_config(base_url: &str, output_path: &Path) -> Config {
    let mut config = Config::default();
    config.catalog.sitemap_url = format!("{}/sitemap~www~courses.xml", base_url);
    config.output.path = output_path.to_string_lossy().into_owned();
    config
}

fn sitemap(base_url: &str, slugs: &[&str]) -> String {
    let entries: String = slugs
        .iter()
        .map(|slug| format!("  <url><loc>{}/learn/{}</loc></url>\n", base_url, slug))
        .collect();
    format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
            "{}</urlset>"
        ),
        entries
    )
}

fn course_page(title: &str, with_ratings: bool) -> String {
    let ratings = if with_ratings {
        r#"<div class="ratings-text">4.8 stars</div>"#
    } else {
        ""
    };
    format!(
        r#"<html><head><title>{title}</title></head><body>
        <h1 class="title display-3-text">{title}</h1>
        <div class="rc-StartDateString"><span>Starts Feb 1</span></div>
        <div class="rc-Language">English</div>
        {ratings}
        <table class="basic-info-table"><tbody>
            <tr><td>Commitment</td><td>5 weeks</td></tr>
        </tbody></table>
        </body></html>"#
    )
}

async fn mount_sitemap(server: &MockServer, slugs: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/sitemap~www~courses.xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sitemap(&server.uri(), slugs))
                .insert_header("content-type", "application/xml"),
        )
        .mount(server)
        .await;
}

async fn mount_course(server: &MockServer, slug: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(format!("/learn/{}", slug)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

fn read_sheet(path: &Path, sheet: &str) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("Failed to open workbook");
    let range = workbook
        .worksheet_range(sheet)
        .expect("Failed to read worksheet");
    range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

#[tokio::test]
async fn test_full_harvest_writes_spreadsheet() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_sitemap(
        &server,
        &["python-basics", "java-intro", "advanced-python", "python-for-data"],
    )
    .await;
    mount_course(&server, "python-basics", course_page("Python Basics", true)).await;
    mount_course(&server, "advanced-python", course_page("Advanced Python", false)).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("courses.xlsx");
    let config = create_test_config(&base_url, &output);
    let request = HarvestRequest {
        keyword: "python".to_string(),
        count: 2,
    };

    let stats = harvest(&config, &request).await.expect("Harvest failed");

    assert_eq!(stats.total_courses, 2);
    assert_eq!(stats.fallbacks, [0, 0, 0, 0, 1, 0]);

    let rows = read_sheet(&output, "Courses");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], HEADER.to_vec());
    assert_eq!(
        rows[1],
        vec![
            "Python Basics".to_string(),
            "5 weeks".to_string(),
            "English".to_string(),
            "Starts Feb 1".to_string(),
            "4.8 stars".to_string(),
            format!("{}/learn/python-basics", base_url),
        ]
    );
    assert_eq!(rows[2][0], "Advanced Python");
    assert_eq!(rows[2][4], "not found");
    assert_eq!(rows[2][5], format!("{}/learn/advanced-python", base_url));
}

#[tokio::test]
async fn test_discovery_returns_all_when_fewer_than_count() {
    let server = MockServer::start().await;
    mount_sitemap(&server, &["python-basics", "java-intro"]).await;

    let client = build_http_client(&Config::default().http).unwrap();
    let urls = discover_course_urls(
        &client,
        &format!("{}/sitemap~www~courses.xml", server.uri()),
        "java",
        5,
    )
    .await
    .unwrap();

    assert_eq!(urls, vec![format!("{}/learn/java-intro", server.uri())]);
}

#[tokio::test]
async fn test_sitemap_failure_aborts_without_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sitemap~www~courses.xml"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("courses.xlsx");
    let config = create_test_config(&server.uri(), &output);
    let request = HarvestRequest {
        keyword: "python".to_string(),
        count: 5,
    };

    let result = harvest(&config, &request).await;

    assert!(matches!(result, Err(HarvestError::Fetch { status: 503, .. })));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_course_failure_aborts_without_output() {
    let server = MockServer::start().await;
    mount_sitemap(&server, &["python-basics", "python-gone"]).await;
    mount_course(&server, "python-basics", course_page("Python Basics", true)).await;
    Mock::given(method("GET"))
        .and(path("/learn/python-gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("courses.xlsx");
    let config = create_test_config(&server.uri(), &output);
    let request = HarvestRequest {
        keyword: "python".to_string(),
        count: 5,
    };

    let result = harvest(&config, &request).await;

    assert!(matches!(result, Err(HarvestError::Fetch { status: 404, .. })));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_strict_start_date_aborts_on_missing_block() {
    let server = MockServer::start().await;
    mount_sitemap(&server, &["python-basics"]).await;
    mount_course(
        &server,
        "python-basics",
        "<html><body><h1>No start date here</h1></body></html>".to_string(),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("courses.xlsx");
    let mut config = create_test_config(&server.uri(), &output);
    config.extract = ExtractConfig {
        strict_start_date: true,
        ..ExtractConfig::default()
    };
    let request = HarvestRequest {
        keyword: "python".to_string(),
        count: 1,
    };

    let result = harvest(&config, &request).await;

    assert!(matches!(result, Err(HarvestError::Lookup { .. })));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_default_policy_keeps_row_on_missing_fields() {
    let server = MockServer::start().await;
    mount_sitemap(&server, &["python-basics"]).await;
    mount_course(
        &server,
        "python-basics",
        "<html><body><p>Layout changed</p></body></html>".to_string(),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("courses.xlsx");
    let config = create_test_config(&server.uri(), &output);
    let request = HarvestRequest {
        keyword: "python".to_string(),
        count: 1,
    };

    let stats = harvest(&config, &request).await.unwrap();
    assert_eq!(stats.total_courses, 1);
    assert_eq!(stats.total_fallbacks(), 5);

    let rows = read_sheet(&output, "Courses");
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[1][..5], &["not found"; 5]);
}

#[tokio::test]
async fn test_invalid_sheet_name_rejected_before_fetching() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sitemap~www~courses.xml"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(sitemap(&server.uri(), &["python-basics"])),
        )
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/learn/python-basics"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(course_page("Python Basics", true)),
        )
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("courses.xlsx");
    let mut config = create_test_config(&server.uri(), &output);
    config.output.sheet_name = "Python/Data".to_string();
    let request = HarvestRequest {
        keyword: "python".to_string(),
        count: 1,
    };

    let result = harvest(&config, &request).await;

    assert!(matches!(result, Err(HarvestError::Config(_))));
    assert!(!output.exists());
}
