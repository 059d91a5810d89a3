//! Course-Harvest: a course catalog scraper
//!
//! This crate discovers course pages from a catalog sitemap, extracts a fixed
//! set of display fields from each page and exports the rows to a spreadsheet.

pub mod config;
pub mod crawler;
pub mod output;

use thiserror::Error;

/// Main error type for Course-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Request to {url} failed with HTTP status {status}")]
    Fetch { url: String, status: u16 },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Malformed sitemap at {url}: {message}")]
    Sitemap { url: String, message: String },

    #[error("No element matched `{selector}` while extracting {field}")]
    Lookup { field: &'static str, selector: String },

    #[error("Export error: {0}")]
    Export(#[from] output::ExportError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid CSS selector: {0}")]
    InvalidSelector(String),
}

/// Result type alias for Course-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{collect_courses, discover_course_urls, harvest, HarvestRequest};
pub use output::{CourseRecord, CourseTable, NOT_FOUND};
