use serde::Deserialize;

/// Default sitemap listing every course page of the catalog
pub const DEFAULT_SITEMAP_URL: &str = "https://www.coursera.org/sitemap~www~courses.xml";

/// Default spreadsheet written when no path is given
pub const DEFAULT_OUTPUT_PATH: &str = "courses.xlsx";

/// Main configuration structure for Course-Harvest
///
/// Every section is optional; a missing section takes its defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
    pub extract: ExtractConfig,
}

/// Where course URLs are discovered
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// URL of the XML sitemap listing course pages
    #[serde(rename = "sitemap-url")]
    pub sitemap_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            sitemap_url: DEFAULT_SITEMAP_URL.to_string(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds; unset means wait indefinitely
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("course-harvest/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the spreadsheet to write (overwritten if present)
    pub path: String,

    /// Name of the single worksheet
    #[serde(rename = "sheet-name")]
    pub sheet_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_PATH.to_string(),
            sheet_name: "Courses".to_string(),
        }
    }
}

/// CSS selectors and fallback behaviour used by the field extractor
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ExtractConfig {
    /// Course title heading
    pub title: String,

    /// Table holding the "basic info" rows
    pub commitment_table: String,

    /// Label text whose next cell holds the commitment
    pub commitment_label: String,

    /// Language display block
    pub language: String,

    /// Ratings text block
    pub ratings: String,

    /// Outer start date block
    pub start_date: String,

    /// Element inside the start date block holding the date text
    pub start_date_inner: String,

    /// Value written for any field that cannot be located
    pub fallback: String,

    /// Abort the run when the outer start date block is missing
    pub strict_start_date: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            title: "h1.title.display-3-text".to_string(),
            commitment_table: "table.basic-info-table".to_string(),
            commitment_label: "Commitment".to_string(),
            language: "div.rc-Language".to_string(),
            ratings: "div.ratings-text".to_string(),
            start_date: "div.rc-StartDateString".to_string(),
            start_date_inner: "span".to_string(),
            fallback: crate::output::NOT_FOUND.to_string(),
            strict_start_date: false,
        }
    }
}
