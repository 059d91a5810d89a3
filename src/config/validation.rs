use crate::config::types::{CatalogConfig, Config, ExtractConfig, HttpConfig, OutputConfig};
use crate::{ConfigError, ConfigResult};
use scraper::Selector;
use url::Url;

/// Excel refuses worksheet names longer than this
const MAX_SHEET_NAME_LEN: usize = 31;

/// Characters Excel refuses anywhere in a worksheet name
const INVALID_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_catalog_config(&config.catalog)?;
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    validate_extract_config(&config.extract)?;
    Ok(())
}

/// Validates the sitemap location
fn validate_catalog_config(config: &CatalogConfig) -> ConfigResult<()> {
    let url = Url::parse(&config.sitemap_url).map_err(|e| {
        ConfigError::InvalidUrl(format!(
            "Invalid sitemap-url '{}': {}",
            config.sitemap_url, e
        ))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "sitemap-url '{}' must use HTTP or HTTPS",
            config.sitemap_url
        )));
    }

    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> ConfigResult<()> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "timeout-secs must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> ConfigResult<()> {
    if config.path.is_empty() {
        return Err(ConfigError::Validation("path cannot be empty".to_string()));
    }

    if config.sheet_name.is_empty() {
        return Err(ConfigError::Validation(
            "sheet-name cannot be empty".to_string(),
        ));
    }

    if config.sheet_name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(ConfigError::Validation(format!(
            "sheet-name must be at most {} characters, got '{}'",
            MAX_SHEET_NAME_LEN, config.sheet_name
        )));
    }

    if config.sheet_name.contains(INVALID_SHEET_CHARS) {
        return Err(ConfigError::Validation(format!(
            "sheet-name cannot contain any of [ ] : * ? / \\, got '{}'",
            config.sheet_name
        )));
    }

    if config.sheet_name.starts_with('\'') || config.sheet_name.ends_with('\'') {
        return Err(ConfigError::Validation(format!(
            "sheet-name cannot start or end with an apostrophe, got '{}'",
            config.sheet_name
        )));
    }

    Ok(())
}

/// Validates extraction selectors by compiling each of them
fn validate_extract_config(config: &ExtractConfig) -> ConfigResult<()> {
    for (key, selector) in [
        ("title", &config.title),
        ("commitment-table", &config.commitment_table),
        ("language", &config.language),
        ("ratings", &config.ratings),
        ("start-date", &config.start_date),
        ("start-date-inner", &config.start_date_inner),
    ] {
        compile_selector(key, selector)?;
    }

    if config.commitment_label.trim().is_empty() {
        return Err(ConfigError::Validation(
            "commitment-label cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Compiles a CSS selector, naming the offending config key on failure
pub fn compile_selector(key: &str, selector: &str) -> ConfigResult<Selector> {
    Selector::parse(selector).map_err(|e| {
        ConfigError::InvalidSelector(format!("{} = '{}': {:?}", key, selector, e))
    })
}
