//! Course page field extraction
//!
//! Each of the five display fields is an independent lookup against the
//! parsed page. A lookup that finds nothing yields the configured fallback
//! string instead of failing, so a page always produces a full row.
//!
//! The only exception is the outer start date block when
//! `strict-start-date` is enabled: its absence is reported as
//! [`HarvestError::Lookup`] and aborts the run.

use crate::config::{compile_selector, ExtractConfig};
use crate::{ConfigResult, HarvestError};
use scraper::{ElementRef, Html, Selector};

/// The five display fields of one course page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseFields {
    pub title: String,
    pub commitment: String,
    pub language: String,
    pub start_date: String,
    pub ratings: String,
}

/// Compiled selectors for every field lookup
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    title: Selector,
    commitment_table: Selector,
    tbody: Selector,
    commitment_label: String,
    language: Selector,
    ratings: Selector,
    start_date: Selector,
    start_date_source: String,
    start_date_inner: Selector,
    fallback: String,
    strict_start_date: bool,
}

impl FieldExtractor {
    /// Compiles the selectors named in the configuration
    ///
    /// # Returns
    ///
    /// * `Ok(FieldExtractor)` - All selectors compiled
    /// * `Err(ConfigError::InvalidSelector)` - A selector is not valid CSS
    pub fn new(config: &ExtractConfig) -> ConfigResult<Self> {
        Ok(Self {
            title: compile_selector("title", &config.title)?,
            commitment_table: compile_selector("commitment-table", &config.commitment_table)?,
            tbody: compile_selector("tbody", "tbody")?,
            commitment_label: config.commitment_label.clone(),
            language: compile_selector("language", &config.language)?,
            ratings: compile_selector("ratings", &config.ratings)?,
            start_date: compile_selector("start-date", &config.start_date)?,
            start_date_source: config.start_date.clone(),
            start_date_inner: compile_selector("start-date-inner", &config.start_date_inner)?,
            fallback: config.fallback.clone(),
            strict_start_date: config.strict_start_date,
        })
    }

    /// Runs all five lookups against a parsed page
    pub fn extract(&self, document: &Html) -> crate::Result<CourseFields> {
        Ok(CourseFields {
            title: self.title(document),
            commitment: self.commitment(document),
            language: self.language(document),
            start_date: self.start_date(document)?,
            ratings: self.ratings(document),
        })
    }

    /// Parses raw HTML and extracts all fields
    ///
    /// # Example
    ///
    /// ```
    /// use course_harvest::config::ExtractConfig;
    /// use course_harvest::crawler::FieldExtractor;
    ///
    /// let extractor = FieldExtractor::new(&ExtractConfig::default()).unwrap();
    /// let fields = extractor
    ///     .extract_html(r#"<div class="rc-Language">English</div>"#)
    ///     .unwrap();
    /// assert_eq!(fields.language, "English");
    /// assert_eq!(fields.title, "not found");
    /// ```
    pub fn extract_html(&self, html: &str) -> crate::Result<CourseFields> {
        let document = Html::parse_document(html);
        self.extract(&document)
    }

    /// Text of the course title heading
    pub fn title(&self, document: &Html) -> String {
        self.first_text(document, &self.title, "title")
    }

    /// Text of the language display block
    pub fn language(&self, document: &Html) -> String {
        self.first_text(document, &self.language, "language")
    }

    /// Text of the ratings block
    pub fn ratings(&self, document: &Html) -> String {
        self.first_text(document, &self.ratings, "ratings")
    }

    /// Text of the cell following the commitment label
    ///
    /// The label is looked up as a text node inside the first `tbody` of the
    /// basic info table; the answer is the first `td` that follows it in
    /// document order. Any missing step falls back.
    pub fn commitment(&self, document: &Html) -> String {
        self.find_commitment(document).unwrap_or_else(|| {
            tracing::debug!("commitment not found, using fallback");
            self.fallback.clone()
        })
    }

    fn find_commitment(&self, document: &Html) -> Option<String> {
        let table = document.select(&self.commitment_table).next()?;
        let tbody = table.select(&self.tbody).next()?;

        let label_id = tbody
            .descendants()
            .find(|node| {
                node.value()
                    .as_text()
                    .is_some_and(|text| text.trim() == self.commitment_label)
            })?
            .id();

        let cell = document
            .tree
            .root()
            .descendants()
            .skip_while(|node| node.id() != label_id)
            .filter_map(ElementRef::wrap)
            .find(|element| element.value().name() == "td")?;

        Some(element_text(cell))
    }

    /// Text of the element nested inside the start date block
    ///
    /// A missing inner element falls back. A missing outer block falls back
    /// too unless strict mode is enabled, in which case it is an error.
    pub fn start_date(&self, document: &Html) -> crate::Result<String> {
        let Some(outer) = document.select(&self.start_date).next() else {
            if self.strict_start_date {
                return Err(HarvestError::Lookup {
                    field: "start date",
                    selector: self.start_date_source.clone(),
                });
            }
            tracing::debug!("start date block not found, using fallback");
            return Ok(self.fallback.clone());
        };

        Ok(match outer.select(&self.start_date_inner).next() {
            Some(inner) => element_text(inner),
            None => {
                tracing::debug!("start date text not found, using fallback");
                self.fallback.clone()
            }
        })
    }

    fn first_text(&self, document: &Html, selector: &Selector, field: &str) -> String {
        match document.select(selector).next() {
            Some(element) => element_text(element),
            None => {
                tracing::debug!("{} not found, using fallback", field);
                self.fallback.clone()
            }
        }
    }
}

/// Concatenated descendant text, trimmed
fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
