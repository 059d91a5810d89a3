//! Collected course rows and the fixed table header

use crate::crawler::CourseFields;

/// Value used for any field the extractor could not locate
pub const NOT_FOUND: &str = "not found";

/// Column headers of the exported table, in order
pub const HEADER: [&str; 6] = [
    "Course name",
    "Commitment",
    "Language",
    "Start date",
    "Course ratings",
    "Course url",
];

/// One exported row: five display fields plus the page URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub title: String,
    pub commitment: String,
    pub language: String,
    pub start_date: String,
    pub ratings: String,
    pub url: String,
}

impl CourseRecord {
    /// Builds a record from extracted fields and the page they came from
    pub fn new(fields: CourseFields, url: impl Into<String>) -> Self {
        Self {
            title: fields.title,
            commitment: fields.commitment,
            language: fields.language,
            start_date: fields.start_date,
            ratings: fields.ratings,
            url: url.into(),
        }
    }

    /// Cells in header order
    pub fn cells(&self) -> [&str; 6] {
        [
            self.title.as_str(),
            self.commitment.as_str(),
            self.language.as_str(),
            self.start_date.as_str(),
            self.ratings.as_str(),
            self.url.as_str(),
        ]
    }
}

/// Ordered course rows, in the order their URLs were discovered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseTable {
    records: Vec<CourseRecord>,
}

impl CourseTable {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row
    pub fn push(&mut self, record: CourseRecord) {
        self.records.push(record);
    }

    /// Rows in insertion order
    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Header followed by every row, as rendered in the spreadsheet
    pub fn rows(&self) -> impl Iterator<Item = [&str; 6]> + '_ {
        std::iter::once(HEADER).chain(self.records.iter().map(CourseRecord::cells))
    }
}

impl FromIterator<CourseRecord> for CourseTable {
    fn from_iter<I: IntoIterator<Item = CourseRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
