//! Output module for collected course data
//!
//! This module handles:
//! - The in-memory course table and its fixed header
//! - Exporting the table to a spreadsheet
//! - Summarizing how many fields fell back

pub mod stats;
mod table;
mod xlsx;

pub use stats::{print_statistics, HarvestStatistics};
pub use table::{CourseRecord, CourseTable, HEADER, NOT_FOUND};
pub use xlsx::write_xlsx;

use thiserror::Error;

/// Errors that can occur during export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write spreadsheet: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
