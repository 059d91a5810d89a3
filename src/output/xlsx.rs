//! Spreadsheet export
//!
//! Writes the header and every collected row to a single worksheet. An
//! existing file at the destination is replaced.

use crate::output::table::CourseTable;
use crate::output::ExportResult;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Writes the course table to an `.xlsx` workbook
///
/// # Arguments
///
/// * `table` - The collected course rows
/// * `sheet_name` - Name of the worksheet
/// * `output_path` - Destination file, overwritten if present
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the workbook
/// * `Err(ExportError)` - The sheet could not be built or the file written
pub fn write_xlsx(table: &CourseTable, sheet_name: &str, output_path: &Path) -> ExportResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (row, cells) in table.rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            worksheet.write_string(row as u32, col as u16, *cell)?;
        }
    }

    workbook.save(output_path)?;
    tracing::info!(
        "Wrote {} courses to {}",
        table.len(),
        output_path.display()
    );

    Ok(())
}
