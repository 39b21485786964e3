use crate::error::ExportError;
use crate::report::ResultTable;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// The spreadsheet written when no path is given.
pub const DEFAULT_OUTPUT: &str = "data.xlsx";

/// Widest column set when sizing to content.
const MAX_COLUMN_WIDTH: usize = 80;

/// Build the workbook: a bold header row of column labels followed by one row per url.
pub fn to_workbook(table: &ResultTable) -> Result<Workbook, ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    let columns = table.columns();
    let records = table.records();

    for (col, label) in columns.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *label, &header)?;

        let width = records
            .iter()
            .filter_map(|r| r.get(col as usize))
            .map(|v| v.chars().count())
            .chain(std::iter::once(label.chars().count()))
            .max()
            .unwrap_or_default()
            .min(MAX_COLUMN_WIDTH);

        worksheet.set_column_width(col, width as f64 + 2.0)?;
    }

    for (row, record) in records.iter().enumerate() {
        for (col, value) in record.iter().enumerate() {
            worksheet.write_string(row as u32 + 1, col as u16, *value)?;
        }
    }

    Ok(workbook)
}

/// Write the table to an `.xlsx` file.
pub fn write_xlsx(table: &ResultTable, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let mut workbook = to_workbook(table)?;
    workbook.save(path.as_ref())?;

    log::info!("saved {}", path.as_ref().display());

    Ok(())
}
