use std::fs;
use std::io::Cursor;
use std::path::Path;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use polars::prelude::*;

use crate::error::AppError;
use crate::models::IndicatorTable;

/// Rows above the data origin: the single header band of every report.
pub const HEADER_ROWS: u32 = 1;
/// Columns left of the data origin: the institution-name column.
pub const INDEX_COLS: u32 = 1;

/// Opens a report workbook and returns the cell range of its first sheet.
///
/// The format is sniffed from the file content rather than the extension, so
/// both legacy binary and zip-container workbooks load despite the archive's
/// uniform `.xls` naming convention.
pub fn read_report(path: &Path) -> Result<Range<Data>, AppError> {
    let bytes = fs::read(path)?;
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AppError::EmptyWorkbook(path.to_path_buf()))?;

    Ok(workbook.worksheet_range(&sheet)?)
}

/// Slices one indicator table out of a report sheet.
///
/// Selects the institutions' fixed rows and the table's fixed columns, both
/// relative to the data origin, and relabels them with the registry names.
/// Offsets outside the populated cell range are an error.
pub fn extract_table(
    range: &Range<Data>,
    table: &IndicatorTable,
    banks: &[(&str, u32)],
) -> Result<DataFrame, AppError> {
    let (end_row, end_col) = range
        .end()
        .ok_or_else(|| AppError::Layout(format!("{}: sheet is empty", table.name)))?;

    let mut columns = Vec::with_capacity(table.columns.len());
    for &(label, col_off) in table.columns {
        let col = INDEX_COLS + col_off;
        if col > end_col {
            return Err(AppError::Layout(format!(
                "{}: column {} ({}) outside populated range",
                table.name, col_off, label
            )));
        }

        let mut values = Vec::with_capacity(banks.len());
        for &(bank, row_off) in banks {
            let row = HEADER_ROWS + row_off;
            if row > end_row {
                return Err(AppError::Layout(format!(
                    "{}: row {} ({}) outside populated range",
                    table.name, row_off, bank
                )));
            }
            values.push(cell_to_f64(range.get_value((row, col))));
        }
        columns.push(Series::new(label, values));
    }

    Ok(DataFrame::new(columns)?)
}

fn cell_to_f64(cell: Option<&Data>) -> Option<f64> {
    match cell {
        Some(Data::Float(f)) => Some(*f),
        Some(Data::Int(i)) => Some(*i as f64),
        // reports occasionally carry figures as formatted text
        Some(Data::String(s)) => s.trim().replace(',', "").parse().ok(),
        _ => None,
    }
}
