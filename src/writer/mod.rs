//! MS Annika workbook writer.
//!
//! Serializes mapped rows to an `.xlsx` workbook with a single sheet named
//! `"Crosslinks"`: one header row, one data row per input row, no index
//! column. The workbook is written to a sibling temporary file and renamed
//! into place, so a failed write never leaves a partial file behind.

use std::path::{Path, PathBuf};

use crate::error::{XlsxError, XlsxResult};
use crate::models::{CellValue, CrosslinkRow, OUTPUT_COLUMNS};

/// Name of the single output sheet.
pub const CROSSLINKS_SHEET: &str = "Crosslinks";

/// Write mapped rows to an xlsx workbook.
pub fn write_crosslinks(rows: &[CrosslinkRow], path: &Path) -> XlsxResult<()> {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_active_sheet_mut();
    sheet.set_name(CROSSLINKS_SHEET);

    // Header row.
    for (col, name) in OUTPUT_COLUMNS.iter().enumerate() {
        sheet
            .get_cell_mut((col as u32 + 1, 1))
            .set_value(*name);
    }

    // Data rows, coordinates are 1-based and row 1 is the header.
    for (row_idx, row) in rows.iter().enumerate() {
        let sheet_row = row_idx as u32 + 2;
        for (col, cell) in row.cells().into_iter().enumerate() {
            let target = sheet.get_cell_mut((col as u32 + 1, sheet_row));
            match cell {
                CellValue::Int(i) => {
                    target.set_value_number(i as f64);
                }
                CellValue::Float(v) => {
                    target.set_value_number(v);
                }
                CellValue::Text(s) => {
                    target.set_value(s);
                }
            }
        }
    }

    let tmp = temp_path(path);
    umya_spreadsheet::writer::xlsx::write(&book, &tmp)
        .map_err(|e| XlsxError::WriteError(e.to_string()))?;
    std::fs::rename(&tmp, path)?;

    Ok(())
}

/// Sibling temporary path, e.g. `run1.xlsx` -> `run1.xlsx.tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
