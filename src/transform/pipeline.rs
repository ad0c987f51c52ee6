//! High-level pipeline API for the Scout to MS Annika conversion.
//!
//! Combines all steps: parse the input CSV with auto-detection, map rows to
//! the MS Annika schema and write the `"Crosslinks"` workbook.
//!
//! # Example
//!
//! ```rust,ignore
//! use scout2annika::models::Crosslinker;
//! use scout2annika::transform::{convert_file, default_output_path};
//! use std::path::Path;
//!
//! let input = Path::new("run1.csv");
//! let output = default_output_path(input);
//! let xl = Crosslinker::default();
//!
//! let summary = convert_file(input, &output, &xl)?;
//! println!("Converted {} crosslinks", summary.rows);
//! ```

use std::path::{Path, PathBuf};

use crate::error::{ConvertError, ConvertResult};
use crate::models::Crosslinker;
use crate::parser::parse_file_auto;
use crate::transform::mapper::map_records;
use crate::writer::write_crosslinks;

/// Result of a completed conversion.
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    /// Number of crosslink rows written.
    pub rows: usize,
    /// Detected input encoding.
    pub encoding: String,
    /// Detected input delimiter.
    pub delimiter: char,
    /// Number of input columns.
    pub columns: usize,
    /// Path of the written workbook.
    pub output: PathBuf,
}

/// Convert a Scout result file to an MS Annika workbook.
///
/// Parses the input with encoding/delimiter auto-detection, maps every row
/// (order preserved, one output row per input row) and writes the workbook.
/// All-or-nothing: the first error aborts and no output file is left behind.
pub fn convert_file(
    input: &Path,
    output: &Path,
    xl: &Crosslinker,
) -> ConvertResult<ConvertSummary> {
    let parsed = parse_file_auto(input)?;

    if parsed.records.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let rows = map_records(&parsed, xl)?;
    write_crosslinks(&rows, output)?;

    Ok(ConvertSummary {
        rows: rows.len(),
        encoding: parsed.encoding,
        delimiter: parsed.delimiter,
        columns: parsed.headers.len(),
        output: output.to_path_buf(),
    })
}

/// Default output path: input with its extension replaced by `.xlsx`.
///
/// `run1.csv` becomes `run1.xlsx`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("xlsx")
}

/// Normalize an explicit output name: append `.xlsx` unless already present.
pub fn normalize_xlsx_path(path: &Path) -> PathBuf {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    if name.to_lowercase().ends_with(".xlsx") {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".xlsx");
        PathBuf::from(name)
    }
}
