//! Error types for the Scout to MS Annika conversion pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`UsageError`] - Invalid run parameters, raised before any I/O
//! - [`MapError`] - Row mapping errors
//! - [`XlsxError`] - Workbook writing errors
//! - [`ConvertError`] - Top-level orchestration errors
//!
//! CSV parsing errors live in [`crate::parser::CsvError`] because they carry
//! line context. Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

use crate::parser::CsvError;

// =============================================================================
// Usage Errors
// =============================================================================

/// Invalid run parameters.
///
/// These are rejected before any file is opened.
#[derive(Debug, Error)]
pub enum UsageError {
    /// Crosslinker residue is not exactly one character.
    #[error("Crosslinker residue must be a single character, got '{0}'")]
    InvalidResidue(String),

    /// Crosslinker name is empty.
    #[error("Crosslinker name must not be empty")]
    EmptyCrosslinker,
}

// =============================================================================
// Mapping Errors
// =============================================================================

/// Errors while mapping Scout rows to MS Annika rows.
#[derive(Debug, Error)]
pub enum MapError {
    /// Required source column is absent from the input table.
    #[error("Missing source column: {0}")]
    MissingColumn(String),
}

// =============================================================================
// Workbook Errors
// =============================================================================

/// Errors while writing the output workbook.
#[derive(Debug, Error)]
pub enum XlsxError {
    /// Filesystem error (temp file or rename).
    #[error("Failed to write workbook: {0}")]
    IoError(#[from] std::io::Error),

    /// Spreadsheet serialization failed.
    #[error("Failed to serialize workbook: {0}")]
    WriteError(String),
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the main error type returned by
/// [`crate::transform::pipeline::convert_file`]. It wraps all lower-level
/// errors and adds pipeline-specific variants.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Invalid run parameters.
    #[error("Usage error: {0}")]
    Usage(#[from] UsageError),

    /// CSV parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Row mapping error.
    #[error("Mapping error: {0}")]
    Map(#[from] MapError),

    /// Workbook writing error.
    #[error("Workbook error: {0}")]
    Xlsx(#[from] XlsxError),

    /// Input table has no data rows.
    #[error("Input file has no data rows")]
    EmptyInput,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for mapping operations.
pub type MapResult<T> = Result<T, MapError>;

/// Result type for workbook operations.
pub type XlsxResult<T> = Result<T, XlsxError>;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // MapError -> ConvertError
        let map_err = MapError::MissingColumn("Alpha peptide".into());
        let convert_err: ConvertError = map_err.into();
        assert!(convert_err.to_string().contains("Alpha peptide"));

        // UsageError -> ConvertError
        let usage_err = UsageError::InvalidResidue("KR".into());
        let convert_err: ConvertError = usage_err.into();
        assert!(convert_err.to_string().contains("KR"));
    }

    #[test]
    fn test_residue_error_format() {
        let err = UsageError::InvalidResidue("KR".into());
        let msg = err.to_string();
        assert!(msg.contains("single character"));
        assert!(msg.contains("'KR'"));
    }
}
