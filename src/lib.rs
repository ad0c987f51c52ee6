//! # scout2annika - Scout to MS Annika result conversion
//!
//! Converts Scout crosslink search result files (`.csv`) into the MS Annika
//! result format as Excel worksheets, for usage with IMP-X-FDR.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌──────────────┐
//! │  Scout CSV  │────▶│   Parser    │────▶│   Mapper    │────▶│  Crosslinks  │
//! │ (ISO/UTF8)  │     │ (auto-enc)  │     │ (20 cols)   │     │    .xlsx     │
//! └─────────────┘     └─────────────┘     └─────────────┘     └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use scout2annika::models::Crosslinker;
//! use scout2annika::transform::{convert_file, default_output_path};
//! use std::path::Path;
//!
//! let input = Path::new("run1.csv");
//! let xl = Crosslinker::new("DSSO", "K")?;
//! let summary = convert_file(input, &default_output_path(input), &xl)?;
//! println!("Converted {} crosslinks", summary.rows);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (Crosslinker, CrosslinkRow, output schema)
//! - [`parser`] - CSV parsing with auto-detection
//! - [`transform`] - Row mapper and pipeline
//! - [`writer`] - Workbook serialization

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod writer;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConvertError, MapError, UsageError, XlsxError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    CellValue,
    CrosslinkRow,
    CrosslinkType,
    Crosslinker,
    DEFAULT_CROSSLINKER,
    DEFAULT_RESIDUE,
    OUTPUT_COLUMNS,
};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    detect_delimiter,
    detect_encoding,
    parse_bytes_auto,
    parse_file_auto,
    parse_records,
    CsvError,
    ParseResult,
};

// =============================================================================
// Re-exports - Mapper & Pipeline
// =============================================================================

pub use transform::{
    convert_file,
    default_output_path,
    map_records,
    normalize_xlsx_path,
    ConvertSummary,
    REQUIRED_COLUMNS,
};

// =============================================================================
// Re-exports - Writer
// =============================================================================

pub use writer::{write_crosslinks, CROSSLINKS_SHEET};
