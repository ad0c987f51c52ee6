//! Row mapper: derive MS Annika output records from Scout input rows.
//!
//! The entire algorithm of the conversion lives here. Each output row is
//! fully determined by its input row plus the run-wide [`Crosslinker`];
//! row order is preserved and the output row count equals the input row
//! count.

use serde_json::Value;

use crate::error::{MapError, MapResult};
use crate::models::{CellValue, CrosslinkRow, CrosslinkType, Crosslinker};
use crate::parser::ParseResult;

/// Scout columns that must be present in the input table.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "Link-Type",
    "CSM count",
    "Alpha peptide",
    "Alpha protein mapping(s)",
    "Alpha peptide position",
    "Beta peptide",
    "Beta protein mapping(s)",
    "Beta peptide position",
    "Score",
];

/// Map a parsed Scout table to MS Annika rows.
///
/// Verifies all required source columns are present before mapping any row,
/// so no partial output is ever produced. Malformed numeric values pass
/// through best-effort (see [`CellValue::parse`]).
///
/// # Example
/// ```
/// use scout2annika::models::Crosslinker;
/// use scout2annika::parser::parse_records;
/// use scout2annika::transform::map_records;
///
/// let csv = "\
/// Link-Type,CSM count,Alpha peptide,Alpha protein mapping(s),Alpha peptide position,\
/// Beta peptide,Beta protein mapping(s),Beta peptide position,Score\n\
/// Intra Protein,3,S S A A R,P0A7X3,2,K K T R,P0A7X3,1,55.2";
/// let parsed = parse_records(csv, ',', "utf-8".to_string()).unwrap();
///
/// let xl = Crosslinker::new("DSSO", "K").unwrap();
/// let rows = map_records(&parsed, &xl).unwrap();
///
/// assert_eq!(rows[0].sequence_a, "SSAAR");
/// assert_eq!(rows[0].modifications_a, "K2(DSSO)");
/// ```
pub fn map_records(parsed: &ParseResult, xl: &Crosslinker) -> MapResult<Vec<CrosslinkRow>> {
    for column in REQUIRED_COLUMNS {
        if !parsed.headers.iter().any(|h| h == column) {
            return Err(MapError::MissingColumn(column.to_string()));
        }
    }

    let rows = parsed.records.iter().map(|record| map_row(record, xl)).collect();

    Ok(rows)
}

/// Derive a single output row.
fn map_row(record: &Value, xl: &Crosslinker) -> CrosslinkRow {
    let position_a = field(record, "Alpha peptide position");
    let position_b = field(record, "Beta peptide position");

    CrosslinkRow {
        crosslinker: xl.name.clone(),
        crosslink_type: CrosslinkType::from_link_type(field(record, "Link-Type")),
        csms: CellValue::parse(field(record, "CSM count")),
        sequence_a: strip_spaces(field(record, "Alpha peptide")),
        accession_a: field(record, "Alpha protein mapping(s)").to_string(),
        position_a: CellValue::parse(position_a),
        sequence_b: strip_spaces(field(record, "Beta peptide")),
        accession_b: field(record, "Beta protein mapping(s)").to_string(),
        position_b: CellValue::parse(position_b),
        best_csm_score: CellValue::parse(field(record, "Score")),
        modifications_a: xl.modification(position_a.trim()),
        modifications_b: xl.modification(position_b.trim()),
    }
}

/// Field lookup; header presence is checked up front, so absent keys only
/// happen for rows the parser padded with empty strings.
fn field<'a>(record: &'a Value, name: &str) -> &'a str {
    record.get(name).and_then(Value::as_str).unwrap_or("")
}

/// Scout writes peptides with spaces between residues ("S S A A R").
fn strip_spaces(value: &str) -> String {
    value.replace(' ', "")
}
