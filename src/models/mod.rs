//! Domain models for the Scout to MS Annika conversion.
//!
//! This module contains the core data structures used throughout the pipeline:
//!
//! - [`Crosslinker`] - The crosslinker reagent (name + binding residue)
//! - [`CrosslinkType`] - Intra- vs inter-protein link classification
//! - [`CellValue`] - Best-effort typed cell value (text, integer, float)
//! - [`CrosslinkRow`] - One MS Annika output record
//! - [`OUTPUT_COLUMNS`] - The fixed 20-column output header

use serde::{Deserialize, Serialize};

// =============================================================================
// Output Schema
// =============================================================================

/// MS Annika output columns, in the exact order they appear in the workbook.
pub const OUTPUT_COLUMNS: [&str; 20] = [
    "Checked",
    "Crosslinker",
    "Crosslink Type",
    "# CSMs",
    "# Proteins",
    "Sequence A",
    "Accession A",
    "Position A",
    "Sequence B",
    "Accession B",
    "Position B",
    "Protein Descriptions A",
    "Protein Descriptions B",
    "Best CSM Score",
    "In protein A",
    "In protein B",
    "Decoy",
    "Modifications A",
    "Modifications B",
    "Confidence",
];

/// Default crosslinker name.
pub const DEFAULT_CROSSLINKER: &str = "DSSO";

/// Default residue the crosslinker binds to.
pub const DEFAULT_RESIDUE: &str = "K";

// =============================================================================
// Crosslinker
// =============================================================================

/// The crosslinker reagent used in the search.
///
/// Carries the two run-wide parameters of the conversion: the reagent name
/// (e.g. DSSO) and the single residue it binds to (e.g. K).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Crosslinker {
    /// Reagent name, e.g. "DSSO".
    pub name: String,
    /// Residue the reagent binds to, e.g. 'K'.
    pub residue: char,
}

impl Crosslinker {
    /// Create a crosslinker, validating the run parameters.
    ///
    /// The residue must be exactly one character and the name must be
    /// non-empty; anything else is a usage error, raised before any I/O.
    pub fn new(
        name: impl Into<String>,
        residue: &str,
    ) -> Result<Self, crate::error::UsageError> {
        let name = name.into();
        if name.is_empty() {
            return Err(crate::error::UsageError::EmptyCrosslinker);
        }

        let mut chars = residue.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self { name, residue: c }),
            _ => Err(crate::error::UsageError::InvalidResidue(
                residue.to_string(),
            )),
        }
    }

    /// Build an MS Annika modification string for a peptide position.
    ///
    /// # Example
    /// ```
    /// use scout2annika::models::Crosslinker;
    ///
    /// let xl = Crosslinker::new("DSSO", "K").unwrap();
    /// assert_eq!(xl.modification("5"), "K5(DSSO)");
    /// ```
    pub fn modification(&self, position: &str) -> String {
        format!("{}{}({})", self.residue, position, self.name)
    }
}

impl Default for Crosslinker {
    fn default() -> Self {
        Self {
            name: DEFAULT_CROSSLINKER.to_string(),
            residue: 'K',
        }
    }
}

// =============================================================================
// Crosslink Type
// =============================================================================

/// Whether both peptides of a pair originate from the same protein.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CrosslinkType {
    /// Both peptides from the same protein.
    Intra,
    /// Peptides from different proteins.
    Inter,
}

impl CrosslinkType {
    /// Classify from the Scout `Link-Type` value.
    ///
    /// `Intra` iff the value case-insensitively contains "intra";
    /// everything else is `Inter`.
    pub fn from_link_type(value: &str) -> Self {
        if value.to_lowercase().contains("intra") {
            Self::Intra
        } else {
            Self::Inter
        }
    }

    /// Output column value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intra => "Intra",
            Self::Inter => "Inter",
        }
    }
}

impl std::fmt::Display for CrosslinkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Cell Value
// =============================================================================

/// A workbook cell value with best-effort numeric typing.
///
/// Scout exports numeric columns as plain text; well-formed values become
/// real numbers in the output workbook, malformed ones pass through as text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CellValue {
    /// Integer cell.
    Int(i64),
    /// Floating point cell.
    Float(f64),
    /// Text cell.
    Text(String),
}

impl CellValue {
    /// Parse a raw field, trying integer, then float, falling back to text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Self::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return Self::Float(f);
        }
        Self::Text(trimmed.to_string())
    }

    /// Text cell from a string.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(s) => f.write_str(s),
        }
    }
}

// =============================================================================
// Crosslink Row
// =============================================================================

/// One MS Annika output record, derived from exactly one Scout input row.
///
/// Only the per-row varying fields are stored; the constant columns
/// (`Checked`, `# Proteins`, `In protein A/B`, `Decoy`, `Confidence`) are
/// inserted by [`CrosslinkRow::cells`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CrosslinkRow {
    /// Crosslinker name, identical for every row of a run.
    pub crosslinker: String,
    /// Intra- or inter-protein link.
    pub crosslink_type: CrosslinkType,
    /// Number of crosslinked spectrum matches.
    pub csms: CellValue,
    /// Alpha peptide sequence, spaces stripped.
    pub sequence_a: String,
    /// Alpha protein accession(s).
    pub accession_a: String,
    /// Crosslink position in the alpha peptide.
    pub position_a: CellValue,
    /// Beta peptide sequence, spaces stripped.
    pub sequence_b: String,
    /// Beta protein accession(s).
    pub accession_b: String,
    /// Crosslink position in the beta peptide.
    pub position_b: CellValue,
    /// Best crosslinked spectrum match score.
    pub best_csm_score: CellValue,
    /// Modification string for the alpha peptide, e.g. "K5(DSSO)".
    pub modifications_a: String,
    /// Modification string for the beta peptide.
    pub modifications_b: String,
}

impl CrosslinkRow {
    /// All twenty cell values in [`OUTPUT_COLUMNS`] order.
    pub fn cells(&self) -> Vec<CellValue> {
        vec![
            CellValue::text("FALSE"),
            CellValue::text(&self.crosslinker),
            CellValue::text(self.crosslink_type.as_str()),
            self.csms.clone(),
            CellValue::Int(0),
            CellValue::text(&self.sequence_a),
            CellValue::text(&self.accession_a),
            self.position_a.clone(),
            CellValue::text(&self.sequence_b),
            CellValue::text(&self.accession_b),
            self.position_b.clone(),
            CellValue::text(&self.accession_a),
            CellValue::text(&self.accession_b),
            self.best_csm_score.clone(),
            CellValue::Int(0),
            CellValue::Int(0),
            CellValue::text("FALSE"),
            CellValue::text(&self.modifications_a),
            CellValue::text(&self.modifications_b),
            CellValue::text("High"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crosslinker_valid() {
        let xl = Crosslinker::new("DSSO", "K").unwrap();
        assert_eq!(xl.name, "DSSO");
        assert_eq!(xl.residue, 'K');
    }

    #[test]
    fn test_crosslinker_rejects_long_residue() {
        assert!(Crosslinker::new("DSSO", "KR").is_err());
        assert!(Crosslinker::new("DSSO", "").is_err());
    }

    #[test]
    fn test_crosslinker_rejects_empty_name() {
        assert!(Crosslinker::new("", "K").is_err());
    }

    #[test]
    fn test_modification_format() {
        let xl = Crosslinker::new("DSSO", "K").unwrap();
        assert_eq!(xl.modification("2"), "K2(DSSO)");

        let xl = Crosslinker::new("DSBU", "C").unwrap();
        assert_eq!(xl.modification("13"), "C13(DSBU)");
    }

    #[test]
    fn test_crosslink_type_from_link_type() {
        assert_eq!(
            CrosslinkType::from_link_type("Intra Protein"),
            CrosslinkType::Intra
        );
        assert_eq!(
            CrosslinkType::from_link_type("INTRA-link"),
            CrosslinkType::Intra
        );
        assert_eq!(
            CrosslinkType::from_link_type("Inter Protein"),
            CrosslinkType::Inter
        );
        assert_eq!(CrosslinkType::from_link_type(""), CrosslinkType::Inter);
    }

    #[test]
    fn test_cell_value_parse() {
        assert_eq!(CellValue::parse("3"), CellValue::Int(3));
        assert_eq!(CellValue::parse(" 55.2 "), CellValue::Float(55.2));
        assert_eq!(CellValue::parse("n/a"), CellValue::text("n/a"));
        assert_eq!(CellValue::parse(""), CellValue::text(""));
    }

    #[test]
    fn test_cells_order_and_constants() {
        let row = CrosslinkRow {
            crosslinker: "DSSO".into(),
            crosslink_type: CrosslinkType::Intra,
            csms: CellValue::Int(3),
            sequence_a: "SSAAR".into(),
            accession_a: "P0A7X3".into(),
            position_a: CellValue::Int(2),
            sequence_b: "KKTR".into(),
            accession_b: "P0A7X3".into(),
            position_b: CellValue::Int(1),
            best_csm_score: CellValue::Float(55.2),
            modifications_a: "K2(DSSO)".into(),
            modifications_b: "K1(DSSO)".into(),
        };

        let cells = row.cells();
        assert_eq!(cells.len(), OUTPUT_COLUMNS.len());

        // Constant columns.
        assert_eq!(cells[0], CellValue::text("FALSE")); // Checked
        assert_eq!(cells[4], CellValue::Int(0)); // # Proteins
        assert_eq!(cells[14], CellValue::Int(0)); // In protein A
        assert_eq!(cells[15], CellValue::Int(0)); // In protein B
        assert_eq!(cells[16], CellValue::text("FALSE")); // Decoy
        assert_eq!(cells[19], CellValue::text("High")); // Confidence

        // Protein descriptions mirror the accessions.
        assert_eq!(cells[11], cells[6]);
        assert_eq!(cells[12], cells[9]);
    }

    #[test]
    fn test_output_column_order() {
        assert_eq!(OUTPUT_COLUMNS[0], "Checked");
        assert_eq!(OUTPUT_COLUMNS[2], "Crosslink Type");
        assert_eq!(OUTPUT_COLUMNS[13], "Best CSM Score");
        assert_eq!(OUTPUT_COLUMNS[19], "Confidence");
    }
}
