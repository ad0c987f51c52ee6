//! Scout CSV loader with encoding and delimiter auto-detection.
//!
//! Converts CSV rows into JSON objects keyed by header name. No MS Annika
//! specific logic here.

use csv::ReaderBuilder;
use serde_json::{json, Map, Value};
use std::path::Path;

/// CSV parsing error with context
#[derive(Debug, Clone)]
pub struct CsvError {
    pub line: usize,
    pub column: Option<String>,
    pub message: String,
}

impl std::fmt::Display for CsvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.column {
            Some(col) => {
                write!(f, "Line {}, column '{}': {}", self.line, col, self.message)
            }
            None => write!(f, "Line {}: {}", self.line, self.message),
        }
    }
}

impl std::error::Error for CsvError {}

impl CsvError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            column: None,
            message: message.into(),
        }
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }
}

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed records as JSON objects
    pub records: Vec<Value>,
    /// Detected or used encoding
    pub encoding: String,
    /// Detected or used delimiter
    pub delimiter: char,
    /// Column headers
    pub headers: Vec<String>,
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to string using the specified encoding
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        "iso-8859-1" | "latin-1" | "latin1" => {
            encoding_rs::ISO_8859_15.decode(bytes).0.to_string()
        }
        "windows-1252" | "cp1252" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.to_string()
        }
        // UTF-8, ASCII and anything unknown: lossy UTF-8
        _ => String::from_utf8_lossy(bytes).to_string(),
    }
}

/// Detect the delimiter by counting occurrences in the header line.
///
/// Scout exports are comma-separated; the comma wins ties.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse CSV content with an explicit delimiter.
///
/// Each row becomes a JSON object where keys are column headers. Quoted
/// fields (protein mappings can contain commas) are handled by the `csv`
/// crate. Rows shorter than the header are padded with empty strings.
///
/// # Example
/// ```
/// use scout2annika::parser::parse_records;
///
/// let csv = "name,age\nAlice,30\nBob,25";
/// let result = parse_records(csv, ',', "utf-8".to_string()).unwrap();
///
/// assert_eq!(result.records.len(), 2);
/// assert_eq!(result.records[0]["name"], "Alice");
/// assert_eq!(result.records[0]["age"], "30");
/// ```
pub fn parse_records(
    content: &str,
    delimiter: char,
    encoding: String,
) -> Result<ParseResult, CsvError> {
    if content.trim().is_empty() {
        return Err(CsvError::new(1, "Empty CSV file"));
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| CsvError::new(1, format!("Cannot read header: {}", e)))?
        .iter()
        .map(|s| s.trim().to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(CsvError::new(1, "No headers found"));
    }

    let mut records = Vec::new();

    for (row_idx, row_result) in reader.records().enumerate() {
        let line_num = row_idx + 2; // +1 for 0-index, +1 for header

        let row = row_result
            .map_err(|e| CsvError::new(line_num, format!("Cannot read line: {}", e)))?;

        if row.iter().all(|v| v.trim().is_empty()) {
            continue;
        }

        let mut obj = Map::new();
        for (i, header) in headers.iter().enumerate() {
            let raw_value = row.get(i).map(|s| s.trim()).unwrap_or("");
            obj.insert(header.clone(), json!(raw_value));
        }

        records.push(Value::Object(obj));
    }

    Ok(ParseResult {
        records,
        encoding,
        delimiter,
        headers,
    })
}

/// Parse CSV bytes with auto-detection of encoding and delimiter.
pub fn parse_bytes_auto(bytes: &[u8]) -> Result<ParseResult, CsvError> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let delimiter = detect_delimiter(&content);

    parse_records(&content, delimiter, encoding)
}

/// Parse a CSV file with auto-detection of encoding and delimiter.
///
/// # Example
/// ```ignore
/// let result = parse_file_auto("/path/to/run1.csv")?;
/// println!("Encoding: {}, Delimiter: '{}'", result.encoding, result.delimiter);
/// println!("Records: {}", result.records.len());
/// ```
pub fn parse_file_auto<P: AsRef<Path>>(path: P) -> Result<ParseResult, CsvError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        CsvError::new(0, format!("Cannot read file '{}': {}", path.display(), e))
    })?;

    parse_bytes_auto(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_csv() {
        let csv = "name,age\nAlice,30\nBob,25";
        let result = parse_records(csv, ',', "utf-8".into()).unwrap();

        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0]["name"], "Alice");
        assert_eq!(result.records[0]["age"], "30");
        assert_eq!(result.records[1]["name"], "Bob");
        assert_eq!(result.records[1]["age"], "25");
    }

    #[test]
    fn test_quoted_field_with_delimiter() {
        let csv = "peptide,mappings\nKSSAAR,\"P0A7X3,P0A7X4\"";
        let result = parse_records(csv, ',', "utf-8".into()).unwrap();

        assert_eq!(result.records[0]["mappings"], "P0A7X3,P0A7X4");
    }

    #[test]
    fn test_missing_values_padded() {
        let csv = "a,b,c\n1,,3";
        let result = parse_records(csv, ',', "utf-8".into()).unwrap();

        assert_eq!(result.records[0]["a"], "1");
        assert_eq!(result.records[0]["b"], "");
        assert_eq!(result.records[0]["c"], "3");
    }

    #[test]
    fn test_short_row_padded() {
        let csv = "a,b,c\n1,2";
        let result = parse_records(csv, ',', "utf-8".into()).unwrap();

        assert_eq!(result.records[0]["c"], "");
    }

    #[test]
    fn test_blank_rows_skipped() {
        let csv = "a,b\n1,2\n,\n3,4\n";
        let result = parse_records(csv, ',', "utf-8".into()).unwrap();

        assert_eq!(result.records.len(), 2);
    }

    #[test]
    fn test_empty_csv_error() {
        let result = parse_records("", ',', "utf-8".into());
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.message.contains("Empty"));
    }

    #[test]
    fn test_error_message_format() {
        let err = CsvError::new(5, "Invalid value").with_column("CSM count");

        let msg = err.to_string();
        assert!(msg.contains("Line 5"));
        assert!(msg.contains("column 'CSM count'"));
    }

    #[test]
    fn test_detect_delimiter_comma() {
        assert_eq!(detect_delimiter("a,b,c\n1,2,3"), ',');
    }

    #[test]
    fn test_detect_delimiter_semicolon() {
        assert_eq!(detect_delimiter("a;b;c\n1;2;3"), ';');
    }

    #[test]
    fn test_detect_delimiter_tab() {
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3"), '\t');
    }

    #[test]
    fn test_auto_parse() {
        let csv = "name,age\nAlice,30\nBob,25";
        let result = parse_bytes_auto(csv.as_bytes()).unwrap();

        assert_eq!(result.delimiter, ',');
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.headers, vec!["name", "age"]);
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1");
        assert!(decoded.contains("Soci"));
    }
}
