//! # StudyArch CSV Encoding
//!
//! File: lib/src/common/table/csv.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studyarch
//!
//! ## Overview
//!
//! This module implements the minimal-quoting CSV encoding used for the
//! `Data.csv` files written into each container's staging directory. The
//! encoding is deliberately small: the archive format only ever stores
//! short text snippets and base file names, so a full CSV crate would be
//! overkill for the writing-only path this library needs.
//!
//! ## Architecture
//!
//! Two functions:
//! - **`encode_field`**: Returns the field verbatim unless it contains the
//!   delimiter (`,`), a double quote, or a line break; in that case the
//!   field is wrapped in double quotes and embedded quotes are doubled.
//! - **`encode_row`**: Joins encoded fields with `,` and terminates the row
//!   with a single `\n`.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::common::table::csv;
//!
//! let row = csv::encode_row(&["hello".into(), String::new(), String::new()]);
//! assert_eq!(row, "hello,,\n");
//! ```
//!

/// Encodes a single CSV field using minimal quoting.
///
/// Fields containing none of `,`, `"`, `\n`, `\r` are returned unchanged.
/// Otherwise the field is wrapped in double quotes and every embedded
/// double quote is doubled (`"` becomes `""`).
///
/// # Arguments
///
/// * `field` - The raw cell value.
///
/// # Returns
///
/// * `String` - The encoded field, safe to join with `,`.
pub fn encode_field(field: &str) -> String {
    // Scan for characters that force quoting.
    let needs_quote = field.contains(',')
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r');

    if !needs_quote {
        // Fast path: the field is written verbatim.
        return field.to_string();
    }

    // Double embedded quotes, then wrap the whole field.
    let escaped = field.replace('"', "\"\"");
    let mut quoted = String::with_capacity(escaped.len() + 2);
    quoted.push('"');
    quoted.push_str(&escaped);
    quoted.push('"');
    quoted
}

/// Encodes one table row: fields joined with `,`, terminated with `\n`.
///
/// Empty fields produce empty cells (consecutive delimiters), which is how
/// absent facets appear in the table.
///
/// # Arguments
///
/// * `fields` - The raw cell values, in column order.
///
/// # Returns
///
/// * `String` - The encoded row including its trailing newline.
pub fn encode_row(fields: &[String]) -> String {
    let encoded: Vec<String> = fields.iter().map(|f| encode_field(f)).collect();
    let mut row = encoded.join(",");
    row.push('\n');
    row
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    /// Plain fields pass through unchanged.
    #[test]
    fn test_encode_field_plain() {
        assert_eq!(encode_field("hello"), "hello");
        assert_eq!(encode_field(""), "");
        assert_eq!(encode_field("bonjour.mp3"), "bonjour.mp3");
    }

    /// Fields containing the delimiter are quoted.
    #[test]
    fn test_encode_field_with_comma() {
        assert_eq!(encode_field("hello, world"), "\"hello, world\"");
    }

    /// Embedded quotes are doubled and the field is wrapped.
    #[test]
    fn test_encode_field_with_quote() {
        assert_eq!(encode_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    /// Line breaks force quoting so the row structure survives.
    #[test]
    fn test_encode_field_with_newline() {
        assert_eq!(encode_field("line1\nline2"), "\"line1\nline2\"");
    }

    /// Rows join fields with commas and end with a newline; empty fields
    /// produce empty cells.
    #[test]
    fn test_encode_row() {
        let row = encode_row(&["hello".into(), String::new(), String::new()]);
        assert_eq!(row, "hello,,\n");

        let header = encode_row(&["1 Text".into(), "1 Image".into(), "1 Audio".into()]);
        assert_eq!(header, "1 Text,1 Image,1 Audio\n");
    }
}
