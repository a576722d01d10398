//! Fixed-column and whitespace-delimited field helpers
use crate::error::FormatError;
use std::str::FromStr;

/// Returns `line[start..end]`, clipped to the line length.
/// Out of bounds or non ASCII boundaries yield an empty field,
/// which then fails numeric coercion.
pub(crate) fn column(line: &str, start: usize, end: usize) -> &str {
    let end = end.min(line.len());
    let start = start.min(end);
    line.get(start..end).unwrap_or("")
}

/// Parses the (trimmed) fixed-column field `line[start..end]`
pub(crate) fn parse_column<T: FromStr>(
    line: &str,
    start: usize,
    end: usize,
    field: &'static str,
) -> Result<T, FormatError> {
    let content = column(line, start, end);
    T::from_str(content.trim()).or(Err(FormatError::Field {
        field,
        content: content.to_string(),
        line: line.to_string(),
    }))
}

/// Parses a whitespace-delimited field
pub(crate) fn parse_item<T: FromStr>(
    item: &str,
    line: &str,
    field: &'static str,
) -> Result<T, FormatError> {
    T::from_str(item).or(Err(FormatError::Field {
        field,
        content: item.to_string(),
        line: line.to_string(),
    }))
}
