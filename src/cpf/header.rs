//! CPF header lines parsing helpers
use crate::{
    epoch::parse_gregorian,
    error::FormatError,
    fields::column,
};
use hifitime::Epoch;

pub(crate) fn is_header_line1(content: &str) -> bool {
    content.starts_with("H1") || content.starts_with("h1")
}

pub(crate) fn is_header_line2(content: &str) -> bool {
    content.starts_with("H2") || content.starts_with("h2")
}

/// Basic information header
pub(crate) struct Line1 {
    /// Target name
    pub name: String,
}

impl std::str::FromStr for Line1 {
    type Err = FormatError;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            name: column(line, 35, 45).trim().to_string(),
        })
    }
}

/// Target & time span header
pub(crate) struct Line2 {
    pub start: Epoch,
    pub end: Epoch,
}

impl std::str::FromStr for Line2 {
    type Err = FormatError;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let start = parse_gregorian(line, 26)?.ok_or(FormatError::Date(line.to_string()))?;
        let end = parse_gregorian(line, 46)?.ok_or(FormatError::Date(line.to_string()))?;
        Ok(Self { start, end })
    }
}

impl Line2 {
    pub(crate) fn to_parts(&self) -> (Epoch, Epoch) {
        (self.start, self.end)
    }
}
