use hifitime::Epoch;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Metadata a [crate::crd::Session] may inherit from its [crate::crd::Unit]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Metadata {
    Station,
    Target,
}

impl std::fmt::Display for Metadata {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Station => f.write_str("station"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Edge of a prediction table that prevents designing
/// a centered interpolation window.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Boundary {
    Start,
    End,
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Start => f.write_str(
                "timestamp too close to start, try the previous day's CPF file",
            ),
            Self::End => f.write_str("timestamp too close to end, try the next day's CPF file"),
        }
    }
}

/// Record level parsing errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormatError {
    #[error("not a {expected} record: \"{line}\"")]
    UnexpectedRecord { expected: &'static str, line: String },
    #[error("failed to parse {field} from \"{content}\" in \"{line}\"")]
    Field {
        field: &'static str,
        content: String,
        line: String,
    },
    #[error("invalid calendar date in \"{0}\"")]
    Date(String),
    #[error("missing fields in \"{0}\"")]
    MissingFields(String),
    #[error("{0} record without an active unit or session")]
    Orphan(&'static str),
    #[error("missing mandatory {0} record")]
    MissingRecord(&'static str),
}

/// Crate level errors
#[derive(Debug, Error)]
pub enum Error {
    #[error("line {line}: {source}")]
    Format {
        line: usize,
        #[source]
        source: FormatError,
    },
    #[error("missing {0} metadata in both session and unit")]
    MissingMetadata(Metadata),
    #[error("{epoch} outside prediction span [{start}, {end}]")]
    OutOfRange {
        epoch: Epoch,
        start: Epoch,
        end: Epoch,
    },
    #[error("cannot interpolate: {0}")]
    InsufficientData(Boundary),
    #[error("file i/o error")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Attaches the (1-based) line number to a record [FormatError]
    pub(crate) fn format(line: usize, source: FormatError) -> Self {
        Self::Format { line, source }
    }
}

impl From<FormatError> for Error {
    fn from(source: FormatError) -> Self {
        Self::Format { line: 0, source }
    }
}
