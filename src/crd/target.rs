//! Ranging target (H3 record)
use crate::{
    error::FormatError,
    fields::{column, parse_column},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) fn is_target_record(line: &str) -> bool {
    line.starts_with("H3")
}

/// [Target] describes the ranged spacecraft, as defined by one H3 record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Target {
    /// Target name
    pub name: String,
    /// ILRS identifier (based on COSPAR ID)
    pub id: u32,
    /// Satellite identification code
    pub sic: u16,
    /// NORAD catalog number
    pub norad: u32,
    /// Spacecraft epoch timescale
    pub timescale: u8,
    /// Target type (passive retro-reflector, transponder..)
    pub target_type: u8,
}

impl std::str::FromStr for Target {
    type Err = FormatError;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        if !is_target_record(line) {
            return Err(FormatError::UnexpectedRecord {
                expected: "H3",
                line: line.to_string(),
            });
        }
        Ok(Self {
            name: column(line, 3, 13).trim().to_string(),
            id: parse_column(line, 14, 22, "target ID")?,
            sic: parse_column(line, 23, 27, "SIC")?,
            norad: parse_column(line, 28, 36, "NORAD")?,
            timescale: parse_column(line, 37, 38, "spacecraft timescale")?,
            target_type: parse_column(line, 39, 40, "target type")?,
        })
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "H3 {:<10} {:>8} {:>4} {:>8} {} {}",
            self.name, self.id, self.sic, self.norad, self.timescale, self.target_type
        )
    }
}
