//! Ranging station (H2 record)
use crate::{
    error::FormatError,
    fields::{column, parse_column},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) fn is_station_record(line: &str) -> bool {
    line.starts_with("H2")
}

/// [Station] describes the ranging station, as defined by one H2 record.
/// Values are not range checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Station {
    /// Station name
    pub name: String,
    /// CDP pad identifier
    pub id: u16,
    /// CDP 2-digit system number
    pub system: u8,
    /// CDP 2-digit occupancy sequence number
    pub occupancy: u8,
    /// Station epoch timescale
    pub timescale: u8,
}

impl std::str::FromStr for Station {
    type Err = FormatError;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        if !is_station_record(line) {
            return Err(FormatError::UnexpectedRecord {
                expected: "H2",
                line: line.to_string(),
            });
        }
        Ok(Self {
            name: column(line, 3, 13).trim().to_string(),
            id: parse_column(line, 14, 18, "station ID")?,
            system: parse_column(line, 19, 21, "system number")?,
            occupancy: parse_column(line, 22, 24, "occupancy sequence")?,
            timescale: parse_column(line, 25, 27, "station timescale")?,
        })
    }
}

impl std::fmt::Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "H2 {:<10} {:>4} {:02} {:02} {:02}",
            self.name, self.id, self.system, self.occupancy, self.timescale
        )
    }
}
