//! Consolidated Range Data (CRD) parser.
//!
//! A CRD file is a sequence of data transfer [Unit]s (H1 .. H9),
//! each one containing observation [Session]s (H4 .. H8).
//! [Station] (H2) and [Target] (H3) records apply to the active
//! session, or to the active unit when declared outside of a session.
//! Sessions inherit the metadata they do not redefine from their unit,
//! see [SessionRef].
use crate::{error::Error, reader::BufferedReader};
use std::path::Path;

mod dump;
mod parsing;
mod range;
mod session;
mod station;
mod target;
mod unit;

pub use range::RangePoint;
pub use session::{Session, SessionFlags, SessionRef};
pub use station::Station;
pub use target::Target;
pub use unit::Unit;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parsed CRD file content
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CRD {
    /// [Unit]s, in order of appearance
    pub units: Vec<Unit>,
}

impl std::str::FromStr for CRD {
    type Err = Error;
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            units: parsing::parse_units(content)?,
        })
    }
}

impl CRD {
    /// Parses given CRD file, with possible seamless
    /// .gz decompression, if compiled with the "flate2" feature.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let content = BufferedReader::new(path)?.read_content()?;
        content.parse()
    }
    /// See [Self::from_path]
    pub fn from_file(path: &str) -> Result<Self, Error> {
        Self::from_path(Path::new(path))
    }
    /// Returns an iterator over [Unit]s
    pub fn units(&self) -> impl Iterator<Item = &Unit> + '_ {
        self.units.iter()
    }
    /// Returns an iterator over all [SessionRef]s, across all units
    pub fn sessions(&self) -> impl Iterator<Item = SessionRef<'_>> + '_ {
        self.units.iter().flat_map(|unit| unit.sessions())
    }
    /// Returns number of units
    pub fn nb_units(&self) -> usize {
        self.units.len()
    }
}
