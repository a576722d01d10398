//! Data transfer unit (H1 .. H9)
use crate::{
    crd::{session::SessionRef, Session, Station, Target},
    epoch::gregorian_utc,
    error::FormatError,
    fields::{column, parse_column},
};

use hifitime::Epoch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) fn is_unit_start(line: &str) -> bool {
    line.starts_with("H1")
}

pub(crate) fn is_unit_end(line: &str) -> bool {
    line.starts_with("H9")
}

/// [Unit] is one logical data transfer unit of a CRD file.
/// It owns its [Session]s, and Station / Target metadata
/// that apply to all of them, unless redefined within a session.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unit {
    /// Format tag, "CRD"
    pub format: String,
    /// Format revision
    pub version: String,
    /// File production time (hourly)
    pub created: Epoch,
    /// Observation sessions, in order of appearance
    pub sessions: Vec<Session>,
    /// Station declared at unit level
    pub station: Option<Station>,
    /// Target declared at unit level
    pub target: Option<Target>,
}

impl std::str::FromStr for Unit {
    type Err = FormatError;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        if !is_unit_start(line) {
            return Err(FormatError::UnexpectedRecord {
                expected: "H1",
                line: line.to_string(),
            });
        }
        let y = parse_column::<i32>(line, 10, 14, "year")?;
        let m = parse_column::<i32>(line, 15, 17, "month")?;
        let d = parse_column::<i32>(line, 18, 20, "day")?;
        let hh = parse_column::<i32>(line, 21, 23, "hours")?;
        Ok(Self {
            format: column(line, 3, 6).to_string(),
            version: column(line, 7, 9).trim().to_string(),
            created: gregorian_utc(y, m, d, hh, 0, 0, line)?,
            sessions: Vec::new(),
            station: None,
            target: None,
        })
    }
}

impl Unit {
    /// Returns an iterator over [SessionRef]s, which resolve
    /// metadata against this unit.
    pub fn sessions(&self) -> impl Iterator<Item = SessionRef<'_>> + '_ {
        self.sessions
            .iter()
            .map(move |session| SessionRef::new(self, session))
    }
    /// Returns the n-th [Session] of this unit
    pub fn session(&self, n: usize) -> Option<SessionRef<'_>> {
        self.sessions.get(n).map(|session| SessionRef::new(self, session))
    }
    /// Returns number of sessions
    pub fn nb_sessions(&self) -> usize {
        self.sessions.len()
    }
    /// Returns total number of range measurements, across all sessions
    pub fn nb_ranges(&self) -> usize {
        self.sessions.iter().map(|session| session.nb_ranges()).sum()
    }
}
