//! Observation session (H4 .. H8)
use crate::{
    crd::{range::RangePoint, Station, Target, Unit},
    epoch::parse_gregorian,
    error::{Error, FormatError, Metadata},
    fields::parse_column,
};

use hifitime::{Duration, Epoch};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) fn is_session_start(line: &str) -> bool {
    line.starts_with("H4")
}

pub(crate) fn is_session_end(line: &str) -> bool {
    line.starts_with("H8")
}

/// Correction and quality flags, as declared in the H4 record
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionFlags {
    pub troposphere_corrected: u8,
    pub center_of_mass_corrected: u8,
    pub receive_amplitude_corrected: u8,
    pub station_delay_corrected: u8,
    pub spacecraft_delay_corrected: u8,
    /// Range type indicator (one way, two way..)
    pub range_type: u8,
    /// Data quality alert indicator
    pub data_quality: u8,
}

impl SessionFlags {
    fn parse(line: &str) -> Result<Self, FormatError> {
        Ok(Self {
            troposphere_corrected: parse_column(line, 49, 50, "troposphere correction flag")?,
            center_of_mass_corrected: parse_column(line, 51, 52, "center of mass flag")?,
            receive_amplitude_corrected: parse_column(line, 53, 54, "receive amplitude flag")?,
            station_delay_corrected: parse_column(line, 55, 56, "station delay flag")?,
            spacecraft_delay_corrected: parse_column(line, 57, 58, "spacecraft delay flag")?,
            range_type: parse_column(line, 59, 60, "range type")?,
            data_quality: parse_column(line, 61, 62, "data quality")?,
        })
    }
}

/// [Session] is one observation pass within a [Unit].
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Session {
    /// Session start time, if specified
    pub start: Option<Epoch>,
    /// Session end time, if specified
    pub end: Option<Epoch>,
    /// Correction & quality flags
    pub flags: SessionFlags,
    /// Range measurements, only available once the session has been closed (H8)
    pub data: Option<Vec<RangePoint>>,
    /// Station declared within this session
    pub station: Option<Station>,
    /// Target declared within this session
    pub target: Option<Target>,
}

impl std::str::FromStr for Session {
    type Err = FormatError;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        if !is_session_start(line) {
            return Err(FormatError::UnexpectedRecord {
                expected: "H4",
                line: line.to_string(),
            });
        }
        Ok(Self {
            start: parse_gregorian(line, 6)?,
            end: parse_gregorian(line, 26)?,
            flags: SessionFlags::parse(line)?,
            data: None,
            station: None,
            target: None,
        })
    }
}

impl Session {
    /// Returns true once the closing H8 record was encountered
    pub fn is_closed(&self) -> bool {
        self.data.is_some()
    }
    /// Returns an iterator over range measurements
    pub fn ranges(&self) -> impl Iterator<Item = &RangePoint> + '_ {
        self.data.iter().flatten()
    }
    /// Returns number of range measurements
    pub fn nb_ranges(&self) -> usize {
        self.data.as_ref().map_or(0, |data| data.len())
    }
    /// Returns session duration, when both start and end are specified
    pub fn duration(&self) -> Option<Duration> {
        Some(self.end? - self.start?)
    }
}

/// Two-level lookup: self value, or parent value
pub(crate) fn inherit<'a, T>(
    own: Option<&'a T>,
    parent: Option<&'a T>,
    field: Metadata,
) -> Result<&'a T, Error> {
    own.or(parent).ok_or(Error::MissingMetadata(field))
}

/// [SessionRef] borrows a [Session] along with its owning [Unit],
/// so metadata the session does not define is resolved at unit level.
#[derive(Debug, Copy, Clone)]
pub struct SessionRef<'a> {
    unit: &'a Unit,
    session: &'a Session,
}

impl<'a> SessionRef<'a> {
    pub(crate) fn new(unit: &'a Unit, session: &'a Session) -> Self {
        Self { unit, session }
    }
    /// Owning [Unit]
    pub fn unit(&self) -> &'a Unit {
        self.unit
    }
    /// Underlying [Session]
    pub fn session(&self) -> &'a Session {
        self.session
    }
    /// [Station] that applies to this session
    pub fn station(&self) -> Result<&'a Station, Error> {
        inherit(
            self.session.station.as_ref(),
            self.unit.station.as_ref(),
            Metadata::Station,
        )
    }
    /// [Target] that applies to this session
    pub fn target(&self) -> Result<&'a Target, Error> {
        inherit(
            self.session.target.as_ref(),
            self.unit.target.as_ref(),
            Metadata::Target,
        )
    }
}

impl<'a> std::ops::Deref for SessionRef<'a> {
    type Target = Session;
    fn deref(&self) -> &Self::Target {
        self.session
    }
}
