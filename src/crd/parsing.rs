//! CRD record parser
use crate::{
    crd::{
        range::{is_range_record, RangePoint},
        session::{is_session_end, is_session_start},
        station::is_station_record,
        target::is_target_record,
        unit::{is_unit_end, is_unit_start},
        Session, Station, Target, Unit,
    },
    error::{Error, FormatError},
};

use std::str::FromStr;

#[cfg(feature = "log")]
use log::{debug, warn};

/// Mutable state threaded through the line reduction
#[derive(Debug, Default)]
struct ParserState {
    /// Units parsed so far
    units: Vec<Unit>,
    /// Active unit index
    unit: Option<usize>,
    /// Active session, as (unit index, session index)
    session: Option<(usize, usize)>,
    /// Range measurements of the active session
    data: Vec<RangePoint>,
}

impl ParserState {
    /// Consumes one (upper-cased) record
    fn consume(&mut self, line: &str) -> Result<(), FormatError> {
        if is_unit_start(line) {
            #[cfg(feature = "log")]
            if let Some(unit) = self.unit {
                warn!("unit #{} was never closed", unit);
            }
            let unit = Unit::from_str(line)?;
            self.drop_session();
            #[cfg(feature = "log")]
            debug!("unit #{} {} v{}: {}", self.units.len(), unit.format, unit.version, unit.created);
            self.units.push(unit);
            self.unit = Some(self.units.len() - 1);
        } else if is_unit_end(line) {
            if self.unit.take().is_none() {
                return Err(FormatError::Orphan("H9"));
            }
            self.drop_session();
        } else if is_session_start(line) {
            let unit = self.unit.ok_or(FormatError::Orphan("H4"))?;
            #[cfg(feature = "log")]
            if self.session.is_some() {
                warn!("session opened before previous one was closed");
            }
            let session = Session::from_str(line)?;
            let sessions = &mut self.units[unit].sessions;
            sessions.push(session);
            self.session = Some((unit, sessions.len() - 1));
        } else if is_session_end(line) {
            let data = std::mem::take(&mut self.data);
            #[cfg(feature = "log")]
            debug!("session closed: {} range measurements", data.len());
            let session = self.active_session().ok_or(FormatError::Orphan("H8"))?;
            session.data = Some(data);
            self.session = None;
        } else if is_station_record(line) {
            let station = Station::from_str(line)?;
            if let Some(session) = self.active_session() {
                session.station = Some(station);
            } else if let Some(unit) = self.active_unit() {
                #[cfg(feature = "log")]
                if unit.station.is_some() {
                    warn!("unit station redefined: {}", station.name);
                }
                unit.station = Some(station);
            } else {
                return Err(FormatError::Orphan("H2"));
            }
        } else if is_target_record(line) {
            let target = Target::from_str(line)?;
            if let Some(session) = self.active_session() {
                session.target = Some(target);
            } else if let Some(unit) = self.active_unit() {
                #[cfg(feature = "log")]
                if unit.target.is_some() {
                    warn!("unit target redefined: {}", target.name);
                }
                unit.target = Some(target);
            } else {
                return Err(FormatError::Orphan("H3"));
            }
        } else if is_range_record(line) {
            self.data.push(RangePoint::from_str(line)?);
        }
        Ok(())
    }
    /// Forgets the session that remained open when its unit
    /// is finalized. Its measurements are dropped.
    fn drop_session(&mut self) {
        if self.session.take().is_some() {
            #[cfg(feature = "log")]
            warn!(
                "unterminated session: {} range measurements dropped",
                self.data.len()
            );
            self.data.clear();
        }
    }
    fn active_unit(&mut self) -> Option<&mut Unit> {
        let unit = self.unit?;
        self.units.get_mut(unit)
    }
    fn active_session(&mut self) -> Option<&mut Session> {
        let (unit, session) = self.session?;
        self.units.get_mut(unit)?.sessions.get_mut(session)
    }
    /// Finalizes the parsing process. Measurements of a session
    /// that was never closed are dropped.
    fn finish(self) -> Vec<Unit> {
        #[cfg(feature = "log")]
        if self.session.is_some() || !self.data.is_empty() {
            warn!(
                "unterminated session: {} range measurements dropped",
                self.data.len()
            );
        }
        self.units
    }
}

/// Parses all [Unit]s contained in given CRD content.
/// Records are case insensitive, unknown record types are ignored.
pub(crate) fn parse_units(content: &str) -> Result<Vec<Unit>, Error> {
    content
        .lines()
        .enumerate()
        .try_fold(ParserState::default(), |mut state, (index, line)| {
            state
                .consume(&line.to_uppercase())
                .map_err(|e| Error::format(index + 1, e))?;
            Ok(state)
        })
        .map(ParserState::finish)
}
