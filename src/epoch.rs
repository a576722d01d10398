//! Calendar and Modified Julian Day helpers
use crate::{error::FormatError, fields::parse_column};
use hifitime::{Duration, Epoch};

/// Sub-field value that marks an unspecified date
const SENTINEL: i32 = -1;

/// Parses the `YYYY MM DD hh mm ss` block starting at `offset`.
/// Returns None when any of the sub-fields is the `-1` sentinel.
pub(crate) fn parse_gregorian(line: &str, offset: usize) -> Result<Option<Epoch>, FormatError> {
    let y = parse_column::<i32>(line, offset, offset + 4, "year")?;
    let m = parse_column::<i32>(line, offset + 5, offset + 7, "month")?;
    let d = parse_column::<i32>(line, offset + 8, offset + 10, "day")?;
    let hh = parse_column::<i32>(line, offset + 11, offset + 13, "hours")?;
    let mm = parse_column::<i32>(line, offset + 14, offset + 16, "minutes")?;
    let ss = parse_column::<i32>(line, offset + 17, offset + 19, "seconds")?;

    if [y, m, d, hh, mm, ss].contains(&SENTINEL) {
        return Ok(None);
    }

    gregorian_utc(y, m, d, hh, mm, ss, line).map(Some)
}

/// Builds a UTC [Epoch], rejecting invalid calendar dates
pub(crate) fn gregorian_utc(
    y: i32,
    m: i32,
    d: i32,
    hh: i32,
    mm: i32,
    ss: i32,
    line: &str,
) -> Result<Epoch, FormatError> {
    let date = FormatError::Date(line.to_string());
    let (m, d, hh, mm, ss) = (
        u8::try_from(m).or(Err(date.clone()))?,
        u8::try_from(d).or(Err(date.clone()))?,
        u8::try_from(hh).or(Err(date.clone()))?,
        u8::try_from(mm).or(Err(date.clone()))?,
        u8::try_from(ss).or(Err(date.clone()))?,
    );
    Epoch::maybe_from_gregorian_utc(y, m, d, hh, mm, ss, 0).or(Err(date))
}

/// Converts a (MJD day count, seconds of day) pair to [Epoch].
/// `seconds_of_day` must be finite.
pub fn from_mjd(day: i32, seconds_of_day: f64) -> Epoch {
    Epoch::from_mjd_utc(f64::from(day)) + Duration::from_seconds(seconds_of_day)
}

/// Converts an [Epoch] to fractional UTC MJD days
pub fn to_mjd(epoch: Epoch) -> f64 {
    epoch.to_mjd_utc_days()
}
