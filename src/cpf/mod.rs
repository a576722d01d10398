//! Consolidated Prediction Format (CPF) parser and interpolator.
//!
//! A CPF file describes the predicted trajectory of a single spacecraft
//! as a table of position vectors. [Prediction::interpolate] reconstructs
//! the position at any instant of the declared validity span, using
//! a degree 9 interpolant fitted to the 10 samples centered on that instant.
use crate::{
    epoch::to_mjd,
    error::{Error, FormatError},
    reader::BufferedReader,
};
use hifitime::{Epoch, TimeScale};
use itertools::Itertools;
use std::{path::Path, str::FromStr};

#[cfg(feature = "log")]
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod header;
mod interpolation;
mod position;

use header::{is_header_line1, is_header_line2, Line1, Line2};
use interpolation::Window;
use position::{position_entry, PositionEntry};

pub use interpolation::WINDOW_SIZE;

/// 3D position, expressed in the file reference frame (meters)
pub type Vector3D = (f64, f64, f64);

/// One prediction table entry
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    /// Sampling instant (UTC)
    pub epoch: Epoch,
    /// Predicted position
    pub position: Vector3D,
}

impl Sample {
    /// Sampling instant, as fractional Modified Julian Day
    pub fn mjd(&self) -> f64 {
        to_mjd(self.epoch)
    }
}

/// [Prediction] is the content of one CPF file
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Prediction {
    /// Target name
    pub name: String,
    /// Start of validity span
    pub start: Epoch,
    /// End of validity span
    pub end: Epoch,
    /// Samples, in chronological order
    samples: Vec<Sample>,
    /// Last interpolation window
    #[cfg_attr(feature = "serde", serde(skip))]
    window: Option<Window>,
}

impl Prediction {
    /// Builds a new [Prediction] from a possibly unsorted table.
    /// Samples are sorted in chronological order (stable sort),
    /// only the first of identical epochs is retained.
    pub fn new(name: &str, start: Epoch, end: Epoch, samples: Vec<Sample>) -> Self {
        let samples = samples
            .into_iter()
            .sorted_by_key(|s| s.epoch)
            .dedup_by(|a, b| a.epoch == b.epoch)
            .collect();
        Self {
            name: name.to_string(),
            start,
            end,
            samples,
            window: None,
        }
    }
    /// Parses given CPF file, with possible seamless
    /// .gz decompression, if compiled with the "flate2" feature.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let content = BufferedReader::new(path)?.read_content()?;
        content.parse()
    }
    /// See [Self::from_path]
    pub fn from_file(path: &str) -> Result<Self, Error> {
        Self::from_path(Path::new(path))
    }
    /// Returns the prediction table, in chronological order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
    /// Returns number of samples
    pub fn nb_samples(&self) -> usize {
        self.samples.len()
    }
    /// Returns first sample epoch
    pub fn first_epoch(&self) -> Option<Epoch> {
        self.samples.first().map(|s| s.epoch)
    }
    /// Returns last sample epoch
    pub fn last_epoch(&self) -> Option<Epoch> {
        self.samples.last().map(|s| s.epoch)
    }
    /// Returns true if `t` lies within the declared validity span
    pub fn is_valid(&self, t: Epoch) -> bool {
        t >= self.start && t <= self.end
    }
    /// Returns the time interval the cached interpolant is valid for
    pub fn cached_interval(&self) -> Option<(Epoch, Epoch)> {
        self.window.as_ref().map(|w| w.interval())
    }
    /// Interpolates the position at `t`. The interpolant is cached
    /// and reused while `t` lies in between its two central samples,
    /// which suits monotonically increasing queries.
    /// Fails when `t` is outside the declared validity span,
    /// or when fewer than 5 samples exist on either side of `t`.
    pub fn interpolate(&mut self, t: Epoch) -> Result<Vector3D, Error> {
        if !self.is_valid(t) {
            return Err(Error::OutOfRange {
                epoch: t,
                start: self.start,
                end: self.end,
            });
        }

        let t = t.to_time_scale(TimeScale::UTC);

        if let Some(window) = self.window.as_ref().filter(|w| w.contains(t)) {
            return Ok(window.evaluate(t));
        }

        let window = Window::design(&self.samples, t)?;
        #[cfg(feature = "log")]
        debug!("{}: new interpolation window {:?}", self.name, window.interval());

        let position = window.evaluate(t);
        self.window = Some(window);
        Ok(position)
    }
}

impl FromStr for Prediction {
    type Err = Error;
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let mut name = Option::<String>::None;
        let mut span = Option::<(Epoch, Epoch)>::None;
        let mut samples = Vec::<Sample>::new();

        for (index, line) in content.lines().enumerate() {
            let format = |e| Error::format(index + 1, e);
            if is_header_line1(line) {
                let l1 = Line1::from_str(line).map_err(format)?;
                name = Some(l1.name);
            } else if is_header_line2(line) {
                let l2 = Line2::from_str(line).map_err(format)?;
                span = Some(l2.to_parts());
            } else if position_entry(line) {
                let entry = PositionEntry::from_str(line).map_err(format)?;
                samples.push(entry.to_sample());
            }
        }

        let name = name.ok_or(FormatError::MissingRecord("H1"))?;
        let (start, end) = span.ok_or(FormatError::MissingRecord("H2"))?;

        #[cfg(feature = "log")]
        debug!("{}: {} samples [{}, {}]", name, samples.len(), start, end);

        Ok(Self::new(&name, start, end, samples))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hifitime::Unit;

    /// Third order polynomial trajectory, seconds since midnight
    fn trajectory(t: f64) -> Vector3D {
        (
            7000.0 + 0.5 * t - 1.0E-4 * t.powi(2) + 2.0E-8 * t.powi(3),
            -1200.0 + 3.0 * t + 2.0E-5 * t.powi(2),
            350.0 - 0.25 * t + 1.0E-7 * t.powi(3),
        )
    }

    fn polynomial_prediction() -> Prediction {
        let t0 = Epoch::from_gregorian_utc_at_midnight(2021, 7, 28);
        let samples = (0..30)
            .map(|i| {
                let t = i as f64 * 60.0;
                Sample {
                    epoch: t0 + t * Unit::Second,
                    position: trajectory(t),
                }
            })
            .collect();
        Prediction::new("poly", t0, t0 + 29.0 * Unit::Minute, samples)
    }

    #[test]
    fn polynomial_reproduction() {
        let mut prediction = polynomial_prediction();
        let t0 = prediction.start;
        for t in [300.0, 330.5, 777.25, 1000.0, 1234.0, 1319.9] {
            let (x, y, z) = prediction.interpolate(t0 + t * Unit::Second).unwrap();
            let (x_ref, y_ref, z_ref) = trajectory(t);
            assert!((x - x_ref).abs() < 1.0E-6, "x error at t={}", t);
            assert!((y - y_ref).abs() < 1.0E-6, "y error at t={}", t);
            assert!((z - z_ref).abs() < 1.0E-6, "z error at t={}", t);
        }
    }

    #[test]
    fn cached_window() {
        let mut prediction = polynomial_prediction();
        let t0 = prediction.start;
        assert!(prediction.cached_interval().is_none());

        prediction.interpolate(t0 + 610.0 * Unit::Second).unwrap();
        let interval = (t0 + 10.0 * Unit::Minute, t0 + 11.0 * Unit::Minute);
        assert_eq!(prediction.cached_interval(), Some(interval));

        // within cached interval: no update
        prediction.interpolate(t0 + 659.0 * Unit::Second).unwrap();
        assert_eq!(prediction.cached_interval(), Some(interval));

        // cache miss
        prediction.interpolate(t0 + 661.0 * Unit::Second).unwrap();
        assert_eq!(
            prediction.cached_interval(),
            Some((t0 + 11.0 * Unit::Minute, t0 + 12.0 * Unit::Minute))
        );
    }

    #[test]
    fn validity_span() {
        let mut prediction = polynomial_prediction();
        let t0 = prediction.start;
        for t in [t0 - 1.0 * Unit::Second, t0 + 30.0 * Unit::Minute] {
            assert!(!prediction.is_valid(t));
            assert!(matches!(
                prediction.interpolate(t),
                Err(Error::OutOfRange { .. })
            ));
        }
    }

    #[test]
    fn sorted_table() {
        let t0 = Epoch::from_gregorian_utc_at_midnight(2021, 7, 28);
        let samples = (0..5)
            .rev()
            .map(|i| Sample {
                epoch: t0 + (i as f64) * Unit::Minute,
                position: (i as f64, 0.0, 0.0),
            })
            .chain(std::iter::once(Sample {
                epoch: t0 + 2.0 * Unit::Minute,
                position: (-1.0, 0.0, 0.0),
            }))
            .collect();
        let prediction = Prediction::new("test", t0, t0 + 4.0 * Unit::Minute, samples);
        assert_eq!(prediction.nb_samples(), 5);
        let positions = prediction
            .samples()
            .iter()
            .map(|s| s.position.0)
            .collect::<Vec<_>>();
        assert_eq!(positions, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(prediction.first_epoch(), Some(t0));
        assert_eq!(prediction.last_epoch(), Some(t0 + 4.0 * Unit::Minute));
    }
}
