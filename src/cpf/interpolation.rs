//! Sliding window interpolation
use crate::{
    cpf::{Sample, Vector3D},
    error::{Boundary, Error},
};
use hifitime::Epoch;

/// Number of samples the interpolant is fitted to
pub const WINDOW_SIZE: usize = 10;

const HALF_WINDOW: usize = WINDOW_SIZE / 2;

/// Cached degree 9 barycentric Lagrange interpolant, valid in between
/// the two central samples of the window it was fitted to.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Window {
    /// Epoch of window[4]
    start: Epoch,
    /// Epoch of window[5]
    end: Epoch,
    /// Epoch of window[0], abscissa are expressed in seconds from it
    origin: Epoch,
    x: [f64; WINDOW_SIZE],
    y: [Vector3D; WINDOW_SIZE],
    weights: [f64; WINDOW_SIZE],
}

impl Window {
    /// Designs the window centered on `t`. `samples` must be sorted
    /// in ascending order without duplicates.
    pub fn design(samples: &[Sample], t: Epoch) -> Result<Self, Error> {
        // first sample strictly past t
        let i = samples.partition_point(|s| s.epoch <= t);
        if i < HALF_WINDOW {
            return Err(Error::InsufficientData(Boundary::Start));
        }
        if i + HALF_WINDOW > samples.len() {
            return Err(Error::InsufficientData(Boundary::End));
        }

        let window = &samples[i - HALF_WINDOW..i + HALF_WINDOW];
        let origin = window[0].epoch;

        let mut x = [0.0_f64; WINDOW_SIZE];
        let mut y = [Vector3D::default(); WINDOW_SIZE];
        for (k, sample) in window.iter().enumerate() {
            x[k] = (sample.epoch - origin).to_seconds();
            y[k] = sample.position;
        }

        let mut weights = [1.0_f64; WINDOW_SIZE];
        for j in 0..WINDOW_SIZE {
            for k in 0..WINDOW_SIZE {
                if k != j {
                    weights[j] /= x[j] - x[k];
                }
            }
        }

        Ok(Self {
            start: window[HALF_WINDOW - 1].epoch,
            end: window[HALF_WINDOW].epoch,
            origin,
            x,
            y,
            weights,
        })
    }
    /// Returns true if `t` lies within the validity interval
    pub fn contains(&self, t: Epoch) -> bool {
        t >= self.start && t <= self.end
    }
    /// Validity interval
    pub fn interval(&self) -> (Epoch, Epoch) {
        (self.start, self.end)
    }
    /// Evaluates the interpolant at `t`
    pub fn evaluate(&self, t: Epoch) -> Vector3D {
        let dt = (t - self.origin).to_seconds();
        let mut num = Vector3D::default();
        let mut den = 0.0_f64;
        for k in 0..WINDOW_SIZE {
            let diff = dt - self.x[k];
            if diff == 0.0 {
                return self.y[k];
            }
            let c = self.weights[k] / diff;
            num.0 += c * self.y[k].0;
            num.1 += c * self.y[k].1;
            num.2 += c * self.y[k].2;
            den += c;
        }
        (num.0 / den, num.1 / den, num.2 / den)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hifitime::{Duration, Unit};

    fn samples(n: usize) -> Vec<Sample> {
        let t0 = Epoch::from_gregorian_utc_at_midnight(2021, 7, 28);
        (0..n)
            .map(|i| Sample {
                epoch: t0 + (i as f64 * 60.0) * Unit::Second,
                position: (i as f64, 2.0 * i as f64, -(i as f64)),
            })
            .collect()
    }

    #[test]
    fn window_design() {
        let samples = samples(20);
        let t = samples[7].epoch + Duration::from_seconds(30.0);
        let window = Window::design(&samples, t).unwrap();
        assert_eq!(window.interval(), (samples[7].epoch, samples[8].epoch));
        assert_eq!(window.origin, samples[3].epoch);
        assert!(window.contains(t));
        assert!(window.contains(samples[7].epoch));
        assert!(window.contains(samples[8].epoch));
        assert!(!window.contains(samples[9].epoch));

        let (x, y, z) = window.evaluate(t);
        assert!((x - 7.5).abs() < 1.0E-9);
        assert!((y - 15.0).abs() < 1.0E-9);
        assert!((z + 7.5).abs() < 1.0E-9);

        // exact nodes
        assert_eq!(window.evaluate(samples[5].epoch), (5.0, 10.0, -5.0));
    }

    #[test]
    fn window_boundaries() {
        let samples = samples(20);
        let half_minute = Duration::from_seconds(30.0);

        for i in 0..4 {
            assert!(matches!(
                Window::design(&samples, samples[i].epoch + half_minute),
                Err(Error::InsufficientData(Boundary::Start))
            ));
        }
        assert!(Window::design(&samples, samples[4].epoch + half_minute).is_ok());
        assert!(Window::design(&samples, samples[14].epoch + half_minute).is_ok());

        for i in 15..20 {
            assert!(matches!(
                Window::design(&samples, samples[i].epoch),
                Err(Error::InsufficientData(Boundary::End))
            ));
        }
        assert!(matches!(
            Window::design(&samples, samples[0].epoch - half_minute),
            Err(Error::InsufficientData(Boundary::Start))
        ));
    }
}
