//! Marini-Murray tropospheric range correction for laser ranging
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Surface meteorological conditions at the station
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Meteo {
    /// Temperature in Kelvin
    pub temperature: f64,
    /// Atmospheric pressure in hPa
    pub pressure: f64,
    /// Relative humidity in %
    pub humidity: f64,
}

/// Wavelength dependent term, `lambda` in nanometers
pub fn wavelength_function(lambda: f64) -> f64 {
    let lambda = lambda / 1000.0;
    0.9650 + 0.0164 / lambda.powi(2) + 0.000228 / lambda.powi(4)
}

/// Laser site function, `latitude` in radians and geodetic `height` in km
pub fn site_function(latitude: f64, height: f64) -> f64 {
    1.0 - 0.0026 * (2.0 * latitude).cos() - 0.00031 * height
}

/// Water vapor pressure (hPa) at temperature `t` (Kelvin) and relative humidity `rh` (%)
pub fn vapor_pressure(t: f64, rh: f64) -> f64 {
    let celsius = t - 273.15;
    let exponent = 7.5 * celsius / (237.3 + celsius);
    rh / 100.0 * 6.11 * 10.0_f64.powf(exponent)
}

/// A term, from pressure `p0` and water vapor pressure `e0` (both hPa)
pub fn term_a(p0: f64, e0: f64) -> f64 {
    0.002357 * p0 + 0.000141 * e0
}

/// K term, from temperature `t0` (Kelvin), pressure `p0` (hPa) and `latitude` (radians)
pub fn term_k(t0: f64, p0: f64, latitude: f64) -> f64 {
    1.163 - 0.00968 * (2.0 * latitude).cos() - 0.00104 * t0 + 0.00001435 * p0
}

/// B term, from temperature `t0` (Kelvin), pressure `p0` (hPa) and the K term
pub fn term_b(t0: f64, p0: f64, k: f64) -> f64 {
    1.084E-8 * p0 * t0 * k + 4.734E-8 * p0.powi(2) / t0 * 2.0 / (3.0 - 1.0 / k)
}

/// One way tropospheric range correction, in meters.
/// `latitude` and `elevation` in radians, geodetic `height` in km,
/// laser `wavelength` in nanometers.
pub fn correction(
    meteo: &Meteo,
    latitude: f64,
    height: f64,
    elevation: f64,
    wavelength: f64,
) -> f64 {
    let e0 = vapor_pressure(meteo.temperature, meteo.humidity);
    let a = term_a(meteo.pressure, e0);
    let k = term_k(meteo.temperature, meteo.pressure, latitude);
    let b = term_b(meteo.temperature, meteo.pressure, k);
    let f0 = wavelength_function(wavelength);
    let f1 = site_function(latitude, height);
    let sin_e = elevation.sin();
    f0 / f1 * (a + b) / (sin_e + (b / (a + b)) / (sin_e + 0.01))
}
