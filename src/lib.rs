//! Satellite Laser Ranging data files.
//!
//! - [crd]: Consolidated Range Data (CRD) parser,
//! observed ranges grouped by unit and session
//! - [cpf]: Consolidated Prediction Format (CPF) parser and
//! sliding window position interpolator
//! - [troposphere]: Marini-Murray range correction
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(test)]
mod tests;

mod error;
mod fields;
mod reader;

pub mod cpf;
pub mod crd;
pub mod epoch;
pub mod troposphere;

pub use error::{Boundary, Error, FormatError, Metadata};

pub mod prelude {
    pub use crate::cpf::{Prediction, Sample, Vector3D};
    pub use crate::crd::{RangePoint, Session, SessionFlags, SessionRef, Station, Target, Unit, CRD};
    pub use crate::error::{Boundary, Error, FormatError, Metadata};
    pub use crate::troposphere::Meteo;
    // Pub re-export
    pub use hifitime::{Duration, Epoch, TimeScale};
}
