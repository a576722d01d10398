//! Position record (10) parsing
use crate::{
    cpf::{Sample, Vector3D},
    epoch::from_mjd,
    error::FormatError,
    fields::parse_item,
};

pub(crate) fn position_entry(content: &str) -> bool {
    content.starts_with("10")
}

pub(crate) struct PositionEntry {
    pub mjd: i32,
    pub seconds_of_day: f64,
    pub position: Vector3D,
}

impl std::str::FromStr for PositionEntry {
    type Err = FormatError;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let items = line.split_whitespace().collect::<Vec<_>>();
        if items.len() < 8 {
            return Err(FormatError::MissingFields(line.to_string()));
        }
        let mjd = parse_item::<i32>(items[2], line, "MJD")?;
        let seconds_of_day = parse_item::<f64>(items[3], line, "seconds of day")?;
        if !seconds_of_day.is_finite() {
            return Err(FormatError::Field {
                field: "seconds of day",
                content: items[3].to_string(),
                line: line.to_string(),
            });
        }
        Ok(Self {
            mjd,
            seconds_of_day,
            position: (
                parse_item(items[5], line, "x coordinate")?,
                parse_item(items[6], line, "y coordinate")?,
                parse_item(items[7], line, "z coordinate")?,
            ),
        })
    }
}

impl PositionEntry {
    pub(crate) fn to_sample(&self) -> Sample {
        Sample {
            epoch: from_mjd(self.mjd, self.seconds_of_day),
            position: self.position,
        }
    }
}
