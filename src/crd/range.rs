//! Range records (10, 11 and 12)
use crate::{error::FormatError, fields::parse_item};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Full rate (10), normal point (11) and range supplement (12) records
pub(crate) fn is_range_record(line: &str) -> bool {
    line.starts_with("10") || line.starts_with("11") || line.starts_with("12")
}

/// One range measurement
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RangePoint {
    /// Elapsed seconds of day
    pub time: f64,
    /// Range value, as encoded in the record
    pub range: f64,
}

impl std::str::FromStr for RangePoint {
    type Err = FormatError;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut items = line.split_whitespace().skip(1);
        let (time, range) = match (items.next(), items.next()) {
            (Some(time), Some(range)) => (time, range),
            _ => return Err(FormatError::MissingFields(line.to_string())),
        };
        Ok(Self {
            time: parse_item(time, line, "seconds of day")?,
            range: parse_item(range, line, "range")?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    #[test]
    fn range_records() {
        assert!(is_range_record("10 58000.1 0.04 STD1 2 0 0 0"));
        assert!(is_range_record("11 58000.1 0.04 STD1 2 0 0 0"));
        assert!(is_range_record("12 58000.1 0.04 STD1 2 0 0 0"));
        assert!(!is_range_record("20 58000.1 1013.25 290.1 45 1"));

        let point = RangePoint::from_str("10 58377.123456789012 0.047257925859 STD1 2 0 0 0 0 0")
            .unwrap();
        assert_eq!(point.time, 58377.123456789012);
        assert_eq!(point.range, 0.047257925859);
    }
    #[test]
    fn malformed_records() {
        assert_eq!(
            RangePoint::from_str("10 58377.1"),
            Err(FormatError::MissingFields("10 58377.1".to_string()))
        );
        assert!(matches!(
            RangePoint::from_str("10 58377.1 O.0472"),
            Err(FormatError::Field { field: "range", .. })
        ));
    }
}
