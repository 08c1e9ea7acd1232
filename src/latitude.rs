use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::equatable::{Equatable, nearly_equal};
use crate::error::{Error, Result};

/// Latitude in decimal degrees, guaranteed to lie in `-90.0 ..= 90.0`.
///
/// Immutable after construction; serializes as a plain `f64` and validates
/// the range again on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Latitude(f64);

impl Latitude {
    /// Southernmost representable latitude (the South Pole).
    pub const MIN: f64 = -90.0;
    /// Northernmost representable latitude (the North Pole).
    pub const MAX: f64 = 90.0;

    /// Validate and wrap a decimal-degree value.
    ///
    /// NaN is rejected as out of range along with everything outside
    /// `MIN ..= MAX`.
    pub fn new(value: f64) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::LatitudeOutOfRange(value))
        }
    }

    /// The wrapped decimal-degree value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// North of the equator.
    pub fn is_northern(&self) -> bool {
        self.0 > 0.0
    }

    /// South of the equator.
    pub fn is_southern(&self) -> bool {
        self.0 < 0.0
    }

    /// Exactly on the equator.
    pub fn is_equator(&self) -> bool {
        self.0 == 0.0
    }
}

impl Equatable for Latitude {
    fn is_equal(&self, other: &Self) -> bool {
        nearly_equal(self.0, other.0)
    }
}

impl TryFrom<f64> for Latitude {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Latitude> for f64 {
    fn from(latitude: Latitude) -> Self {
        latitude.0
    }
}

impl FromStr for Latitude {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| Error::MalformedLatitude(s.to_string()))?;

        Self::new(value)
    }
}

impl fmt::Display for Latitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
