use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::equatable::{Equatable, nearly_equal};
use crate::error::{Error, Result};

/// Longitude in decimal degrees, guaranteed to lie in `-180.0 ..= 180.0`.
///
/// Both `-180.0` and `180.0` are accepted; they name the same meridian and
/// [`is_international_date_line`](Longitude::is_international_date_line)
/// holds for either.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Longitude(f64);

impl Longitude {
    /// Westernmost representable longitude.
    pub const MIN: f64 = -180.0;
    /// Easternmost representable longitude.
    pub const MAX: f64 = 180.0;

    /// Validate and wrap a decimal-degree value.
    ///
    /// NaN is rejected as out of range along with everything outside
    /// `MIN ..= MAX`.
    pub fn new(value: f64) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::LongitudeOutOfRange(value))
        }
    }

    /// The wrapped decimal-degree value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// East of the prime meridian.
    pub fn is_eastern(&self) -> bool {
        self.0 > 0.0
    }

    /// West of the prime meridian.
    pub fn is_western(&self) -> bool {
        self.0 < 0.0
    }

    /// Exactly on the prime meridian.
    pub fn is_prime_meridian(&self) -> bool {
        self.0 == 0.0
    }

    /// Exactly on the 180th meridian, from either side.
    pub fn is_international_date_line(&self) -> bool {
        self.0.abs() == Self::MAX
    }
}

impl Equatable for Longitude {
    fn is_equal(&self, other: &Self) -> bool {
        nearly_equal(self.0, other.0)
    }
}

impl TryFrom<f64> for Longitude {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Longitude> for f64 {
    fn from(longitude: Longitude) -> Self {
        longitude.0
    }
}

impl FromStr for Longitude {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| Error::MalformedLongitude(s.to_string()))?;

        Self::new(value)
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
