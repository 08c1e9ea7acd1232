use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::distance::{DistanceUnit, EarthModel, haversine_km};
use crate::equatable::Equatable;
use crate::error::{Error, Result};
use crate::latitude::Latitude;
use crate::longitude::Longitude;

/// A validated latitude/longitude pair.
///
/// Serializes as `{ "latitude": <f64>, "longitude": <f64> }`; both fields
/// are re-validated on deserialization. The text form is
/// `"<latitude>,<longitude>"` in decimal degrees and round-trips through
/// [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    latitude: Latitude,
    longitude: Longitude,
}

impl Coordinates {
    /// Pair two already-validated components. Infallible: the components
    /// carry their own invariants.
    pub fn new(latitude: Latitude, longitude: Longitude) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build both components from raw decimal degrees in one call,
    /// propagating whichever component validation fails first.
    pub fn create(latitude: f64, longitude: f64) -> Result<Self> {
        Ok(Self::new(Latitude::new(latitude)?, Longitude::new(longitude)?))
    }

    pub fn latitude(&self) -> Latitude {
        self.latitude
    }

    pub fn longitude(&self) -> Longitude {
        self.longitude
    }

    pub fn is_northern(&self) -> bool {
        self.latitude.is_northern()
    }

    pub fn is_southern(&self) -> bool {
        self.latitude.is_southern()
    }

    pub fn is_equator(&self) -> bool {
        self.latitude.is_equator()
    }

    pub fn is_eastern(&self) -> bool {
        self.longitude.is_eastern()
    }

    pub fn is_western(&self) -> bool {
        self.longitude.is_western()
    }

    pub fn is_prime_meridian(&self) -> bool {
        self.longitude.is_prime_meridian()
    }

    /// Great-circle distance to `other` in kilometers, using the default
    /// Earth model.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        self.distance_with(other, DistanceUnit::Kilometers, EarthModel::default())
    }

    /// Great-circle distance to `other` in the requested unit and Earth
    /// model. Identical coordinates yield exactly 0.
    pub fn distance_with(&self, other: &Coordinates, unit: DistanceUnit, model: EarthModel) -> f64 {
        haversine_km(self, other, model) * unit.factor_from_km()
    }
}

impl Equatable for Coordinates {
    fn is_equal(&self, other: &Self) -> bool {
        self.latitude.is_equal(&other.latitude) && self.longitude.is_equal(&other.longitude)
    }
}

impl FromStr for Coordinates {
    type Err = Error;

    /// Parse `"<latitude>,<longitude>"`. Exactly one comma is structural;
    /// component errors (malformed numbers, out-of-range degrees)
    /// propagate as-is.
    fn from_str(s: &str) -> Result<Self> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| Error::MalformedCoordinates(s.to_string()))?;

        if lon.contains(',') {
            return Err(Error::MalformedCoordinates(s.to_string()));
        }

        Ok(Self::new(lat.parse()?, lon.parse()?))
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn amsterdam() -> Coordinates {
        Coordinates::create(52.3676, 4.9041).unwrap()
    }

    fn london() -> Coordinates {
        Coordinates::create(51.5074, -0.1278).unwrap()
    }

    #[test]
    fn create_propagates_component_validation() {
        let c = Coordinates::create(52.3676, 4.9041).expect("valid pair must construct");
        assert_eq!(c.latitude().value(), 52.3676);
        assert_eq!(c.longitude().value(), 4.9041);

        let err = Coordinates::create(100.0, 4.9041).unwrap_err();
        assert_eq!(err, Error::LatitudeOutOfRange(100.0));

        let err = Coordinates::create(52.3676, -200.0).unwrap_err();
        assert_eq!(err, Error::LongitudeOutOfRange(-200.0));
    }

    #[test]
    fn queries_delegate_to_the_components() {
        let c = amsterdam();
        assert!(c.is_northern());
        assert!(c.is_eastern());
        assert!(!c.is_southern());
        assert!(!c.is_western());

        let origin = Coordinates::create(0.0, 0.0).unwrap();
        assert!(origin.is_equator());
        assert!(origin.is_prime_meridian());
    }

    #[test]
    fn distance_to_uses_kilometers_and_the_default_model() {
        let km = amsterdam().distance_to(&london());
        assert_relative_eq!(km, 357.8875011228777, max_relative = 1e-12);
    }

    #[test]
    fn distance_is_symmetric() {
        let there = amsterdam().distance_with(&london(), DistanceUnit::Miles, EarthModel::Wgs84);
        let back = london().distance_with(&amsterdam(), DistanceUnit::Miles, EarthModel::Wgs84);
        assert_relative_eq!(there, back, max_relative = 1e-9);
    }

    #[test]
    fn distance_to_self_is_exactly_zero() {
        let c = amsterdam();
        assert_eq!(c.distance_to(&c), 0.0);
        assert_eq!(
            c.distance_with(&c, DistanceUnit::NauticalMiles, EarthModel::Grs80),
            0.0
        );
    }

    // Pinned against R = 6378.137 (WGS84 equatorial radius).
    #[test]
    fn unit_conversion_applies_to_the_kilometer_distance() {
        let ams = amsterdam();
        let lon = london();

        let mi = ams.distance_with(&lon, DistanceUnit::Miles, EarthModel::Wgs84);
        assert_relative_eq!(mi, 222.63003274408845, max_relative = 1e-12);

        let nmi = ams.distance_with(&lon, DistanceUnit::NauticalMiles, EarthModel::Wgs84);
        assert_relative_eq!(nmi, 193.46033945967832, max_relative = 1e-12);
    }

    #[test]
    fn is_equal_compares_both_components() {
        let a = amsterdam();
        let b = Coordinates::create(52.3676, 4.9041).unwrap();

        assert!(a.is_equal(&a));
        assert!(a.is_equal(&b));
        assert!(b.is_equal(&a));

        let different_longitude = Coordinates::create(52.3676, 4.9042).unwrap();
        assert!(!a.is_equal(&different_longitude));
    }

    #[test]
    fn parses_the_combined_string_format() {
        let c: Coordinates = "52.3676,4.9041".parse().expect("pair must parse");
        assert!(c.is_equal(&Coordinates::create(52.3676, 4.9041).unwrap()));

        let c: Coordinates = "-33.8688, 151.2093".parse().expect("space after comma is fine");
        assert!(c.is_equal(&Coordinates::create(-33.8688, 151.2093).unwrap()));
    }

    #[test]
    fn rejects_structurally_malformed_strings() {
        for input in ["", "52.3676", "52.3676;4.9041", "1,2,3"] {
            let err = input.parse::<Coordinates>().unwrap_err();
            assert_eq!(err, Error::MalformedCoordinates(input.to_string()));
        }
    }

    #[test]
    fn propagates_component_errors_from_the_combined_string() {
        let err = "abc,4.9041".parse::<Coordinates>().unwrap_err();
        assert_eq!(err, Error::MalformedLatitude("abc".to_string()));

        let err = "52.3676,-200.0".parse::<Coordinates>().unwrap_err();
        assert_eq!(err, Error::LongitudeOutOfRange(-200.0));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for c in [
            amsterdam(),
            london(),
            Coordinates::create(-90.0, -180.0).unwrap(),
            Coordinates::create(0.0, 0.0).unwrap(),
        ] {
            let parsed: Coordinates = c.to_string().parse().expect("own output must parse");
            assert!(parsed.is_equal(&c));
        }
    }

    #[test]
    fn serializes_as_a_latitude_longitude_object() {
        let json = serde_json::to_string(&amsterdam()).unwrap();
        assert_eq!(json, r#"{"latitude":52.3676,"longitude":4.9041}"#);

        let back: Coordinates = serde_json::from_str(&json).unwrap();
        assert!(back.is_equal(&amsterdam()));
    }

    #[test]
    fn deserialization_reports_missing_keys_and_invalid_ranges() {
        let err = serde_json::from_str::<Coordinates>(r#"{"latitude":52.3676}"#).unwrap_err();
        assert!(err.to_string().contains("longitude"));

        let err = serde_json::from_str::<Coordinates>(
            r#"{"latitude":100.0,"longitude":4.9041}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
