use thiserror::Error;

/// Convenience alias for fallible constructors and parsers in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Validation and parsing failures.
///
/// Every value object validates at construction time; once a value exists
/// it is guaranteed valid for its lifetime, so downstream code never needs
/// to re-check ranges. Messages always name the offending input and the
/// expected range or format.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Latitude outside the `-90.0 ..= 90.0` degree range.
    #[error("Latitude {0} is out of range. Allowed range: -90.0 ..= 90.0 degrees.")]
    LatitudeOutOfRange(f64),

    /// Latitude input that does not parse as a decimal-degree number.
    #[error("Latitude '{0}' is not a number. Expected decimal degrees, e.g. \"52.3676\".")]
    MalformedLatitude(String),

    /// Longitude outside the `-180.0 ..= 180.0` degree range.
    #[error("Longitude {0} is out of range. Allowed range: -180.0 ..= 180.0 degrees.")]
    LongitudeOutOfRange(f64),

    /// Longitude input that does not parse as a decimal-degree number.
    #[error("Longitude '{0}' is not a number. Expected decimal degrees, e.g. \"4.9041\".")]
    MalformedLongitude(String),

    /// Combined coordinate input that is not structured as
    /// `"<latitude>,<longitude>"`.
    #[error(
        "Coordinates '{0}' are malformed. Expected \"<latitude>,<longitude>\" \
         in decimal degrees, e.g. \"52.3676,4.9041\"."
    )]
    MalformedCoordinates(String),
}
