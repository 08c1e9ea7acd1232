//! Geographic value objects and great-circle distance calculations.
//!
//! This crate defines:
//! - Validated `Latitude`/`Longitude` value objects and their `Coordinates` pair
//! - Haversine distance with selectable Earth models and distance units
//! - A value-based equality contract shared by the coordinate types
//!
//! Everything is immutable after construction and validated at the boundary,
//! so instances can be shared freely across threads and never need
//! re-checking downstream. The crate performs no I/O of its own; geocoding
//! and weather callers consume `Coordinates` values and serialize them into
//! their own requests.

pub mod coordinates;
pub mod distance;
pub mod equatable;
pub mod error;
pub mod latitude;
pub mod longitude;

pub use coordinates::Coordinates;
pub use distance::{DistanceUnit, EarthModel, calculate_distances};
pub use equatable::Equatable;
pub use error::{Error, Result};
pub use latitude::Latitude;
pub use longitude::Longitude;
