use crate::coordinates::Coordinates;

/// Earth-radius approximation used to scale the haversine angular distance
/// into kilometers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EarthModel {
    /// WGS84 reference ellipsoid, equatorial (semi-major) axis: 6378.137 km.
    Wgs84,
    /// GRS80 reference ellipsoid, semi-major axis: 6378.137 km. Identical
    /// to WGS84 at kilometer precision.
    Grs80,
    /// IUGG mean Earth radius: 6371.0 km.
    #[default]
    Spherical,
}

impl EarthModel {
    /// Radius of this model in kilometers.
    pub const fn radius_km(self) -> f64 {
        match self {
            EarthModel::Wgs84 => 6378.137,
            EarthModel::Grs80 => 6378.137,
            EarthModel::Spherical => 6371.0,
        }
    }

    pub const fn all() -> &'static [EarthModel] {
        &[EarthModel::Wgs84, EarthModel::Grs80, EarthModel::Spherical]
    }
}

/// Unit the calculated distance is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Miles,
    NauticalMiles,
}

impl DistanceUnit {
    /// Multiplicative conversion factor from kilometers.
    pub const fn factor_from_km(self) -> f64 {
        match self {
            DistanceUnit::Kilometers => 1.0,
            DistanceUnit::Miles => 0.621371,
            DistanceUnit::NauticalMiles => 0.539957,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
            DistanceUnit::NauticalMiles => "nmi",
        }
    }

    pub const fn all() -> &'static [DistanceUnit] {
        &[
            DistanceUnit::Kilometers,
            DistanceUnit::Miles,
            DistanceUnit::NauticalMiles,
        ]
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Great-circle distance between two points in kilometers, haversine form.
pub(crate) fn haversine_km(from: &Coordinates, to: &Coordinates, model: EarthModel) -> f64 {
    let lat1 = from.latitude().value().to_radians();
    let lat2 = to.latitude().value().to_radians();

    let d_lat = (to.latitude().value() - from.latitude().value()).to_radians();
    let d_lon = (to.longitude().value() - from.longitude().value()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push h a hair above 1.0 for near-antipodal pairs, which
    // would turn asin into NaN.
    let h = h.clamp(0.0, 1.0);

    let c = 2.0 * h.sqrt().asin();
    model.radius_km() * c
}

/// Distances for a batch of coordinate pairs, element-wise and in input
/// order. Pairs are independent; no state is shared between them.
pub fn calculate_distances(
    pairs: &[(Coordinates, Coordinates)],
    unit: DistanceUnit,
    model: EarthModel,
) -> Vec<f64> {
    pairs
        .iter()
        .map(|(from, to)| from.distance_with(to, unit, model))
        .collect()
}
