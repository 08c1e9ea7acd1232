/// Value-based equality for the coordinate value objects.
///
/// Comparison tolerates floating-point representation noise: two values
/// whose components differ by less than [`f64::EPSILON`] compare equal.
/// The contract is reflexive and symmetric, and it is same-type
/// constrained, so comparing a [`Latitude`](crate::Latitude) against a
/// [`Longitude`](crate::Longitude) does not compile.
pub trait Equatable {
    fn is_equal(&self, other: &Self) -> bool;
}

/// Shared epsilon comparison for the degree-valued types.
pub(crate) fn nearly_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < f64::EPSILON
}
