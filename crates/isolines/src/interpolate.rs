//! Linear interpolation of contour crossings along cell edges.

use isoline_common::SamplePoint;

/// Find the coordinate between `p1` and `p2` where a field varying linearly
/// from `v1` to `v2` takes the value `isovalue`.
///
/// When `v1 == v2` there is no unique crossing and the midpoint of `p1` and
/// `p2` is returned instead. This keeps the function total; it is not an
/// error condition.
#[inline]
pub fn interpolate(p1: f64, v1: f64, p2: f64, v2: f64, isovalue: f64) -> f64 {
    if v2 == v1 {
        (p1 + p2) / 2.0
    } else {
        p1 + (p2 - p1) * (isovalue - v1) / (v2 - v1)
    }
}

/// Crossing point on the edge from `a` to `b`.
///
/// x and y are interpolated independently against the endpoints' `z`
/// values; the returned point's `z` is `isovalue`.
#[inline]
pub fn midpoint(a: &SamplePoint, b: &SamplePoint, isovalue: f64) -> SamplePoint {
    SamplePoint::new(
        interpolate(a.x, a.z, b.x, b.z, isovalue),
        interpolate(a.y, a.z, b.y, b.z, isovalue),
        isovalue,
    )
}
