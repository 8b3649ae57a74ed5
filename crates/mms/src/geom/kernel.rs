//! Core kernel operations: orientation, segment crossing, area and centroid.
//!
//! Everything here is built on `cross_product`; no other function computes a
//! determinant of its own.

use nalgebra::{Matrix2, Vector2};

use super::types::{Cartesian, GeomCfg, GeomError, Polygon, Segment};
use super::units::MetersSquared;

/// Signed area of the parallelogram spanned by `a - z` and `b - z`.
///
/// Positive when `a` then `b` turn counter-clockwise around `z`, zero when
/// the three points are collinear.
#[inline]
pub fn cross_product(z: Cartesian, a: Cartesian, b: Cartesian) -> MetersSquared {
    (a.x() - z.x()) * (b.y() - z.y()) - (a.y() - z.y()) * (b.x() - z.x())
}

/// `true` unless both values are non-zero with the same sign (NaN never straddles).
#[inline]
fn straddles(c1: MetersSquared, c2: MetersSquared) -> bool {
    if c1.square_meters().is_nan() || c2.square_meters().is_nan() {
        return false;
    }
    c1.sign() * c2.sign() <= 0
}

/// Whether two closed segments cross or touch.
///
/// Inclusive: a shared endpoint, a T-junction and a collinear overlap all
/// count. Collinear segments that do not overlap do not.
pub fn lines_intersect(a: &Segment, b: &Segment) -> bool {
    // b's endpoints against line a
    let c1 = cross_product(a.start, b.start, a.end);
    let c2 = cross_product(a.start, b.end, a.end);
    // a's endpoints against line b
    let c3 = cross_product(b.start, a.start, b.end);
    let c4 = cross_product(b.start, a.end, b.end);
    straddles(c1, c2) && straddles(c3, c4)
}

/// Crossing point of two intersecting segments, with default tolerances.
pub fn intersection_point(a: &Segment, b: &Segment) -> Result<Cartesian, GeomError> {
    intersection_point_eps(a, b, &GeomCfg::default())
}

/// Crossing point of two intersecting segments.
///
/// Works in the frame where `a.start` is the origin and `a` lies on the
/// positive x axis, then maps the crossing back to world coordinates.
///
/// Errors
/// - `NoIntersection` if `lines_intersect(a, b)` is false.
/// - `DegenerateSegment` if `a` is shorter than `cfg.eps_length`.
/// - `Parallel` if `b` is within `cfg.eps_parallel` of parallel to `a`
///   (this includes collinear overlaps, which have no unique point).
pub fn intersection_point_eps(
    a: &Segment,
    b: &Segment,
    cfg: &GeomCfg,
) -> Result<Cartesian, GeomError> {
    if !lines_intersect(a, b) {
        return Err(GeomError::NoIntersection);
    }
    let origin = a.start.to_vector();
    let dir = a.end.to_vector() - origin;
    let len = dir.norm();
    if !(len >= cfg.eps_length) {
        return Err(GeomError::DegenerateSegment);
    }
    let (cos, sin) = (dir.x / len, dir.y / len);
    // world -> frame of `a`
    let rot = Matrix2::new(cos, sin, -sin, cos);
    let b1 = rot * (b.start.to_vector() - origin);
    let b2 = rot * (b.end.to_vector() - origin);
    let dy = b2.y - b1.y;
    if !(dy.abs() >= cfg.eps_parallel) {
        return Err(GeomError::Parallel);
    }
    let pos = b2.x + (b1.x - b2.x) * b2.y / dy;
    let world = rot.transpose() * Vector2::new(pos, 0.0) + origin;
    Ok(Cartesian::from_vector(world))
}

/// Twice-halved shoelace sum; positive for counter-clockwise winding.
///
/// Fans from vertex 0 rather than the origin, which gives the same value for
/// a closed loop but keeps the products small for polygons far from (0, 0).
pub fn signed_area(polygon: &Polygon) -> MetersSquared {
    let v = polygon.vertices();
    let pivot = v[0];
    let twice: MetersSquared = (1..v.len() - 1)
        .map(|i| cross_product(pivot, v[i], v[i + 1]))
        .sum();
    twice / 2.0
}

/// Enclosed area of a simple polygon, independent of winding and start vertex.
pub fn polygon_area(polygon: &Polygon) -> MetersSquared {
    signed_area(polygon).abs()
}

/// Area centroid, with default tolerances.
pub fn centroid(polygon: &Polygon) -> Result<Cartesian, GeomError> {
    centroid_eps(polygon, &GeomCfg::default())
}

/// Area centroid of a simple polygon (either winding).
///
/// `c = v0 + (1 / 6A) Σ (pᵢ + pᵢ₊₁) · cross(v0, vᵢ, vᵢ₊₁)` with `pᵢ = vᵢ - v0`
/// and `A` the signed area; the usual formula in a frame centred on `v0`.
pub fn centroid_eps(polygon: &Polygon, cfg: &GeomCfg) -> Result<Cartesian, GeomError> {
    let area = signed_area(polygon);
    if !(area.square_meters().abs() > cfg.eps_area) {
        return Err(GeomError::ZeroArea);
    }
    let v = polygon.vertices();
    let pivot = v[0];
    let six_a = area * 6.0;
    let offset = (1..v.len() - 1).fold(Cartesian::default(), |acc, i| {
        let (p, q) = (v[i] - pivot, v[i + 1] - pivot);
        acc + (p + q) * (cross_product(pivot, v[i], v[i + 1]) / six_a)
    });
    Ok(pivot + offset)
}

/// Boundary segments in vertex order: segment `i` joins vertex `i` to
/// vertex `(i + 1) mod n`.
pub fn line_segments(polygon: &Polygon) -> Vec<Segment> {
    polygon.edges().collect()
}
