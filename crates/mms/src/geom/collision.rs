//! Physics-loop queries: wall hits, overlap, containment and sensor rays.
//!
//! A failed sub-query (near-parallel edge, zero-length wall) counts as "no
//! usable intersection" for that edge only; the rest of the query goes on.

use serde::Serialize;

use super::kernel::{intersection_point_eps, lines_intersect};
use super::types::{Cartesian, GeomCfg, GeomError, Polygon, Segment};
use super::units::Meters;

/// Nearest wall contact along a sensor ray.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RayHit {
    pub point: Cartesian,
    /// Distance from the ray start to `point`.
    pub distance: Meters,
    /// Index of the wall polygon that was hit.
    pub wall: usize,
}

/// Whether `segment` touches any boundary edge of `polygon`.
pub fn segment_hits_polygon(segment: &Segment, polygon: &Polygon) -> bool {
    polygon.edges().any(|e| lines_intersect(segment, &e))
}

/// Even-odd point-in-polygon test. Points exactly on the boundary may go
/// either way.
pub fn contains_point(polygon: &Polygon, p: Cartesian) -> bool {
    let mut inside = false;
    for e in polygon.edges() {
        let (a, b) = (e.start, e.end);
        if (a.y() > p.y()) != (b.y() > p.y()) {
            let x = a.x() + (b.x() - a.x()) * ((p.y() - a.y()) / (b.y() - a.y()));
            if p.x() < x {
                inside = !inside;
            }
        }
    }
    inside
}

/// Whether two polygons share any area or boundary point.
pub fn polygons_overlap(a: &Polygon, b: &Polygon) -> bool {
    let crossing = a
        .edges()
        .any(|ea| b.edges().any(|eb| lines_intersect(&ea, &eb)));
    crossing || contains_point(a, b.vertices()[0]) || contains_point(b, a.vertices()[0])
}

/// Nearest wall hit along `ray` (from `ray.start`), with default tolerances.
pub fn cast_ray(ray: &Segment, walls: &[Polygon]) -> Option<RayHit> {
    cast_ray_eps(ray, walls, &GeomCfg::default())
}

/// Nearest wall hit along `ray`, measured from `ray.start`.
///
/// A wall edge lying on the ray reports its closest point on the ray.
pub fn cast_ray_eps(ray: &Segment, walls: &[Polygon], cfg: &GeomCfg) -> Option<RayHit> {
    let mut best: Option<RayHit> = None;
    for (wall, polygon) in walls.iter().enumerate() {
        for edge in polygon.edges() {
            if !lines_intersect(ray, &edge) {
                continue;
            }
            let candidates = match intersection_point_eps(ray, &edge, cfg) {
                Ok(p) => vec![p],
                Err(GeomError::Parallel) => collinear_contacts(ray, &edge),
                Err(err) => {
                    tracing::trace!(%err, wall, "ray query rejected");
                    continue;
                }
            };
            for point in candidates {
                let distance = ray.start.distance(point);
                if best.map_or(true, |b| distance < b.distance) {
                    best = Some(RayHit {
                        point,
                        distance,
                        wall,
                    });
                }
            }
        }
    }
    best
}

/// Points shared by two (near) collinear, touching segments: the ends of
/// `edge` that fall on `ray`, plus the ray start if it lies on `edge`.
fn collinear_contacts(ray: &Segment, edge: &Segment) -> Vec<Cartesian> {
    let mut out: Vec<Cartesian> = [edge.start, edge.end]
        .into_iter()
        .filter(|&q| (0.0..=1.0).contains(&ray.project(q)))
        .collect();
    if (0.0..=1.0).contains(&edge.project(ray.start)) {
        out.push(ray.start);
    }
    out
}
