//! 2D geometry kernel over unit-tagged lengths.
//!
//! Purpose
//! - Answer the physics loop's per-tick questions: does the mouse body or a
//!   sensor ray cross a wall, where, and how far away.
//! - Provide the polygon measures (area, centroid) and combinators (convex
//!   hull, outer-boundary union) used to build collision envelopes.
//!
//! Conventions
//! - Every operation is a pure function: inputs are borrowed immutably, the
//!   result is a fresh value, nothing is cached.
//! - Equality and ordering on values are exact. Tolerances only enter through
//!   `GeomCfg`, and only to reject degenerate inputs.
//! - Orientation: positive cross product = counter-clockwise.
//!
//! Code cross-refs: `units::{Meters, MetersSquared}`,
//! `types::{Cartesian, Polygon, Segment, GeomCfg, GeomError}`.

mod collision;
mod hull;
mod kernel;
pub mod rand;
mod types;
mod union;
mod units;

pub use collision::{
    cast_ray, cast_ray_eps, contains_point, polygons_overlap, segment_hits_polygon, RayHit,
};
pub use hull::{convex_hull, convex_hull_points};
pub use kernel::{
    centroid, centroid_eps, cross_product, intersection_point, intersection_point_eps,
    line_segments, lines_intersect, polygon_area, signed_area,
};
pub use types::{Cartesian, GeomCfg, GeomError, Polygon, Segment};
pub use union::{polygon_union, polygon_union_eps};
pub use units::{Meters, MetersSquared};

#[cfg(test)]
mod tests;
