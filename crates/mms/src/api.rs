//! Curated surface for the simulator's physics, render and control loops.
//!
//! Important
//! - Project-internal. Loops should import from here rather than reaching
//!   into `geom::*` submodules, so the kernel layout can change freely.

// Units and value types
pub use crate::geom::{Cartesian, GeomCfg, GeomError, Meters, MetersSquared, Polygon, Segment};
// Kernel operations
pub use crate::geom::{
    centroid, centroid_eps, convex_hull, convex_hull_points, cross_product, intersection_point,
    intersection_point_eps, line_segments, lines_intersect, polygon_area, polygon_union,
    polygon_union_eps, signed_area,
};
// Physics-loop queries
pub use crate::geom::{
    cast_ray, cast_ray_eps, contains_point, polygons_overlap, segment_hits_polygon, RayHit,
};
// Random polygons
pub use crate::geom::rand::{
    draw_polygon_radial, RadialCfg as PolygonSamplerCfg, ReplayToken, VertexCount,
};
// Control
pub use crate::mouse::{MouseInterface, RandomizedWallFollow, SolveStats, WallSide};
