//! Geometry kernel and mouse control for the micromouse simulator.
//!
//! The physics loop calls into [`geom`] every tick: wall/body intersection
//! tests, sensor ray casts, polygon area and hulls. [`mouse`] holds the
//! sensor/actuator interface the solving algorithm drives.
//!
//! API Policy
//! - Everything in `geom` is a pure function over `Copy`/owned values and is
//!   safe to call from any thread.
//! - Lengths and areas are unit-tagged (`Meters`, `MetersSquared`); raw `f64`
//!   only appears for dimensionless ratios and configuration.

pub mod api;
pub mod geom;
pub mod mouse;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Cartesian, GeomCfg, GeomError, Meters, MetersSquared, Polygon, Segment};
pub use nalgebra::Vector2 as Vec2;

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom::{
        cast_ray, centroid, contains_point, convex_hull, convex_hull_points, cross_product,
        intersection_point, line_segments, lines_intersect, polygon_area, polygon_union,
        polygons_overlap, segment_hits_polygon, Cartesian, GeomCfg, GeomError, Meters,
        MetersSquared, Polygon, RayHit, Segment,
    };
    pub use crate::mouse::{MouseInterface, RandomizedWallFollow, SolveStats};
}
