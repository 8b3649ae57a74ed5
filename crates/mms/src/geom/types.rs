//! Value types of the kernel and its tolerances.
//!
//! - `Cartesian`: point from two `Meters`, lexicographically ordered.
//! - `Segment`: ordered point pair (polygon edge or sensor ray).
//! - `Polygon`: closed loop of ≥3 vertices; simplicity is assumed, not checked.
//! - `GeomCfg`: epsilons used only to reject degenerate inputs.
//! - `GeomError`: per-call failures.

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::units::{Meters, MetersSquared};

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeomCfg {
    /// Segments shorter than this (meters) have no direction.
    pub eps_length: f64,
    /// Below this rotated-frame height difference (meters) two segments are
    /// treated as parallel and have no unique crossing.
    pub eps_parallel: f64,
    /// Polygons with |area| at or below this (m²) have no centroid.
    pub eps_area: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_length: 1e-12,
            eps_parallel: 1e-12,
            eps_area: 1e-18,
        }
    }
}

impl GeomCfg {
    /// All three tolerances set to `eps` (area uses `eps²`).
    pub fn uniform(eps: f64) -> Self {
        Self {
            eps_length: eps,
            eps_parallel: eps,
            eps_area: eps * eps,
        }
    }
}

/// Failure of a single geometry query. Never poisons any shared state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    #[error("segments do not intersect")]
    NoIntersection,
    #[error("segment has (near) zero length")]
    DegenerateSegment,
    #[error("segments are (near) parallel; no unique intersection point")]
    Parallel,
    #[error("polygon has (near) zero area")]
    ZeroArea,
    #[error("polygon needs at least 3 vertices, got {got}")]
    TooFewVertices { got: usize },
    #[error("convex hull is degenerate ({distinct} distinct vertices)")]
    DegenerateHull { distinct: usize },
    #[error("polygons are not connected")]
    Disconnected,
    #[error("no polygons given")]
    Empty,
}

/// A point in the plane.
///
/// Derived `PartialOrd` compares `x` first, then `y`; `lex_cmp` is the total
/// version of the same order used for sorting.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Cartesian {
    x: Meters,
    y: Meters,
}

impl Cartesian {
    #[inline]
    pub const fn new(x: Meters, y: Meters) -> Self {
        Self { x, y }
    }
    /// Shorthand for `Cartesian::new(Meters::new(x), Meters::new(y))`.
    #[inline]
    pub const fn from_meters(x: f64, y: f64) -> Self {
        Self::new(Meters::new(x), Meters::new(y))
    }
    #[inline]
    pub fn x(&self) -> Meters {
        self.x
    }
    #[inline]
    pub fn y(&self) -> Meters {
        self.y
    }
    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x.meters(), self.y.meters())
    }
    #[inline]
    pub fn from_vector(v: Vector2<f64>) -> Self {
        Self::from_meters(v.x, v.y)
    }
    /// Squared length of this point read as a vector from the origin.
    #[inline]
    pub fn norm_squared(self) -> MetersSquared {
        self.x * self.x + self.y * self.y
    }
    #[inline]
    pub fn distance(self, other: Cartesian) -> Meters {
        Meters::sqrt_of((other - self).norm_squared())
    }
    /// Total lexicographic order (x, then y), consistent with `==`:
    /// `-0.0` and `0.0` compare equal.
    #[inline]
    pub fn lex_cmp(&self, other: &Cartesian) -> Ordering {
        // adding +0.0 maps -0.0 to 0.0 and leaves every other value alone
        let key = |m: Meters| m.meters() + 0.0;
        key(self.x)
            .total_cmp(&key(other.x))
            .then_with(|| key(self.y).total_cmp(&key(other.y)))
    }
}

impl From<[f64; 2]> for Cartesian {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::from_meters(x, y)
    }
}

impl From<Cartesian> for [f64; 2] {
    fn from(p: Cartesian) -> Self {
        [p.x.meters(), p.y.meters()]
    }
}

impl Add for Cartesian {
    type Output = Cartesian;
    #[inline]
    fn add(self, rhs: Cartesian) -> Cartesian {
        Cartesian::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Cartesian {
    type Output = Cartesian;
    #[inline]
    fn sub(self, rhs: Cartesian) -> Cartesian {
        Cartesian::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl Neg for Cartesian {
    type Output = Cartesian;
    #[inline]
    fn neg(self) -> Cartesian {
        Cartesian::new(-self.x, -self.y)
    }
}
impl Mul<f64> for Cartesian {
    type Output = Cartesian;
    #[inline]
    fn mul(self, factor: f64) -> Cartesian {
        Cartesian::new(self.x * factor, self.y * factor)
    }
}
impl Div<f64> for Cartesian {
    type Output = Cartesian;
    #[inline]
    fn div(self, factor: f64) -> Cartesian {
        Cartesian::new(self.x / factor, self.y / factor)
    }
}

/// Directed segment `start → end`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Cartesian,
    pub end: Cartesian,
}

impl Segment {
    #[inline]
    pub const fn new(start: Cartesian, end: Cartesian) -> Self {
        Self { start, end }
    }
    #[inline]
    pub fn length(&self) -> Meters {
        self.start.distance(self.end)
    }
    /// `end - start`.
    #[inline]
    pub fn direction(&self) -> Cartesian {
        self.end - self.start
    }
    /// Point at parameter `t` (0 = start, 1 = end).
    #[inline]
    pub fn at(&self, t: f64) -> Cartesian {
        self.start + self.direction() * t
    }
    /// Parameter `t` of the projection of `q` onto the line through this
    /// segment; NaN for a zero-length segment.
    #[inline]
    pub fn project(&self, q: Cartesian) -> f64 {
        let d = self.direction().to_vector();
        (q - self.start).to_vector().dot(&d) / d.norm_squared()
    }
    #[inline]
    pub fn reversed(&self) -> Segment {
        Segment::new(self.end, self.start)
    }
}

impl From<(Cartesian, Cartesian)> for Segment {
    fn from((start, end): (Cartesian, Cartesian)) -> Self {
        Self::new(start, end)
    }
}

/// Closed polygon; the last vertex connects back to the first.
///
/// Invariants:
/// - At least 3 vertices (checked by `new`).
/// - Simple boundary (assumed by area/centroid/union, not checked).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Cartesian>", into = "Vec<Cartesian>")]
pub struct Polygon {
    pub(super) vertices: Vec<Cartesian>,
}

impl Polygon {
    pub fn new(vertices: Vec<Cartesian>) -> Result<Self, GeomError> {
        if vertices.len() < 3 {
            return Err(GeomError::TooFewVertices {
                got: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }
    /// Axis-aligned rectangle, counter-clockwise from `min`.
    pub fn rectangle(min: Cartesian, max: Cartesian) -> Self {
        Self {
            vertices: vec![
                min,
                Cartesian::new(max.x(), min.y()),
                max,
                Cartesian::new(min.x(), max.y()),
            ],
        }
    }
    #[inline]
    pub fn vertices(&self) -> &[Cartesian] {
        &self.vertices
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    /// Never true for a polygon built through `new`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    /// Boundary edges in vertex order; the last one wraps to vertex 0.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }
    /// Same loop, opposite winding.
    pub fn reversed(&self) -> Polygon {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }
    /// Translated copy.
    pub fn translated(&self, by: Cartesian) -> Polygon {
        Self {
            vertices: self.vertices.iter().map(|&v| v + by).collect(),
        }
    }
}

impl TryFrom<Vec<Cartesian>> for Polygon {
    type Error = GeomError;
    fn try_from(vertices: Vec<Cartesian>) -> Result<Self, GeomError> {
        Polygon::new(vertices)
    }
}

impl From<Polygon> for Vec<Cartesian> {
    fn from(p: Polygon) -> Self {
        p.vertices
    }
}
