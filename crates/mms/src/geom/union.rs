//! Outer boundary of the union of connected polygons ("shrinkwrap").
//!
//! Model
//! - Split every edge at every point where another edge crosses or touches
//!   it, snap the pieces onto shared vertices, and treat the result as a
//!   planar graph (the arrangement of all boundaries).
//! - The lexicographically smallest vertex is always on the outer boundary.
//!   From there, walk counter-clockwise, taking at each vertex the right-most
//!   turn: the edge with the smallest CCW angle from the way we came in.
//! - The walk closes when the first directed edge comes up again. Taking the
//!   right-most turn is a permutation on directed edges, so it always closes.
//!
//! Holes of the union are not reported. Components of the arrangement that
//! lie entirely inside the traced boundary (nested polygons) are ignored;
//! any other component means the input was not connected.

use std::collections::VecDeque;
use std::f64::consts::TAU;

use super::collision::contains_point;
use super::kernel::{cross_product, intersection_point_eps, lines_intersect};
use super::types::{Cartesian, GeomCfg, GeomError, Polygon, Segment};
use super::units::Meters;

/// Snap radius relative to the bounding-box extent of the input.
const SNAP_REL: f64 = 1e-9;

/// Union outline with default tolerances.
pub fn polygon_union(polygons: &[Polygon]) -> Result<Polygon, GeomError> {
    polygon_union_eps(polygons, &GeomCfg::default())
}

/// Outer boundary (CCW) of the union of mutually connected polygons.
///
/// Errors
/// - `Empty` for no input.
/// - `Disconnected` if some polygon neither touches the others nor lies
///   inside the result.
/// - `TooFewVertices` if the outline collapses (all input degenerate).
pub fn polygon_union_eps(polygons: &[Polygon], cfg: &GeomCfg) -> Result<Polygon, GeomError> {
    if polygons.is_empty() {
        return Err(GeomError::Empty);
    }
    let snap = cfg.eps_length.max(SNAP_REL * extent(polygons));
    let graph = Arrangement::build(polygons, snap, cfg);
    if graph.vertices.is_empty() {
        return Err(GeomError::TooFewVertices { got: 0 });
    }
    let (start, component) = graph.outer_component();
    let outline = simplify_collinear(graph.trace_outer(start), snap);
    let outline = Polygon::new(outline)?;

    // Every other component must be nested inside the outline.
    for (v, p) in graph.vertices.iter().enumerate() {
        if !component[v] && !contains_point(&outline, *p) {
            tracing::debug!(vertex = v, "union input is not connected");
            return Err(GeomError::Disconnected);
        }
    }
    tracing::trace!(
        inputs = polygons.len(),
        arrangement_vertices = graph.vertices.len(),
        outline_vertices = outline.len(),
        "polygon union"
    );
    Ok(outline)
}

/// Largest side of the bounding box of all vertices.
fn extent(polygons: &[Polygon]) -> f64 {
    let far = Meters::new(f64::INFINITY);
    let (mut lo, mut hi) = ([far; 2], [-far; 2]);
    for p in polygons.iter().flat_map(|p| p.vertices()) {
        for (k, v) in [p.x(), p.y()].into_iter().enumerate() {
            lo[k] = lo[k].min(v);
            hi[k] = hi[k].max(v);
        }
    }
    (hi[0] - lo[0]).max(hi[1] - lo[1]).max(Meters::ZERO).meters()
}

/// Planar graph of split boundary pieces.
struct Arrangement {
    vertices: Vec<Cartesian>,
    adjacent: Vec<Vec<usize>>,
    snap: f64,
}

impl Arrangement {
    fn build(polygons: &[Polygon], snap: f64, cfg: &GeomCfg) -> Self {
        let edges: Vec<Segment> = polygons
            .iter()
            .flat_map(|p| p.edges())
            .filter(|e| e.length().meters() > snap)
            .collect();
        let mut graph = Arrangement {
            vertices: Vec::new(),
            adjacent: Vec::new(),
            snap,
        };
        for (i, e) in edges.iter().enumerate() {
            let mut ts = vec![0.0, 1.0];
            for (j, other) in edges.iter().enumerate() {
                if i == j || !lines_intersect(e, other) {
                    continue;
                }
                match intersection_point_eps(e, other, cfg) {
                    Ok(p) => ts.push(e.project(p).clamp(0.0, 1.0)),
                    // Collinear overlap: split at the other edge's endpoints.
                    Err(GeomError::Parallel) => {
                        for q in [other.start, other.end] {
                            let t = e.project(q);
                            if (0.0..=1.0).contains(&t) && e.at(t).distance(q).meters() <= snap {
                                ts.push(t);
                            }
                        }
                    }
                    Err(err) => tracing::trace!(%err, "skipping edge pair"),
                }
            }
            ts.sort_by(f64::total_cmp);
            let mut prev = graph.vertex_id(e.at(ts[0]));
            for &t in &ts[1..] {
                let next = graph.vertex_id(e.at(t));
                graph.link(prev, next);
                prev = next;
            }
        }
        graph
    }

    /// Index of the vertex within `snap` of `p`, inserting it if new.
    fn vertex_id(&mut self, p: Cartesian) -> usize {
        if let Some(i) = self
            .vertices
            .iter()
            .position(|v| v.distance(p).meters() <= self.snap)
        {
            return i;
        }
        self.vertices.push(p);
        self.adjacent.push(Vec::new());
        self.vertices.len() - 1
    }

    fn link(&mut self, a: usize, b: usize) {
        if a == b || self.adjacent[a].contains(&b) {
            return;
        }
        self.adjacent[a].push(b);
        self.adjacent[b].push(a);
    }

    /// Lexicographically smallest vertex and the membership mask of its component.
    /// Requires at least one vertex.
    fn outer_component(&self) -> (usize, Vec<bool>) {
        let start = (0..self.vertices.len())
            .min_by(|&a, &b| self.vertices[a].lex_cmp(&self.vertices[b]))
            .unwrap_or(0);
        let mut seen = vec![false; self.vertices.len()];
        let mut queue = VecDeque::from([start]);
        seen[start] = true;
        while let Some(v) = queue.pop_front() {
            for &w in &self.adjacent[v] {
                if !seen[w] {
                    seen[w] = true;
                    queue.push_back(w);
                }
            }
        }
        (start, seen)
    }

    /// Neighbour of `at` with the smallest CCW angle, in (0, 2π], from the
    /// direction back towards `from`.
    fn right_most(&self, from: Cartesian, at: usize) -> Option<usize> {
        let here = self.vertices[at];
        let back = (from - here).to_vector();
        self.adjacent[at]
            .iter()
            .map(|&w| {
                let out = (self.vertices[w] - here).to_vector();
                let sin = cross_product(here, from, self.vertices[w]).square_meters();
                let mut angle = sin.atan2(back.dot(&out));
                if angle <= 0.0 {
                    angle += TAU;
                }
                (w, angle)
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(w, _)| w)
    }

    /// Vertex loop of the outer face, CCW, starting at `start`.
    fn trace_outer(&self, start: usize) -> Vec<Cartesian> {
        let above = self.vertices[start] + Cartesian::from_meters(0.0, 1.0);
        let Some(first) = self.right_most(above, start) else {
            return vec![self.vertices[start]];
        };
        let darts: usize = self.adjacent.iter().map(Vec::len).sum();
        let mut outline = vec![self.vertices[start]];
        let (mut prev, mut cur) = (start, first);
        for _ in 0..darts {
            let Some(next) = self.right_most(self.vertices[prev], cur) else {
                break;
            };
            if cur == start && next == first {
                return outline;
            }
            outline.push(self.vertices[cur]);
            (prev, cur) = (cur, next);
        }
        tracing::warn!(steps = darts, "outer boundary walk did not close");
        outline
    }
}

/// Drop vertices whose neighbours are (within `snap`) on a line through them.
fn simplify_collinear(mut ring: Vec<Cartesian>, snap: f64) -> Vec<Cartesian> {
    let mut i = 0;
    while ring.len() > 3 && i < ring.len() {
        let n = ring.len();
        let (a, v, b) = (ring[(i + n - 1) % n], ring[i], ring[(i + 1) % n]);
        let height = cross_product(a, v, b).square_meters().abs() / a.distance(b).meters();
        let backtrack = (v - a).to_vector().dot(&(b - v).to_vector()) < 0.0;
        if height <= snap && !backtrack {
            ring.remove(i);
            i = i.saturating_sub(1);
        } else {
            i += 1;
        }
    }
    ring
}
