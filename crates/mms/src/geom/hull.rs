//! Andrew's monotone chain convex hull.
//!
//! Output convention: counter-clockwise, starting at the lexicographically
//! smallest point, with that point repeated at the end as a closure marker.
//! Collinear boundary points are dropped (strict left turns only).

use super::kernel::cross_product;
use super::types::{Cartesian, GeomError, Polygon};
use super::units::MetersSquared;

/// Closed CCW hull chain of a point set.
///
/// Degenerate sets come back as-is rather than failing: no points → `[]`,
/// one distinct point → `[p]`, collinear points → `[min, max, min]`.
pub fn convex_hull_points(points: &[Cartesian]) -> Vec<Cartesian> {
    let mut pts = points.to_vec();
    pts.sort_by(Cartesian::lex_cmp);
    pts.dedup();
    if pts.len() < 2 {
        return pts;
    }
    let mut hull: Vec<Cartesian> = Vec::with_capacity(2 * pts.len());
    // lower hull
    for &p in &pts {
        while hull.len() >= 2
            && cross_product(hull[hull.len() - 2], hull[hull.len() - 1], p) <= MetersSquared::ZERO
        {
            hull.pop();
        }
        hull.push(p);
    }
    // upper hull; never pops below the last lower point
    let floor = hull.len() + 1;
    for &p in pts.iter().rev().skip(1) {
        while hull.len() >= floor
            && cross_product(hull[hull.len() - 2], hull[hull.len() - 1], p) <= MetersSquared::ZERO
        {
            hull.pop();
        }
        hull.push(p);
    }
    hull
}

/// Convex hull of all vertices of `polygons`, as a closed CCW polygon.
///
/// Errors with `DegenerateHull` when fewer than three distinct hull vertices
/// remain (no input, or every vertex on one line).
pub fn convex_hull(polygons: &[Polygon]) -> Result<Polygon, GeomError> {
    let points: Vec<Cartesian> = polygons
        .iter()
        .flat_map(|p| p.vertices().iter().copied())
        .collect();
    let hull = convex_hull_points(&points);
    let distinct = if hull.len() <= 1 {
        hull.len()
    } else {
        hull.len() - 1
    };
    if distinct < 3 {
        tracing::debug!(points = points.len(), distinct, "degenerate convex hull");
        return Err(GeomError::DegenerateHull { distinct });
    }
    Polygon::new(hull)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::kernel::polygon_area;

    fn pt(x: f64, y: f64) -> Cartesian {
        Cartesian::from_meters(x, y)
    }

    #[test]
    fn small_inputs_do_not_panic() {
        assert!(convex_hull_points(&[]).is_empty());
        assert_eq!(convex_hull_points(&[pt(1.0, 2.0)]), vec![pt(1.0, 2.0)]);
        assert_eq!(
            convex_hull_points(&[pt(1.0, 2.0), pt(1.0, 2.0)]),
            vec![pt(1.0, 2.0)]
        );
        assert_eq!(
            convex_hull_points(&[pt(3.0, 0.0), pt(1.0, 0.0)]),
            vec![pt(1.0, 0.0), pt(3.0, 0.0), pt(1.0, 0.0)]
        );
    }

    #[test]
    fn collinear_points_collapse_to_extremes() {
        let pts: Vec<_> = (0..5).map(|i| pt(i as f64, 2.0 * i as f64)).collect();
        assert_eq!(
            convex_hull_points(&pts),
            vec![pt(0.0, 0.0), pt(4.0, 8.0), pt(0.0, 0.0)]
        );
        let flat = Polygon::new(pts).unwrap();
        assert_eq!(
            convex_hull(&[flat]),
            Err(GeomError::DegenerateHull { distinct: 2 })
        );
        assert_eq!(
            convex_hull(&[]),
            Err(GeomError::DegenerateHull { distinct: 0 })
        );
    }

    #[test]
    fn signed_zero_sorts_with_positive_zero() {
        let pts = [
            pt(-0.0, 1.0),
            pt(0.0, 0.0),
            pt(0.0, 1.0),
            pt(1.0, 0.0),
            pt(1.0, 1.0),
        ];
        assert_eq!(
            convex_hull_points(&pts),
            vec![
                pt(0.0, 0.0),
                pt(1.0, 0.0),
                pt(1.0, 1.0),
                pt(0.0, 1.0),
                pt(0.0, 0.0)
            ]
        );

        // -0.0 points on the left edge of a triangle
        let tri = Polygon::new(vec![
            pt(0.0, 0.0),
            pt(1.0, 1.0),
            pt(0.0, 2.0),
            pt(-0.0, 1.5),
            pt(-0.0, 0.5),
        ])
        .unwrap();
        let hull = convex_hull(&[tri]).unwrap();
        assert_eq!(hull.len(), 4);
        assert_eq!(polygon_area(&hull), MetersSquared::new(1.0));
    }

    #[test]
    fn drops_edge_midpoints_and_interior() {
        let pts = [
            pt(0.0, 0.0),
            pt(1.0, 0.0), // on bottom edge
            pt(2.0, 0.0),
            pt(2.0, 2.0),
            pt(1.0, 1.0), // interior
            pt(0.0, 2.0),
        ];
        assert_eq!(
            convex_hull_points(&pts),
            vec![
                pt(0.0, 0.0),
                pt(2.0, 0.0),
                pt(2.0, 2.0),
                pt(0.0, 2.0),
                pt(0.0, 0.0)
            ]
        );
    }
}
