use super::rand::{draw_polygon_radial, RadialCfg, ReplayToken};
use super::*;
use ::rand::{rngs::StdRng, Rng, SeedableRng};
use proptest::prelude::*;

fn pt(x: f64, y: f64) -> Cartesian {
    Cartesian::from_meters(x, y)
}

fn seg(a: Cartesian, b: Cartesian) -> Segment {
    Segment::new(a, b)
}

fn unit_square() -> Vec<Cartesian> {
    vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 1.0)]
}

fn coord() -> impl Strategy<Value = f64> {
    -100.0..100.0f64
}

fn point() -> impl Strategy<Value = Cartesian> {
    (coord(), coord()).prop_map(|(x, y)| pt(x, y))
}

proptest! {
    #[test]
    fn cross_product_is_antisymmetric(z in point(), a in point(), b in point()) {
        prop_assert_eq!(cross_product(z, a, b), -cross_product(z, b, a));
    }

    #[test]
    fn cross_product_vanishes_on_lines(z in point(), d in point(), s in -10.0..10.0f64, t in -10.0..10.0f64) {
        let a = z + d * s;
        let b = z + d * t;
        let c = cross_product(z, a, b).square_meters();
        let reach = z.to_vector().norm() + d.to_vector().norm() * (s.abs() + t.abs()) + 1.0;
        prop_assert!(c.abs() <= 1e-12 * reach * reach);
    }

    #[test]
    fn lines_intersect_is_symmetric(a1 in point(), a2 in point(), b1 in point(), b2 in point()) {
        let (a, b) = (seg(a1, a2), seg(b1, b2));
        prop_assert_eq!(lines_intersect(&a, &b), lines_intersect(&b, &a));
        prop_assert_eq!(lines_intersect(&a, &b), lines_intersect(&a.reversed(), &b));
    }

    #[test]
    fn hull_contains_every_input_vertex(seed in any::<u64>(), count in 1usize..6) {
        let polys: Vec<Polygon> = (0..count as u64)
            .map(|index| {
                draw_polygon_radial(RadialCfg::default(), ReplayToken { seed, index })
                    .translated(pt(index as f64 * 1.5, (index % 2) as f64))
            })
            .collect();
        let hull = convex_hull(&polys).unwrap();
        let v = hull.vertices();
        prop_assert_eq!(v.first(), v.last());
        for p in polys.iter().flat_map(|p| p.vertices()) {
            for e in hull.edges().filter(|e| e.length() > Meters::ZERO) {
                prop_assert!(cross_product(e.start, e.end, *p).square_meters() >= -1e-9);
            }
        }
    }

    #[test]
    fn area_ignores_start_vertex_and_winding(seed in any::<u64>(), shift in 0usize..20) {
        let p = draw_polygon_radial(RadialCfg::default(), ReplayToken { seed, index: 0 });
        let mut rotated = p.vertices().to_vec();
        let k = shift % rotated.len();
        rotated.rotate_left(k);
        let q = Polygon::new(rotated).unwrap();
        let a = polygon_area(&p).square_meters();
        prop_assert!((polygon_area(&q).square_meters() - a).abs() < 1e-9);
        prop_assert!((polygon_area(&p.reversed()).square_meters() - a).abs() < 1e-9);
    }
}

#[test]
fn collinear_cross_product_is_zero() {
    assert_eq!(
        cross_product(pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0)),
        MetersSquared::ZERO
    );
}

#[test]
fn unit_square_area_any_start_any_winding() {
    let base = unit_square();
    for k in 0..base.len() {
        let mut v = base.clone();
        v.rotate_left(k);
        let ccw = Polygon::new(v.clone()).unwrap();
        v.reverse();
        let cw = Polygon::new(v).unwrap();
        assert_eq!(polygon_area(&ccw), MetersSquared::new(1.0));
        assert_eq!(polygon_area(&cw), MetersSquared::new(1.0));
    }
}

#[test]
fn diagonals_cross_at_center() {
    let a = seg(pt(0.0, 0.0), pt(1.0, 1.0));
    let b = seg(pt(0.0, 1.0), pt(1.0, 0.0));
    assert!(lines_intersect(&a, &b));
    let p = intersection_point(&a, &b).unwrap();
    assert!((p.x().meters() - 0.5).abs() < 1e-12);
    assert!((p.y().meters() - 0.5).abs() < 1e-12);
}

#[test]
fn parallel_segments_do_not_intersect() {
    let a = seg(pt(0.0, 0.0), pt(1.0, 0.0));
    let b = seg(pt(0.0, 1.0), pt(1.0, 1.0));
    assert!(!lines_intersect(&a, &b));
    assert_eq!(intersection_point(&a, &b), Err(GeomError::NoIntersection));
}

#[test]
fn intersection_point_lies_on_both_segments() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut checked = 0;
    while checked < 200 {
        let mut p = || pt(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
        let (a, b) = (seg(p(), p()), seg(p(), p()));
        let Ok(x) = intersection_point(&a, &b) else {
            continue;
        };
        for s in [a, b] {
            let t = s.project(x);
            assert!((-1e-9..=1.0 + 1e-9).contains(&t));
            assert!(s.at(t).distance(x).meters() < 1e-9);
        }
        checked += 1;
    }
}

#[test]
fn line_segments_wrap_around() {
    let poly = Polygon::new(vec![
        pt(0.0, 0.0),
        pt(2.0, 0.0),
        pt(3.0, 1.0),
        pt(1.0, 2.0),
        pt(-1.0, 1.0),
    ])
    .unwrap();
    let segs = line_segments(&poly);
    assert_eq!(segs.len(), 5);
    for (i, s) in segs.iter().enumerate() {
        assert_eq!(s.start, poly.vertices()[i]);
    }
    assert_eq!(segs[4], seg(pt(-1.0, 1.0), pt(0.0, 0.0)));
}

#[test]
fn hull_of_two_separate_squares() {
    let left = Polygon::new(unit_square()).unwrap();
    let right = left.translated(pt(3.0, 0.0));
    let hull = convex_hull(&[left.clone(), right.clone()]).unwrap();
    assert_eq!(
        hull.vertices(),
        &[
            pt(0.0, 0.0),
            pt(4.0, 0.0),
            pt(4.0, 1.0),
            pt(0.0, 1.0),
            pt(0.0, 0.0)
        ]
    );
    assert!(signed_area(&hull) > MetersSquared::ZERO);
    for p in left.vertices().iter().chain(right.vertices()) {
        for e in hull.edges() {
            assert!(cross_product(e.start, e.end, *p) >= MetersSquared::ZERO);
        }
    }
}

#[test]
fn hull_is_idempotent_on_convex_input() {
    let hexagon: Vec<Cartesian> = (0..6)
        .map(|k| {
            let th = std::f64::consts::TAU * k as f64 / 6.0 + 0.1;
            pt(th.cos(), th.sin())
        })
        .collect();
    let poly = Polygon::new(hexagon.clone()).unwrap();
    let hull = convex_hull(&[poly]).unwrap();
    let v = hull.vertices();
    assert_eq!(v.len(), 7);
    assert_eq!(v[0], v[6]);
    // same cyclic sequence, possibly from another start vertex
    let start = hexagon.iter().position(|p| *p == v[0]).unwrap();
    for (i, p) in v[..6].iter().enumerate() {
        assert_eq!(*p, hexagon[(start + i) % 6]);
    }
    let again = convex_hull(&[hull.clone()]).unwrap();
    assert_eq!(again, hull);
}

#[test]
fn failed_query_leaves_inputs_usable() {
    let a = seg(pt(0.0, 0.0), pt(1.0, 0.0));
    let b = seg(pt(5.0, 5.0), pt(6.0, 6.0));
    assert!(intersection_point(&a, &b).is_err());
    // the same values still answer other queries
    let c = seg(pt(0.5, -1.0), pt(0.5, 1.0));
    assert_eq!(intersection_point(&a, &c), Ok(pt(0.5, 0.0)));
}

#[test]
fn queries_run_from_many_threads() {
    let walls: Vec<Polygon> = (0..8)
        .map(|k| Polygon::rectangle(pt(k as f64, 2.0), pt(k as f64 + 0.5, 3.0)))
        .collect();
    let expected = cast_ray(&seg(pt(0.25, 0.0), pt(0.25, 10.0)), &walls);
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..100 {
                    let hit = cast_ray(&seg(pt(0.25, 0.0), pt(0.25, 10.0)), &walls);
                    assert_eq!(hit, expected);
                    assert!(convex_hull(&walls).is_ok());
                }
            });
        }
    });
    assert_eq!(expected.map(|h| h.wall), Some(0));
}

#[test]
fn polygons_round_trip_through_json() {
    let poly = Polygon::new(unit_square()).unwrap();
    let json = serde_json::to_string(&poly).unwrap();
    assert_eq!(json, "[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,1.0]]");
    let back: Polygon = serde_json::from_str(&json).unwrap();
    assert_eq!(back, poly);
    assert!(serde_json::from_str::<Polygon>("[[0.0,0.0],[1.0,0.0]]").is_err());
}

#[test]
fn lex_order_agrees_with_equality_on_signed_zero() {
    use std::cmp::Ordering;
    assert_eq!(pt(-0.0, 1.0), pt(0.0, 1.0));
    assert_eq!(pt(-0.0, 1.0).lex_cmp(&pt(0.0, 1.0)), Ordering::Equal);
    assert_eq!(pt(-0.0, 1.0).lex_cmp(&pt(0.0, 0.0)), Ordering::Greater);
    assert_eq!(pt(1.0, -0.0).lex_cmp(&pt(1.0, 0.0)), Ordering::Equal);
    let mut pts = vec![pt(0.0, 2.0), pt(-0.0, 1.0), pt(0.0, 0.0), pt(-0.0, 3.0)];
    pts.sort_by(Cartesian::lex_cmp);
    let ys: Vec<f64> = pts.iter().map(|p| p.y().meters()).collect();
    assert_eq!(ys, [0.0, 1.0, 2.0, 3.0]);
}
