use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mms::api::*;
use mms::mouse::{Heading, Maze, MazeCfg, MazeMouse, StopReason};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;

use io::{parse_floats, read_polygons, write_json};

#[derive(Parser)]
#[command(name = "mms-cli")]
#[command(about = "Geometry queries and wall-follower runs for the micromouse simulator")]
struct Cmd {
    /// Override every kernel tolerance (meters; areas use eps²)
    #[arg(long, global = true)]
    eps: Option<f64>,

    /// Write JSON here instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Area of each input polygon (m²)
    Area { input: PathBuf },
    /// Centroid of each input polygon
    Centroid { input: PathBuf },
    /// Convex hull of all input polygons (closed, CCW)
    Hull { input: PathBuf },
    /// Outer boundary of the union of the input polygons
    Union { input: PathBuf },
    /// Intersect two segments given as x1,y1,x2,y2
    Intersect {
        #[arg(long, value_parser = parse_floats::<4>)]
        a: [f64; 4],
        #[arg(long, value_parser = parse_floats::<4>)]
        b: [f64; 4],
    },
    /// Cast a sensor ray against the input polygons
    Ray {
        input: PathBuf,
        #[arg(long, value_parser = parse_floats::<2>)]
        from: [f64; 2],
        #[arg(long, value_parser = parse_floats::<2>)]
        to: [f64; 2],
    },
    /// Draw random star-shaped polygons
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1)]
        count: u64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        /// Base radius (meters)
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
    },
    /// Run the randomized wall follower in a generated maze
    Follow {
        #[arg(long, default_value_t = 16)]
        width: usize,
        #[arg(long, default_value_t = 16)]
        height: usize,
        /// Probability of each interior wall
        #[arg(long, default_value_t = 0.3)]
        density: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10_000)]
        max_steps: usize,
    },
}

#[derive(Serialize)]
struct IntersectReport {
    intersects: bool,
    point: Option<Cartesian>,
    /// Why no point was computed, if none was.
    error: Option<String>,
}

#[derive(Serialize)]
struct FollowReport {
    stats: SolveStats,
    reason: StopReason,
    cell: (i32, i32),
    heading: Heading,
    visited: usize,
    cells: usize,
    walls: usize,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = cmd.eps.map(GeomCfg::uniform).unwrap_or_default();
    let out = cmd.out.as_deref();
    match cmd.action {
        Action::Area { input } => {
            let areas: Vec<MetersSquared> = read_polygons(input)?.iter().map(polygon_area).collect();
            write_json(&areas, out)
        }
        Action::Centroid { input } => {
            let centers = read_polygons(input)?
                .iter()
                .enumerate()
                .map(|(i, p)| centroid_eps(p, &cfg).with_context(|| format!("polygon {i}")))
                .collect::<Result<Vec<_>>>()?;
            write_json(&centers, out)
        }
        Action::Hull { input } => {
            let hull = convex_hull(&read_polygons(input)?).context("convex hull")?;
            write_json(&hull, out)
        }
        Action::Union { input } => {
            let outline = polygon_union_eps(&read_polygons(input)?, &cfg).context("polygon union")?;
            write_json(&outline, out)
        }
        Action::Intersect { a, b } => write_json(&intersect(a, b, &cfg), out),
        Action::Ray { input, from, to } => {
            let walls = read_polygons(input)?;
            let ray = Segment::new(point(from), point(to));
            let hit = cast_ray_eps(&ray, &walls, &cfg);
            tracing::info!(hit = hit.is_some(), "ray");
            write_json(&hit, out)
        }
        Action::Sample {
            seed,
            count,
            vertices,
            radius,
        } => {
            let cfg = PolygonSamplerCfg {
                vertex_count: VertexCount::Exactly(vertices),
                base_radius: Meters::new(radius),
                ..PolygonSamplerCfg::default()
            };
            let polys: Vec<Polygon> = (0..count)
                .map(|index| draw_polygon_radial(cfg, ReplayToken { seed, index }))
                .collect();
            write_json(&polys, out)
        }
        Action::Follow {
            width,
            height,
            density,
            seed,
            max_steps,
        } => write_json(&follow(width, height, density, seed, max_steps)?, out),
    }
}

fn point([x, y]: [f64; 2]) -> Cartesian {
    Cartesian::from_meters(x, y)
}

fn segment([x1, y1, x2, y2]: [f64; 4]) -> Segment {
    Segment::new(point([x1, y1]), point([x2, y2]))
}

fn intersect(a: [f64; 4], b: [f64; 4], cfg: &GeomCfg) -> IntersectReport {
    let (a, b) = (segment(a), segment(b));
    let (point, error) = match intersection_point_eps(&a, &b, cfg) {
        Ok(p) => (Some(p), None),
        Err(e) => (None, Some(e.to_string())),
    };
    IntersectReport {
        intersects: lines_intersect(&a, &b),
        point,
        error,
    }
}

fn follow(
    width: usize,
    height: usize,
    density: f64,
    seed: u64,
    max_steps: usize,
) -> Result<FollowReport> {
    anyhow::ensure!(width > 0 && height > 0, "maze needs at least one cell");
    anyhow::ensure!(
        (0.0..=1.0).contains(&density),
        "wall density must be in [0, 1], got {density}"
    );
    let mut rng = StdRng::seed_from_u64(seed);
    let maze = Maze::random(width, height, MazeCfg::default(), density, &mut rng);
    let mut mouse = MazeMouse::new(&maze, (0, 0), Heading::North);
    let (stats, reason) = RandomizedWallFollow::new(max_steps).solve(&mut mouse, &mut rng);
    tracing::info!(?reason, moves = stats.moves, visited = mouse.visited(), "follow");
    Ok(FollowReport {
        stats,
        reason,
        cell: mouse.cell(),
        heading: mouse.heading(),
        visited: mouse.visited(),
        cells: width * height,
        walls: maze.walls().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cmd::command().debug_assert();
    }

    #[test]
    fn parses_segment_flags() {
        let cmd = Cmd::try_parse_from([
            "mms-cli", "--eps", "1e-9", "intersect", "--a", "0,0,1,1", "--b", "0,1,1,0",
        ])
        .unwrap();
        assert_eq!(cmd.eps, Some(1e-9));
        let Action::Intersect { a, b } = cmd.action else {
            panic!("wrong subcommand");
        };
        let report = intersect(a, b, &GeomCfg::default());
        assert!(report.intersects);
        let p = report.point.unwrap();
        assert!((p.x().meters() - 0.5).abs() < 1e-12);
        assert!(report.error.is_none());
    }

    #[test]
    fn parallel_segments_report_the_error() {
        let report = intersect([0.0, 0.0, 1.0, 0.0], [0.0, 1.0, 1.0, 1.0], &GeomCfg::default());
        assert!(!report.intersects);
        assert!(report.point.is_none());
        assert_eq!(report.error.as_deref(), Some("segments do not intersect"));
    }

    #[test]
    fn follow_stays_within_budget() {
        let report = follow(4, 4, 0.2, 3, 200).unwrap();
        assert!(report.stats.steps <= 200);
        assert_eq!(report.cells, 16);
        assert!(report.visited >= 1 && report.visited <= 16);
        assert!(follow(0, 4, 0.2, 3, 200).is_err());
        assert!(follow(4, 4, f64::NAN, 3, 200).is_err());
        assert!(follow(4, 4, 1.5, 3, 200).is_err());
    }
}
