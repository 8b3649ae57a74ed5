//! Cell-grid maze built from wall polygons, and a mouse that lives in it.
//!
//! The mouse moves one cell at a time, but every sensor reading and every
//! move is decided geometrically: sensors are rays cast from the cell centre
//! against the wall polygons, and a move is refused if the ray ahead hits a
//! wall or the body at the target cell overlaps one.

use std::collections::HashSet;

use rand::Rng;

use super::{Heading, MouseInterface};
use crate::geom::{cast_ray, polygons_overlap, Cartesian, Meters, Polygon, Segment};

/// Physical maze dimensions.
#[derive(Clone, Copy, Debug)]
pub struct MazeCfg {
    /// Side of a square cell.
    pub cell: Meters,
    pub wall_thickness: Meters,
    /// Half the side of the (square) mouse body.
    pub body_half: Meters,
    /// Sensor ray length, measured from the cell centre.
    pub sensor_range: Meters,
}

impl Default for MazeCfg {
    // Competition micromouse proportions.
    fn default() -> Self {
        Self {
            cell: Meters::new(0.18),
            wall_thickness: Meters::new(0.012),
            body_half: Meters::new(0.04),
            sensor_range: Meters::new(0.135),
        }
    }
}

/// Rectangular maze of `width × height` cells, cell (0, 0) at the origin.
#[derive(Clone, Debug)]
pub struct Maze {
    pub width: usize,
    pub height: usize,
    pub cfg: MazeCfg,
    walls: Vec<Polygon>,
}

impl Maze {
    /// Empty maze: perimeter walls only.
    pub fn new(width: usize, height: usize, cfg: MazeCfg) -> Self {
        let (w, h) = (cfg.cell * width as f64, cfg.cell * height as f64);
        let t = cfg.wall_thickness / 2.0;
        let rect = |x0: Meters, y0: Meters, x1: Meters, y1: Meters| {
            Polygon::rectangle(Cartesian::new(x0, y0), Cartesian::new(x1, y1))
        };
        let walls = vec![
            rect(-t, -t, w + t, t),
            rect(w - t, -t, w + t, h + t),
            rect(-t, h - t, w + t, h + t),
            rect(-t, -t, t, h + t),
        ];
        Self {
            width,
            height,
            cfg,
            walls,
        }
    }

    /// Maze with each interior wall present with probability `density`
    /// (clamped to [0, 1]; NaN counts as 0).
    pub fn random<R: Rng>(
        width: usize,
        height: usize,
        cfg: MazeCfg,
        density: f64,
        rng: &mut R,
    ) -> Self {
        let mut maze = Self::new(width, height, cfg);
        // NaN means no interior walls
        let p = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                if x + 1 < width as i32 && rng.gen_bool(p) {
                    maze.add_wall((x, y), Heading::East);
                }
                if y + 1 < height as i32 && rng.gen_bool(p) {
                    maze.add_wall((x, y), Heading::North);
                }
            }
        }
        maze
    }

    /// Wall on the `side` of `cell`.
    pub fn add_wall(&mut self, cell: (i32, i32), side: Heading) {
        let c = self.cfg.cell;
        let t = self.cfg.wall_thickness / 2.0;
        let (x, y) = (c * cell.0 as f64, c * cell.1 as f64);
        let (min, max) = match side {
            Heading::East => ((x + c - t, y), (x + c + t, y + c)),
            Heading::West => ((x - t, y), (x + t, y + c)),
            Heading::North => ((x, y + c - t), (x + c, y + c + t)),
            Heading::South => ((x, y - t), (x + c, y + t)),
        };
        self.walls.push(Polygon::rectangle(
            Cartesian::new(min.0, min.1),
            Cartesian::new(max.0, max.1),
        ));
    }

    pub fn walls(&self) -> &[Polygon] {
        &self.walls
    }

    pub fn cell_center(&self, cell: (i32, i32)) -> Cartesian {
        let c = self.cfg.cell;
        Cartesian::new(c * (cell.0 as f64 + 0.5), c * (cell.1 as f64 + 0.5))
    }
}

/// A grid-bound mouse whose sensors are rays against `maze`'s walls.
#[derive(Clone, Debug)]
pub struct MazeMouse<'a> {
    maze: &'a Maze,
    cell: (i32, i32),
    heading: Heading,
    visited: HashSet<(i32, i32)>,
}

impl<'a> MazeMouse<'a> {
    pub fn new(maze: &'a Maze, cell: (i32, i32), heading: Heading) -> Self {
        Self {
            maze,
            cell,
            heading,
            visited: HashSet::from([cell]),
        }
    }

    pub fn cell(&self) -> (i32, i32) {
        self.cell
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn position(&self) -> Cartesian {
        self.maze.cell_center(self.cell)
    }

    /// Number of distinct cells entered so far, start included.
    pub fn visited(&self) -> usize {
        self.visited.len()
    }

    fn ray(&self, toward: Heading, length: Meters) -> Segment {
        let (dx, dy) = toward.step();
        let from = self.position();
        Segment::new(
            from,
            from + Cartesian::new(length * dx as f64, length * dy as f64),
        )
    }

    fn sense(&self, toward: Heading) -> bool {
        cast_ray(&self.ray(toward, self.maze.cfg.sensor_range), self.maze.walls()).is_some()
    }

    fn body_at(&self, cell: (i32, i32)) -> Polygon {
        let center = self.maze.cell_center(cell);
        let b = self.maze.cfg.body_half;
        Polygon::rectangle(
            center - Cartesian::new(b, b),
            center + Cartesian::new(b, b),
        )
    }
}

impl MouseInterface for MazeMouse<'_> {
    fn wall_front(&self) -> bool {
        self.sense(self.heading)
    }

    fn wall_left(&self) -> bool {
        self.sense(self.heading.left())
    }

    fn wall_right(&self) -> bool {
        self.sense(self.heading.right())
    }

    fn turn_left(&mut self) {
        self.heading = self.heading.left();
    }

    fn turn_right(&mut self) {
        self.heading = self.heading.right();
    }

    fn move_forward(&mut self) -> bool {
        let path = self.ray(self.heading, self.maze.cfg.cell);
        if let Some(hit) = cast_ray(&path, self.maze.walls()) {
            tracing::debug!(cell = ?self.cell, heading = ?self.heading, distance = %hit.distance, "crash");
            return false;
        }
        let (dx, dy) = self.heading.step();
        let target = (self.cell.0 + dx, self.cell.1 + dy);
        let body = self.body_at(target);
        if self.maze.walls().iter().any(|w| polygons_overlap(&body, w)) {
            tracing::debug!(cell = ?target, "body overlaps a wall");
            return false;
        }
        self.cell = target;
        self.visited.insert(target);
        true
    }
}
