//! Mouse control: the sensor/actuator interface and a solving algorithm.
//!
//! - `MouseInterface`: what a solving algorithm may ask of the robot.
//! - `RandomizedWallFollow`: picks left- or right-hand wall following at
//!   random on every step.
//! - `maze::{Maze, MazeMouse}`: a cell-grid maze made of wall polygons and a
//!   mouse whose sensors and moves are answered by the geometry kernel.

pub mod maze;
mod wall_follow;

pub use maze::{Maze, MazeCfg, MazeMouse};
pub use wall_follow::{RandomizedWallFollow, SolveStats, StopReason, WallSide};

/// Cardinal heading of a grid-bound mouse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    #[inline]
    pub fn left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }
    #[inline]
    pub fn right(self) -> Self {
        self.left().left().left()
    }
    /// Unit step `(dx, dy)` in cell coordinates (north = +y).
    #[inline]
    pub fn step(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }
}

/// Sensors and actuators exposed to a solving algorithm.
pub trait MouseInterface {
    fn wall_front(&self) -> bool;
    fn wall_left(&self) -> bool;
    fn wall_right(&self) -> bool;
    fn turn_left(&mut self);
    fn turn_right(&mut self);
    /// Advance one cell. Returns `false` (and stays put) on a crash.
    fn move_forward(&mut self) -> bool;
}
