//! Randomized wall follower.
//!
//! Each step flips a coin between a right-hand and a left-hand step:
//! - right: if there is no wall on the right, turn right; turn left while a
//!   wall is in front; move forward.
//! - left: the mirror image.
//!
//! Runs for a fixed step budget instead of forever; stops early when boxed
//! in (four turns without an opening) or after a crash.

use rand::Rng;
use serde::Serialize;

use super::MouseInterface;

/// Which hand is kept on the wall for a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum WallSide {
    Left,
    Right,
}

impl WallSide {
    pub fn opposite(self) -> Self {
        match self {
            WallSide::Left => WallSide::Right,
            WallSide::Right => WallSide::Left,
        }
    }
}

/// Why `solve` returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StopReason {
    Budget,
    BoxedIn,
    Crashed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SolveStats {
    pub steps: usize,
    pub right_steps: usize,
    pub left_steps: usize,
    pub turns: usize,
    pub moves: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct RandomizedWallFollow {
    pub max_steps: usize,
}

impl Default for RandomizedWallFollow {
    fn default() -> Self {
        Self { max_steps: 10_000 }
    }
}

impl RandomizedWallFollow {
    pub fn new(max_steps: usize) -> Self {
        Self { max_steps }
    }

    /// Run until the step budget is spent or the mouse can no longer move.
    pub fn solve<M, R>(&self, mouse: &mut M, rng: &mut R) -> (SolveStats, StopReason)
    where
        M: MouseInterface + ?Sized,
        R: Rng,
    {
        let mut stats = SolveStats::default();
        while stats.steps < self.max_steps {
            let side = if rng.gen_bool(0.5) {
                WallSide::Right
            } else {
                WallSide::Left
            };
            let outcome = Self::step(mouse, side, &mut stats);
            stats.steps += 1;
            if let Some(reason) = outcome {
                tracing::debug!(?reason, steps = stats.steps, "wall follower stopped");
                return (stats, reason);
            }
        }
        (stats, StopReason::Budget)
    }

    /// One wall-follow step keeping `side` on the wall.
    pub fn step<M>(mouse: &mut M, side: WallSide, stats: &mut SolveStats) -> Option<StopReason>
    where
        M: MouseInterface + ?Sized,
    {
        let open = match side {
            WallSide::Right => {
                stats.right_steps += 1;
                !mouse.wall_right()
            }
            WallSide::Left => {
                stats.left_steps += 1;
                !mouse.wall_left()
            }
        };
        if open {
            turn(mouse, side);
            stats.turns += 1;
        }
        let mut spins = 0;
        while mouse.wall_front() {
            if spins == 4 {
                return Some(StopReason::BoxedIn);
            }
            turn(mouse, side.opposite());
            stats.turns += 1;
            spins += 1;
        }
        if !mouse.move_forward() {
            return Some(StopReason::Crashed);
        }
        stats.moves += 1;
        None
    }
}

fn turn<M: MouseInterface + ?Sized>(mouse: &mut M, toward: WallSide) {
    match toward {
        WallSide::Left => mouse.turn_left(),
        WallSide::Right => mouse.turn_right(),
    }
}
