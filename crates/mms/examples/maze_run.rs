//! Run the randomized wall follower through a few random mazes.
//!
//! Usage:
//!   cargo run -p mms --example maze_run -- [density]
//!
//! Prints, per seed, the stop reason, move/turn counts and how many cells
//! the mouse reached. Densities around 0.3 give mazes with enough corridors
//! to keep the mouse busy.

use mms::mouse::{Heading, Maze, MazeCfg, MazeMouse, RandomizedWallFollow};
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    let density = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.3);
    let solver = RandomizedWallFollow::new(2_000);
    for seed in 0..5u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let maze = Maze::random(8, 8, MazeCfg::default(), density, &mut rng);
        let mut mouse = MazeMouse::new(&maze, (0, 0), Heading::North);
        let (stats, reason) = solver.solve(&mut mouse, &mut rng);
        println!(
            "seed {seed}: walls={} stop={reason:?} moves={} turns={} visited={}/{}",
            maze.walls().len(),
            stats.moves,
            stats.turns,
            mouse.visited(),
            maze.width * maze.height,
        );
    }
}
