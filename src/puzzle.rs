mod board;
mod heuristic;
mod problem;

pub use board::{Board, Move, MAX_SIZE};
pub use heuristic::{ManhattanDistance, OutOfPlace};
pub use problem::SlidingPuzzle;
