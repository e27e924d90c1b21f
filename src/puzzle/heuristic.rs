use super::Board;
use crate::search::Heuristic;

/// Sum over the tiles of the row and column distance to their home square.
/// The blank is not counted, which keeps the estimate admissible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanDistance;

impl Heuristic<Board> for ManhattanDistance {
    fn estimate(&self, board: &Board) -> f64 {
        let size = board.size();
        let distance: usize = board
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(index, &tile)| {
                let (row, column) = (index / size, index % size);
                let (home_row, home_column) = (tile as usize / size, tile as usize % size);
                row.abs_diff(home_row) + column.abs_diff(home_column)
            })
            .sum();
        distance as f64
    }
}

/// Number of tiles not on their home square, blank excluded.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutOfPlace;

impl Heuristic<Board> for OutOfPlace {
    fn estimate(&self, board: &Board) -> f64 {
        board
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(index, &tile)| tile != 0 && tile as usize != index)
            .count() as f64
    }
}
