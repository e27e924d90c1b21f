use anyhow::{anyhow, ensure, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction the blank travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Left, Move::Right, Move::Up, Move::Down];

    fn offset(self) -> (isize, isize) {
        match self {
            Move::Left => (0, -1),
            Move::Right => (0, 1),
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
        }
    }

    pub fn opposite(self) -> Move {
        match self {
            Move::Left => Move::Right,
            Move::Right => Move::Left,
            Move::Up => Move::Down,
            Move::Down => Move::Up,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// An N x N sliding-block arrangement. Tiles are numbered `0..N*N` and `0` is
/// the blank. In the solved board tile `k` sits at row `k / N`, column `k % N`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    size: usize,
    tiles: Vec<u8>,
    blank: usize,
}

/// Largest board whose tiles still fit in a `u8`.
pub const MAX_SIZE: usize = 16;

impl Board {
    /// Boards are between 2x2 and `MAX_SIZE` x `MAX_SIZE`.
    pub fn check_size(size: usize) -> Result<()> {
        ensure!(
            (2..=MAX_SIZE).contains(&size),
            "board size must be between 2 and {MAX_SIZE}, got {size}"
        );
        Ok(())
    }

    pub fn solved(size: usize) -> Result<Self> {
        Self::check_size(size)?;
        Ok(Self::home(size))
    }

    // Callers have checked `size`.
    fn home(size: usize) -> Self {
        Board {
            size,
            tiles: (0..size * size).map(|tile| tile as u8).collect(),
            blank: 0,
        }
    }

    /// The solved board of the same size.
    pub fn goal(&self) -> Board {
        Self::home(self.size)
    }

    /// Build a board from row-major tiles, which must be a permutation of
    /// `0..size * size`.
    pub fn from_tiles(size: usize, tiles: &[u8]) -> Result<Self> {
        Self::check_size(size)?;
        ensure!(
            tiles.len() == size * size,
            "expected {} tiles for a {size}x{size} board, got {}",
            size * size,
            tiles.len()
        );

        let mut seen = vec![false; tiles.len()];
        for &tile in tiles {
            let tile = tile as usize;
            ensure!(tile < tiles.len(), "tile {tile} is out of range");
            ensure!(!seen[tile], "tile {tile} appears more than once");
            seen[tile] = true;
        }

        let blank = tiles
            .iter()
            .position(|&tile| tile == 0)
            .ok_or_else(|| anyhow!("board has no blank"))?;
        Ok(Board {
            size,
            tiles: tiles.to_vec(),
            blank,
        })
    }

    /// Start from the solved board and apply `moves` random legal moves.
    pub fn scrambled<R: Rng + ?Sized>(size: usize, moves: usize, rng: &mut R) -> Result<Self> {
        let mut board = Board::solved(size)?;
        for _ in 0..moves {
            let legal = board.legal_moves();
            let chosen = legal[rng.gen_range(0..legal.len())];
            board = board.apply(chosen);
        }
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    pub fn tile_at(&self, row: usize, column: usize) -> u8 {
        self.tiles[row * self.size + column]
    }

    /// `(row, column)` of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    pub fn is_solved(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(index, &tile)| tile as usize == index)
    }

    fn target(&self, mv: Move) -> Option<usize> {
        let (row, column) = self.blank();
        let (d_row, d_column) = mv.offset();
        let row = row.checked_add_signed(d_row)?;
        let column = column.checked_add_signed(d_column)?;
        (row < self.size && column < self.size).then_some(row * self.size + column)
    }

    /// Moves keeping the blank on the board, in `Move::ALL` order.
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::ALL
            .into_iter()
            .filter(|&mv| self.target(mv).is_some())
            .collect()
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.target(mv).is_some()
    }

    /// The board after sliding the blank in direction `mv`.
    ///
    /// Panics if the move would leave the board.
    pub fn apply(&self, mv: Move) -> Board {
        let target = self
            .target(mv)
            .unwrap_or_else(|| panic!("move {mv} is not legal with blank at {:?}", self.blank()));
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Board {
            size: self.size,
            tiles,
            blank: target,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.size) {
            let line: Vec<String> = row.iter().map(|tile| tile.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_solved_board() {
        let board = Board::solved(3).unwrap();
        assert!(board.is_solved());
        assert_eq!(board.blank(), (0, 0));
        assert_eq!(board.tile_at(1, 2), 5);
        assert_eq!(board.legal_moves(), vec![Move::Right, Move::Down]);
        assert_eq!(board.to_string(), "0 1 2\n3 4 5\n6 7 8\n");
    }

    #[test]
    fn test_legal_moves_in_center_and_corner() {
        let center = Board::from_tiles(3, &[1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();
        assert_eq!(center.legal_moves(), Move::ALL.to_vec());

        let corner = Board::from_tiles(3, &[1, 2, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        assert_eq!(corner.legal_moves(), vec![Move::Left, Move::Up]);
        assert!(!corner.is_legal(Move::Right));
    }

    #[test]
    fn test_apply_swaps_blank() {
        let board = Board::solved(3).unwrap().apply(Move::Right);
        assert_eq!(board.tiles(), &[1, 0, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(board.blank(), (0, 1));

        let board = board.apply(Move::Down);
        assert_eq!(board.tiles(), &[1, 4, 2, 3, 0, 5, 6, 7, 8]);
        assert_eq!(board.blank(), (1, 1));
    }

    #[test]
    fn test_apply_then_opposite_restores_board() {
        let board = Board::from_tiles(3, &[1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();
        for mv in Move::ALL {
            assert_eq!(board.apply(mv).apply(mv.opposite()), board);
        }
    }

    #[test]
    #[should_panic]
    fn test_apply_illegal_move_panics() {
        Board::solved(3).unwrap().apply(Move::Left);
    }

    #[test]
    fn test_from_tiles_rejects_malformed_input() {
        assert!(Board::from_tiles(3, &[0, 1, 2]).is_err());
        assert!(Board::from_tiles(3, &[0, 1, 2, 3, 4, 5, 6, 7, 7]).is_err());
        assert!(Board::from_tiles(3, &[0, 1, 2, 3, 4, 5, 6, 7, 9]).is_err());
        assert!(Board::from_tiles(1, &[0]).is_err());
        assert!(Board::from_tiles(2, &[3, 1, 2, 0]).is_ok());
    }

    #[test]
    fn test_equal_boards_hash_equal() {
        use std::collections::HashSet;

        let round_trip = Board::solved(3).unwrap().apply(Move::Down).apply(Move::Up);
        let set: HashSet<Board> = [Board::solved(3).unwrap(), round_trip].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_scramble_is_reproducible() {
        let first = Board::scrambled(3, 20, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = Board::scrambled(3, 20, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);

        // Still a permutation of the tiles.
        let mut tiles = first.tiles().to_vec();
        tiles.sort_unstable();
        assert_eq!(tiles, Board::solved(3).unwrap().tiles());
    }

    #[test]
    fn test_scramble_without_moves_is_solved() {
        let board = Board::scrambled(4, 0, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(board, Board::solved(4).unwrap());
    }

    #[test]
    fn test_constructors_reject_bad_sizes() {
        let mut rng = StdRng::seed_from_u64(0);
        for size in [0, 1, MAX_SIZE + 1] {
            assert!(Board::check_size(size).is_err());
            assert!(Board::solved(size).is_err());
            assert!(Board::scrambled(size, 1, &mut rng).is_err());
        }
        assert!(Board::from_tiles(17, &[0; 289]).is_err());

        // The largest board still has exactly one blank.
        let largest = Board::solved(MAX_SIZE).unwrap();
        assert_eq!(largest.tiles().iter().filter(|&&tile| tile == 0).count(), 1);
        assert_eq!(largest.tile_at(MAX_SIZE - 1, MAX_SIZE - 1), 255);
        assert_eq!(largest.goal(), largest);
    }
}
