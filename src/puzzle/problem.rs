use super::{Board, Move};
use crate::search::Problem;

use rand::Rng;

/// Sliding-block puzzle: reach the solved board of the same size, one unit of
/// cost per move.
#[derive(Debug, Clone)]
pub struct SlidingPuzzle {
    initial: Board,
    goal: Board,
}

impl SlidingPuzzle {
    pub fn new(initial: Board) -> Self {
        let goal = initial.goal();
        SlidingPuzzle { initial, goal }
    }

    /// A puzzle `moves` random moves away from solved, at most.
    pub fn scrambled<R: Rng + ?Sized>(
        size: usize,
        moves: usize,
        rng: &mut R,
    ) -> anyhow::Result<Self> {
        Ok(Self::new(Board::scrambled(size, moves, rng)?))
    }

    pub fn initial(&self) -> &Board {
        &self.initial
    }

    /// Replay `moves` from the initial board.
    pub fn replay(&self, moves: &[Move]) -> Option<Board> {
        moves.iter().try_fold(self.initial.clone(), |board, &mv| {
            board.is_legal(mv).then(|| board.apply(mv))
        })
    }
}

impl Problem for SlidingPuzzle {
    type State = Board;
    type Action = Move;

    fn initial_state(&self) -> Board {
        self.initial.clone()
    }

    fn actions(&self, state: &Board) -> Vec<Move> {
        state.legal_moves()
    }

    fn is_goal(&self, state: &Board) -> bool {
        *state == self.goal
    }

    fn result(&self, state: &Board, action: &Move) -> Board {
        state.apply(*action)
    }

    fn step_cost(&self, _state: &Board, _action: &Move, _next_state: &Board) -> f64 {
        1.
    }
}
