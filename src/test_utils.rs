//! Test utilities for the game tree and the evaluators

use crate::{Board, Cell, Move, Score, Simulator, State, Tile};

/// Builds a board from literal rows.
///
/// # Panics
/// Panics if the rows are not a valid board.
pub fn board(rows: &[&[Tile]]) -> Board{
    Board::from_rows(rows.iter().map(|row| row.to_vec()).collect())
        .expect("test board must be square with power-of-two tiles")
}

/// Builds a state from literal rows and a score.
pub fn state(rows: &[&[Tile]], score: Score) -> State{
    State::new(board(rows), score)
}

/// Utility function to compare floats with tolerance
///
/// # Returns
/// `true` if both values are approximately equal
pub fn compare_f64(a: f64, b: f64) -> bool{
    (a - b).abs() < 1e-8
}

/// A simulator wrapper counting the calls the search makes.
pub struct CountingSimulator<S: Simulator>{
    inner: S,
    set_state_calls: usize,
    make_move_calls: usize
}

impl<S: Simulator> CountingSimulator<S>{
    pub fn new(inner: S) -> Self{
        CountingSimulator { inner, set_state_calls: 0, make_move_calls: 0 }
    }

    pub fn set_state_calls(&self) -> usize{
        self.set_state_calls
    }

    pub fn make_move_calls(&self) -> usize{
        self.make_move_calls
    }
}

impl<S: Simulator> Simulator for CountingSimulator<S>{
    fn current_state(&self) -> State{
        self.inner.current_state()
    }

    fn set_state(&mut self, state: &State){
        self.set_state_calls += 1;
        self.inner.set_state(state);
    }

    fn make_move(&mut self, direction: Move) -> bool{
        self.make_move_calls += 1;
        self.inner.make_move(direction)
    }

    fn open_tiles(&self) -> Vec<Cell>{
        self.inner.open_tiles()
    }

    fn set_tile(&mut self, cell: Cell, value: Tile){
        self.inner.set_tile(cell, value);
    }
}
