//! Module defining the traits through which the search talks to the game:
//! the simulator that applies moves and spawns, and the evaluator that scores leaves.

use crate::{Cell, Move, State, Tile};

/// Trait defining the interface of a game simulator consumed by the tree builder.
///
/// The builder reuses a single simulator for every sibling it expands, so it always
/// calls `set_state` before acting. Implementations must not assume their state
/// survives between two calls coming from the search.
pub trait Simulator{
    /// Returns a snapshot of the simulator's present board and score.
    ///
    /// # Examples
    /// ```rust
    /// use expectimax_2048::{Board, Game2048, Simulator};
    /// let game = Game2048::new(4);
    /// assert_eq!(game.current_state().board, Board::empty(4));
    /// assert_eq!(game.current_state().score, 0);
    /// ```
    fn current_state(&self) -> State;

    /// Forces the simulator into exactly the given board and score.
    fn set_state(&mut self, state: &State);

    /// Attempts to slide the tiles in `direction`.
    ///
    /// # Parameters
    /// - `direction`: The move to apply.
    ///
    /// # Returns
    /// `true` if the board changed. On success the simulator holds the post-move board
    /// and the updated score; on failure its state is left untouched.
    ///
    /// # Examples
    /// ```rust
    /// use expectimax_2048::{Board, Game2048, Move, Simulator, State};
    /// let board = Board::from_rows(vec![vec![2, 2], vec![0, 0]]).unwrap();
    /// let mut game = Game2048::from_state(State::new(board, 0));
    /// assert!(game.make_move(Move::Left));
    /// assert_eq!(game.current_state().score, 4);
    /// assert!(!game.make_move(Move::Up));
    /// ```
    fn make_move(&mut self, direction: Move) -> bool;

    /// Lists the currently empty cells in row-major order.
    fn open_tiles(&self) -> Vec<Cell>;

    /// Writes `value` at `cell` directly, bypassing the move logic.
    fn set_tile(&mut self, cell: Cell, value: Tile);

    /// Determines whether no move can change the board any more.
    ///
    /// The default implementation probes every direction and restores the state afterwards.
    fn is_game_over(&mut self) -> bool{
        let state = self.current_state();
        let stuck = Move::ALL.iter().all(|&direction|{
            self.set_state(&state);
            !self.make_move(direction)
        });
        self.set_state(&state);
        stuck
    }
}

/// Trait for assigning a value to the leaves (terminal nodes) of a game tree.
///
/// Expectimax propagates these values upward: decision nodes take the maximum
/// of their children and chance nodes the mean. Swapping the leaf evaluator is
/// what distinguishes the exact search from the heuristic one.
pub trait LeafEvaluator{
    /// Returns the value of a terminal state. Higher is better.
    ///
    /// # Examples
    /// ```rust
    /// use expectimax_2048::{Board, LeafEvaluator, ScoreEvaluator, State};
    /// let state = State::new(Board::empty(2), 12);
    /// assert_eq!(ScoreEvaluator.leaf_value(&state), 12.0);
    /// ```
    fn leaf_value(&self, state: &State) -> f64;
}

/// Leaf evaluator of the exact search: the value of a state is its game score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEvaluator;

impl LeafEvaluator for ScoreEvaluator{
    #[inline]
    fn leaf_value(&self, state: &State) -> f64{
        state.score as f64
    }
}
