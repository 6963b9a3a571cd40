//! A Rust library choosing moves for a 2048-style sliding-tile game with
//! expectimax search over an explicit, bounded-depth game tree.
//!
//! The search alternates decision plies (the player slides the tiles) and chance
//! plies (a tile appears on an empty cell, every cell being equally likely).
//! Leaves are valued either by their exact game score or by a board-quality
//! heuristic, and the values are folded bottom-up to pick the best move.
//!
//! # Modules
//! - `board`: Boards, states and move directions.
//! - `game`: Traits for the simulator collaborator and for leaf evaluation.
//! - `tree`: The game tree arena and its builder.
//! - `expectimax`: The bottom-up evaluation and the `Ai` front end.
//! - `heuristic`: The board-quality estimate used by the heuristic search.
//! - `simulator`: A reference implementation of the 2048 rules.
//! - `autoplay`: Plays whole games with the AI.
//! - `utils`: Contains general utility functions.
//! - `test_utils`: Provides helpers for testing the search.
//!
//! # Features
//! - `parallel`: evaluates each level of the tree with rayon.
//!
//! # Examples
//! ```rust
//! use expectimax_2048::{Ai, AiError, Board, Move, State};
//!
//! fn main() -> Result<(), AiError> {
//!     let board = Board::from_rows(vec![
//!         vec![2, 2, 0, 0],
//!         vec![0, 0, 0, 0],
//!         vec![0, 0, 4, 0],
//!         vec![0, 0, 0, 0],
//!     ])?;
//!
//!     // Search three plies deep (the default) from the observed state
//!     let mut ai = Ai::from_state(State::new(board, 0));
//!     let exact = ai.compute_decision()?;
//!     let heuristic = ai.compute_decision_heuristic()?;
//!     println!("exact: {:?}, heuristic: {:?}", exact, heuristic);
//!
//!     assert!(exact.is_some() && heuristic.is_some());
//!     assert!(Move::ALL.contains(&exact.unwrap()));
//!     Ok(())
//! }
//! ```

mod autoplay;
mod board;
mod error;
mod expectimax;
mod game;
mod heuristic;
pub mod simulator;
mod tree;
pub mod utils;

#[doc(hidden)]
pub mod test_utils;

pub use autoplay::*;
pub use board::*;
pub use error::*;
pub use expectimax::*;
pub use game::*;
pub use heuristic::*;
pub use simulator::Game2048;
pub use tree::*;
