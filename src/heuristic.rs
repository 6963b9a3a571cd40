//! Static board-quality estimate used at the leaves of the heuristic search.

use crate::{Board, LeafEvaluator, State, Tile};

/// Points awarded per empty cell.
const MOBILITY_WEIGHT: f64 = 500.0;

/// The individual terms of the heuristic for one state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicBreakdown{
    /// The game score of the state.
    pub base: f64,
    /// `500` per empty cell.
    pub mobility: f64,
    /// Sum of all tiles plus the cube of the largest tile.
    pub magnitude: f64,
    /// Sum of every row sorted non-increasing left to right, plus the sum of
    /// every column sorted non-increasing top to bottom.
    pub monotonicity: f64
}

impl HeuristicBreakdown{
    /// Computes every term for `state`.
    pub fn of(state: &State) -> Self{
        let board = &state.board;
        HeuristicBreakdown {
            base: state.score as f64,
            mobility: mobility(board),
            magnitude: magnitude(board),
            monotonicity: monotonicity(board)
        }
    }

    #[inline]
    pub fn total(&self) -> f64{
        self.base + self.mobility + self.magnitude + self.monotonicity
    }
}

/// Estimates how good a state is. Higher is better.
///
/// # Examples
/// ```rust
/// use expectimax_2048::{heuristic, Board, State};
/// let board = Board::from_rows(vec![vec![8, 4], vec![4, 2]]).unwrap();
/// // 18 (tiles) + 512 (8^3) + 12 + 6 (rows) + 12 + 6 (columns)
/// assert_eq!(heuristic(&State::new(board, 0)), 566.0);
/// ```
pub fn heuristic(state: &State) -> f64{
    HeuristicBreakdown::of(state).total()
}

fn mobility(board: &Board) -> f64{
    board.count_empty() as f64 * MOBILITY_WEIGHT
}

fn magnitude(board: &Board) -> f64{
    board.tile_sum() as f64 + (board.max_tile() as f64).powi(3)
}

fn monotonicity(board: &Board) -> f64{
    let rows: f64 = board.rows()
        .filter(|row| is_non_increasing(row))
        .map(line_sum)
        .sum();

    let columns: f64 = (0..board.size())
        .map(|col| board.column(col).collect::<Vec<Tile>>())
        .filter(|column| is_non_increasing(column))
        .map(|column| line_sum(&column))
        .sum();

    rows + columns
}

#[inline]
fn is_non_increasing(line: &[Tile]) -> bool{
    line.windows(2).all(|pair| pair[0] >= pair[1])
}

#[inline]
fn line_sum(line: &[Tile]) -> f64{
    line.iter().sum::<Tile>() as f64
}

/// Leaf evaluator of the heuristic search: the value of a state is [`heuristic`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEvaluator;

impl LeafEvaluator for HeuristicEvaluator{
    #[inline]
    fn leaf_value(&self, state: &State) -> f64{
        heuristic(state)
    }
}
