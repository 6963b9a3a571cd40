//! Board snapshots, game states and move directions.

use std::fmt;

use crate::{AiError, Result};

/// Value held by a cell: 0 for an empty cell, a power of two otherwise.
pub type Tile = u64;
/// Points accumulated from merges. Its meaning is owned by the simulator.
pub type Score = u64;
/// A `(row, col)` position on the board.
pub type Cell = (usize, usize);

/// A direction the player can slide the tiles to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move{
    Up,
    Left,
    Down,
    Right,
}

impl Move{
    /// Every direction, in the fixed order used to enumerate decision children.
    ///
    /// Ties between equally valued moves are broken in favour of the earliest
    /// direction of this list.
    pub const ALL: [Move; 4] = [Move::Up, Move::Left, Move::Down, Move::Right];

    /// Lowercase name of the direction.
    pub fn name(self) -> &'static str{
        match self {
            Move::Up => "up",
            Move::Left => "left",
            Move::Down => "down",
            Move::Right => "right",
        }
    }
}

impl fmt::Display for Move{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result{
        f.write_str(self.name())
    }
}

/// Square matrix of tiles stored row-major.
///
/// A `Board` is a plain owned value: cloning it gives an independent snapshot,
/// which is what every tree node keeps.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board{
    size: usize,
    cells: Vec<Tile>
}

impl Board{
    /// Creates an empty board of `size` x `size` cells.
    pub fn empty(size: usize) -> Self{
        Board { size, cells: vec![0; size * size] }
    }

    /// Creates a board from its rows.
    ///
    /// # Parameters
    /// - `rows`: The rows of the board, top to bottom. Every row must have as many
    ///           cells as there are rows.
    ///
    /// # Returns
    /// The board, or `AiError::InvalidBoard` if the rows do not form a non-empty square,
    /// or `AiError::InvalidTile` if a cell is neither 0 nor a power of two greater than 1.
    ///
    /// # Examples
    /// ```rust
    /// use expectimax_2048::Board;
    /// let board = Board::from_rows(vec![vec![2, 0], vec![0, 4]]).unwrap();
    /// assert_eq!(board.size(), 2);
    /// assert_eq!(board.count_empty(), 2);
    /// ```
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self>{
        let size = rows.len();
        if size == 0 {
            return Err(AiError::InvalidBoard { row: 0, expected: 1, got: 0 });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate(){
            if values.len() != size {
                return Err(AiError::InvalidBoard { row, expected: size, got: values.len() });
            }
            for (col, &value) in values.iter().enumerate(){
                if value != 0 && (value < 2 || !value.is_power_of_two()) {
                    return Err(AiError::InvalidTile { row, col, value });
                }
            }
            cells.extend(values);
        }

        Ok(Board { size, cells })
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn size(&self) -> usize{
        self.size
    }

    /// All cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[Tile]{
        &self.cells
    }

    /// Value of the tile at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the cell is outside the board.
    #[inline]
    pub fn get(&self, (row, col): Cell) -> Tile{
        self.cells[row * self.size + col]
    }

    /// Overwrites the tile at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the cell is outside the board.
    #[inline]
    pub fn set(&mut self, (row, col): Cell, value: Tile){
        self.cells[row * self.size + col] = value;
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_{
        self.cells.chunks(self.size.max(1))
    }

    /// Iterates over the tiles of column `col`, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Tile> + '_{
        self.cells.iter().skip(col).step_by(self.size.max(1)).copied()
    }

    /// Empty cells in row-major order.
    pub fn open_cells(&self) -> Vec<Cell>{
        self.cells.iter()
            .enumerate()
            .filter(|&(_, &tile)| tile == 0)
            .map(|(index, _)| (index / self.size, index % self.size))
            .collect()
    }

    #[inline]
    pub fn count_empty(&self) -> usize{
        self.cells.iter().filter(|&&tile| tile == 0).count()
    }

    #[inline]
    pub fn tile_sum(&self) -> Tile{
        self.cells.iter().sum()
    }

    #[inline]
    pub fn max_tile(&self) -> Tile{
        self.cells.iter().copied().max().unwrap_or(0)
    }
}

impl fmt::Display for Board{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result{
        for row in self.rows(){
            for (col, tile) in row.iter().enumerate(){
                if col > 0 { f.write_str(" ")?; }
                if *tile == 0 { write!(f, "{:>5}", ".")?; } else { write!(f, "{:>5}", tile)?; }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A board together with the score accumulated to reach it.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct State{
    pub board: Board,
    pub score: Score
}

impl State{
    #[inline]
    pub fn new(board: Board, score: Score) -> Self{
        State { board, score }
    }
}
