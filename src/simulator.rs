//! Reference simulator implementing the standard 2048 rules on square boards of any size.
//!
//! The search never depends on these rules directly; it only goes through the
//! [`Simulator`] trait. This implementation is what the autoplay driver and the
//! tests plug into it.

use rand::Rng;

use crate::{utils, Board, Cell, Move, Score, Simulator, State, Tile};

/// Tile value spawned after every move. Only this value is ever spawned.
pub const DEFAULT_SPAWN_VALUE: Tile = 2;

/// A 2048 game: a board, its score and the value of newly spawned tiles.
#[derive(Clone, Debug, PartialEq)]
pub struct Game2048{
    state: State,
    spawn_value: Tile
}

impl Game2048{
    /// Creates a game on an empty `size` x `size` board with a zero score.
    pub fn new(size: usize) -> Self{
        Self::from_state(State::new(Board::empty(size), 0))
    }

    /// Creates a game positioned on an existing state.
    pub fn from_state(state: State) -> Self{
        Game2048 { state, spawn_value: DEFAULT_SPAWN_VALUE }
    }

    /// Replaces the value used by [`Game2048::spawn_random_tile`].
    pub fn with_spawn_value(mut self, spawn_value: Tile) -> Self{
        self.spawn_value = spawn_value;
        self
    }

    #[inline]
    pub fn spawn_value(&self) -> Tile{
        self.spawn_value
    }

    #[inline]
    pub fn state(&self) -> &State{
        &self.state
    }

    /// Places the spawn value on an empty cell chosen uniformly at random.
    ///
    /// # Parameters
    /// - `rng`: The random number generator used to pick the cell.
    ///
    /// # Returns
    /// The cell that received the tile, or `None` if the board is full.
    ///
    /// # Examples
    /// ```rust
    /// use expectimax_2048::{Game2048, Simulator};
    /// use rand::{rngs::StdRng, SeedableRng};
    /// let mut game = Game2048::new(4);
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let cell = game.spawn_random_tile(&mut rng).unwrap();
    /// assert_eq!(game.current_state().board.get(cell), 2);
    /// ```
    pub fn spawn_random_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Cell>{
        let cell = utils::choose_cell(&self.state.board.open_cells(), rng)?;
        self.state.board.set(cell, self.spawn_value);
        Some(cell)
    }
}

impl Simulator for Game2048{
    fn current_state(&self) -> State{
        self.state.clone()
    }

    fn set_state(&mut self, state: &State){
        self.state.clone_from(state);
    }

    fn make_move(&mut self, direction: Move) -> bool{
        let (board, gained) = shift(&self.state.board, direction);
        if board == self.state.board {
            return false;
        }

        self.state.board = board;
        self.state.score += gained;
        true
    }

    fn open_tiles(&self) -> Vec<Cell>{
        self.state.board.open_cells()
    }

    fn set_tile(&mut self, cell: Cell, value: Tile){
        self.state.board.set(cell, value);
    }
}

/// Slides every line of `board` toward `direction`.
///
/// # Returns
/// The resulting board and the points gained from merges.
pub fn shift(board: &Board, direction: Move) -> (Board, Score){
    let size = board.size();
    let mut result = board.clone();
    let mut gained = 0;

    for index in 0..size{
        let cells = line_cells(size, direction, index);
        let tiles: Vec<Tile> = cells.iter().map(|&cell| board.get(cell)).collect();
        let (merged, points) = slide_line(&tiles);

        for (&cell, tile) in cells.iter().zip(merged){
            result.set(cell, tile);
        }
        gained += points;
    }

    (result, gained)
}

/// Cells of line `index` ordered from the edge the tiles move toward.
fn line_cells(size: usize, direction: Move, index: usize) -> Vec<Cell>{
    match direction {
        Move::Left => (0..size).map(|col| (index, col)).collect(),
        Move::Right => (0..size).rev().map(|col| (index, col)).collect(),
        Move::Up => (0..size).map(|row| (row, index)).collect(),
        Move::Down => (0..size).rev().map(|row| (row, index)).collect(),
    }
}

/// Compacts a line toward index 0, merging each pair of equal neighbours once.
fn slide_line(tiles: &[Tile]) -> (Vec<Tile>, Score){
    let mut merged = Vec::with_capacity(tiles.len());
    let mut points = 0;
    let mut pending: Option<Tile> = None;

    for &tile in tiles.iter().filter(|&&tile| tile != 0){
        match pending {
            Some(previous) if previous == tile => {
                merged.push(previous + tile);
                points += previous + tile;
                pending = None;
            }
            Some(previous) => {
                merged.push(previous);
                pending = Some(tile);
            }
            None => pending = Some(tile)
        }
    }
    merged.extend(pending);
    merged.resize(tiles.len(), 0);

    (merged, points)
}
