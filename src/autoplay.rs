//! Plays whole games with the expectimax AI on the reference simulator.
//!
//! Each turn the AI searches from the current state, the chosen move is applied
//! and a tile is spawned on a random empty cell, until no move is left.

use rand::{rngs::StdRng, SeedableRng};

use crate::{utils, Ai, AiConfig, Game2048, Move, Result, Score, Simulator, State, Strategy, Tile};

/// Configuration parameters for an [`Autoplay`] driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoplayConfig{
    /// The configuration of the AI choosing every move.
    pub ai: AiConfig,
    /// Exact or heuristic leaf values.
    pub strategy: Strategy,
    /// Side length of the boards of new games.
    pub board_size: usize,
    /// An optional seed for the random number generator placing spawned tiles.
    ///
    /// `Some(value)` makes games reproducible. With `None`, the seed is taken
    /// from the current time.
    pub seed: Option<u64>,
    /// Stops a game after this many moves, even if it is not over.
    pub max_moves: Option<usize>
}

impl AutoplayConfig{
    /// The default configuration: default AI, exact search, 4x4 boards, no seed, no move limit.
    pub const DEFAULT: AutoplayConfig = AutoplayConfig{
        ai: AiConfig::DEFAULT,
        strategy: Strategy::Exact,
        board_size: 4,
        seed: None,
        max_moves: None
    };
}

impl Default for AutoplayConfig{
    fn default() -> Self{
        Self::DEFAULT
    }
}

/// The trace of one played game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord{
    /// Every state the AI moved from, with the move it chose.
    pub history: Vec<(State, Move)>,
    /// The state after the last spawn.
    pub final_state: State
}

impl GameRecord{
    #[inline]
    pub fn moves(&self) -> usize{
        self.history.len()
    }

    #[inline]
    pub fn score(&self) -> Score{
        self.final_state.score
    }

    #[inline]
    pub fn max_tile(&self) -> Tile{
        self.final_state.board.max_tile()
    }
}

/// Drives complete games, sharing one random number generator across them.
pub struct Autoplay{
    config: AutoplayConfig,
    rng: StdRng
}

impl Autoplay{
    /// Creates a driver with the default configuration.
    ///
    /// The random number generator will be seeded based on the current system time.
    #[inline]
    pub fn new() -> Self{
        Self::from_config(&AutoplayConfig::DEFAULT)
    }

    /// Creates a driver from a specified configuration.
    #[inline]
    pub fn from_config(config: &AutoplayConfig) -> Self{
        Autoplay {
            config: *config,
            rng: StdRng::seed_from_u64(utils::seed_or_clock(config.seed))
        }
    }

    #[inline]
    pub fn config(&self) -> &AutoplayConfig{
        &self.config
    }

    /// Plays one game from an empty board holding two spawned tiles.
    ///
    /// # Returns
    /// The record of the game, or the first error raised by the search.
    ///
    /// # Examples
    /// ```rust
    /// use expectimax_2048::{AiConfig, Autoplay, AutoplayConfig};
    /// let config = AutoplayConfig {
    ///     ai: AiConfig { search_depth: 1, ..AiConfig::DEFAULT },
    ///     board_size: 3,
    ///     seed: Some(1),
    ///     max_moves: Some(5),
    ///     ..AutoplayConfig::DEFAULT
    /// };
    /// let record = Autoplay::from_config(&config).play_game().unwrap();
    /// assert!(record.moves() <= 5);
    /// ```
    pub fn play_game(&mut self) -> Result<GameRecord>{
        let mut game = Game2048::new(self.config.board_size).with_spawn_value(self.config.ai.spawn_value);
        game.spawn_random_tile(&mut self.rng);
        game.spawn_random_tile(&mut self.rng);

        self.play_from(game.current_state())
    }

    /// Plays one game starting from `state`.
    ///
    /// The game stops when the AI finds no move (the board is stuck, or the
    /// search depth is 0) or when `max_moves` is reached.
    pub fn play_from(&mut self, state: State) -> Result<GameRecord>{
        let mut game = Game2048::from_state(state.clone()).with_spawn_value(self.config.ai.spawn_value);
        let mut ai = Ai::from_state_with_config(state, &self.config.ai);
        let mut history = Vec::new();

        while self.config.max_moves.map_or(true, |limit| history.len() < limit){
            ai.set_root_state(game.current_state());
            let Some(direction) = ai.compute_decision_with(self.config.strategy)? else { break };

            let before = game.current_state();
            if !game.make_move(direction) {
                log::warn!("decision {} does not change the board, stopping the game", direction);
                break;
            }
            let spawned = game.spawn_random_tile(&mut self.rng);

            log::debug!("move {}: {} (score {}, spawn at {:?})", history.len() + 1, direction, game.state().score, spawned);
            history.push((before, direction));
        }

        let record = GameRecord { history, final_state: game.current_state() };
        log::info!("game finished after {} moves: score {}, max tile {}", record.moves(), record.score(), record.max_tile());
        Ok(record)
    }

    /// Plays `count` games one after the other.
    pub fn play_batch(&mut self, count: usize) -> Result<Vec<GameRecord>>{
        (0..count).map(|_| self.play_game()).collect()
    }
}

impl Default for Autoplay{
    fn default() -> Self{
        Self::new()
    }
}
