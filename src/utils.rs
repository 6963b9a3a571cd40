use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use crate::Cell;

/// Picks one cell uniformly at random.
///
/// # Parameters
/// - `cells`: The candidate cells, typically the open tiles of a board.
/// - `rng`: The random number generator. Seed it for reproducible games.
///
/// # Returns
/// The chosen cell, or `None` if `cells` is empty.
pub fn choose_cell<R: Rng + ?Sized>(cells: &[Cell], rng: &mut R) -> Option<Cell>{
    if cells.is_empty() {
        None
    }
    else{
        Some(cells[rng.random_range(0..cells.len())])
    }
}

/// Returns `seed` if given, otherwise a seed derived from the current system time.
pub fn seed_or_clock(seed: Option<u64>) -> u64{
    match seed {
        Some(seed) => seed,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(0)
    }
}
