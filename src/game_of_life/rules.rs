//! B3/S23 rules and the compute phase of a generation

use super::cell::{Cell, State};
use rayon::prelude::*;

/// Whole-grid application of the B3/S23 rule
pub struct LifeRules;

impl LifeRules {
    /// Compute every cell's next state from a read-only view of the current grid.
    ///
    /// `cells` is a row-major `size`×`size` grid. The returned buffer has the same
    /// layout. Nothing in `cells` is written, so rows are evaluated in parallel.
    pub fn compute_next_states(cells: &[Cell], size: usize) -> Vec<State> {
        (0..size)
            .into_par_iter()
            .flat_map_iter(|x| {
                (0..size).map(move |y| {
                    let neighbors = count_neighbors(cells, size, x, y);
                    cells[x * size + y].determine_next_state(neighbors)
                })
            })
            .collect()
    }
}

/// Count live cells among the 8 Moore neighbors of `(x, y)`, wrapping
/// around every edge of the `size`×`size` grid.
pub fn count_neighbors(cells: &[Cell], size: usize, x: usize, y: usize) -> u8 {
    let up = (x + size - 1) % size;
    let down = (x + 1) % size;
    let left = (y + size - 1) % size;
    let right = (y + 1) % size;

    [
        (up, left),
        (up, y),
        (up, right),
        (x, left),
        (x, right),
        (down, left),
        (down, y),
        (down, right),
    ]
    .iter()
    .filter(|&&(r, c)| cells[r * size + c].is_alive())
    .count() as u8
}
