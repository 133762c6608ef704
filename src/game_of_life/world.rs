//! The toroidal world: cell ownership, seeding, iteration and rendering

use super::cell::{Cell, State};
use super::rules::{self, LifeRules};
use crate::error::LifeError;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::debug;

/// Highest accepted initial live percentage
pub const MAX_PERCENT: u32 = 100;

/// An N×N Game of Life world whose edges wrap around.
///
/// Cells are addressed by `(x, y)`, where `x` selects the row and `y` the column.
#[derive(Debug, Clone)]
pub struct World {
    size: usize,
    cells: Vec<Cell>,
    rng: StdRng,
    generation: u64,
}

impl World {
    /// Build a `size`×`size` world where each cell is independently alive
    /// with probability `percent`/100.
    ///
    /// Draws are taken in row-major order from a generator seeded with `seed`,
    /// so equal arguments always yield equal worlds.
    pub fn new(size: usize, seed: u64, percent: u32) -> Result<Self, LifeError> {
        if size == 0 {
            return Err(LifeError::invalid("world size must be positive"));
        }
        if percent > MAX_PERCENT {
            return Err(LifeError::invalid(format!(
                "initial percentage must be within 0..=100, got {}",
                percent
            )));
        }

        let cell_count = size
            .checked_mul(size)
            .ok_or_else(|| LifeError::invalid(format!("world size {} is too large", size)))?;

        let mut rng = StdRng::seed_from_u64(seed);
        let cells = (0..cell_count)
            .map(|_| {
                let living_chance: u32 = rng.gen_range(0..100);
                Cell::new(State::from(living_chance < percent))
            })
            .collect();

        let world = Self {
            size,
            cells,
            rng,
            generation: 0,
        };
        debug!(size, seed, percent, living = world.living_count(), "generated world");
        Ok(world)
    }

    /// Wrap already built cells and an existing generator. Nothing is reseeded
    /// or repopulated.
    pub fn from_cells(rows: Vec<Vec<Cell>>, rng: StdRng) -> Result<Self, LifeError> {
        let size = rows.len();
        if size == 0 {
            return Err(LifeError::invalid("world cannot be empty"));
        }
        for (x, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(LifeError::invalid(format!(
                    "row {} has length {}, expected {} (worlds are square)",
                    x,
                    row.len(),
                    size
                )));
            }
        }

        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
            rng,
            generation: 0,
        })
    }

    /// Build a world from rows of states, seeding a fresh generator
    pub fn from_states(rows: &[Vec<State>], seed: u64) -> Result<Self, LifeError> {
        let cells: Vec<Vec<Cell>> = rows
            .iter()
            .map(|row| row.iter().copied().map(Cell::new).collect())
            .collect();
        Self::from_cells(cells, StdRng::seed_from_u64(seed))
    }

    /// Take the world apart into its rows and generator, e.g. to rebuild it
    /// with [`World::from_cells`]
    pub fn into_parts(self) -> (Vec<Vec<Cell>>, StdRng) {
        let rows = self
            .cells
            .chunks(self.size)
            .map(|row| row.to_vec())
            .collect();
        (rows, self.rng)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of completed calls to [`World::iterate`]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        x * self.size + y
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.size && y < self.size {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: usize, y: usize, state: State) -> Result<(), LifeError> {
        if x >= self.size || y >= self.size {
            return Err(LifeError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        let idx = self.index(x, y);
        self.cells[idx].advance_state(state);
        Ok(())
    }

    /// Live cells among the 8 wrapped neighbors of `(x, y)`
    pub fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        rules::count_neighbors(&self.cells, self.size, x, y)
    }

    /// Advance the whole world by one generation.
    ///
    /// Next states for every cell are computed from the current grid before any
    /// cell is committed.
    pub fn iterate(&mut self) {
        let next = LifeRules::compute_next_states(&self.cells, self.size);

        for (cell, state) in self.cells.iter_mut().zip(next) {
            cell.advance_state(state);
        }
        self.generation += 1;
        debug!(generation = self.generation, living = self.living_count(), "iterated");
    }

    pub fn iterate_n(&mut self, generations: usize) {
        for _ in 0..generations {
            self.iterate();
        }
    }

    /// Rows of the grid, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }

    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Fraction of live cells, 0.0 to 1.0
    pub fn density(&self) -> f64 {
        self.living_count() as f64 / self.cells.len() as f64
    }

    /// Whether both worlds hold the same cells, ignoring generators and counters
    pub fn same_cells(&self, other: &World) -> bool {
        self.size == other.size && self.cells == other.cells
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  {}", (0..self.size).map(|y| y % 10).join(""))?;
        for (x, row) in self.rows().enumerate() {
            let reps: String = row.iter().map(Cell::state_rep).collect();
            writeln!(f, "{} {}", x % 10, reps)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with(size: usize, alive: &[(usize, usize)]) -> World {
        let mut rows = vec![vec![State::Dead; size]; size];
        for &(x, y) in alive {
            rows[x][y] = State::Alive;
        }
        World::from_states(&rows, 0).unwrap()
    }

    fn alive_cells(world: &World) -> Vec<(usize, usize)> {
        let mut alive = Vec::new();
        for x in 0..world.size() {
            for y in 0..world.size() {
                if world.get(x, y).unwrap().is_alive() {
                    alive.push((x, y));
                }
            }
        }
        alive
    }

    #[test]
    fn test_world_creation() {
        let world = World::new(8, 42, 30).unwrap();
        assert_eq!(world.size(), 8);
        assert_eq!(world.rows().count(), 8);
        assert!(world.rows().all(|row| row.len() == 8));
        assert_eq!(world.generation(), 0);
    }

    #[test]
    fn test_percent_extremes() {
        assert!(World::new(6, 1, 0).unwrap().is_empty());
        assert_eq!(World::new(6, 1, 100).unwrap().living_count(), 36);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(World::new(0, 1, 50).unwrap_err().is_invalid_argument());
        assert!(World::new(5, 1, 101).unwrap_err().is_invalid_argument());

        let ragged = vec![vec![Cell::dead(); 3], vec![Cell::dead(); 2], vec![Cell::dead(); 3]];
        assert!(World::from_cells(ragged, StdRng::seed_from_u64(0)).is_err());

        let not_square = vec![vec![Cell::dead(); 3]; 2];
        assert!(World::from_cells(not_square, StdRng::seed_from_u64(0)).is_err());

        assert!(World::from_cells(Vec::new(), StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn test_oversized_world_is_rejected() {
        let err = World::new(usize::MAX, 1, 50).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(World::new(1 << (usize::BITS / 2), 1, 50).is_err());
    }

    #[test]
    fn test_deterministic_seeding() {
        let a = World::new(12, 7, 40).unwrap();
        let b = World::new(12, 7, 40).unwrap();
        assert!(a.same_cells(&b));

        let c = World::new(12, 8, 40).unwrap();
        assert!(!a.same_cells(&c));
    }

    #[test]
    fn test_blinker_on_torus() {
        let mut world = world_with(5, &[(2, 1), (2, 2), (2, 3)]);
        world.iterate();
        assert_eq!(alive_cells(&world), vec![(1, 2), (2, 2), (3, 2)]);

        world.iterate();
        assert_eq!(alive_cells(&world), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(world.generation(), 2);
    }

    #[test]
    fn test_blinker_across_the_seam() {
        // Row 0 wraps from column 4 to column 0
        let mut world = world_with(5, &[(0, 4), (0, 0), (0, 1)]);
        world.iterate();
        assert_eq!(alive_cells(&world), vec![(0, 0), (1, 0), (4, 0)]);
    }

    #[test]
    fn test_block_is_still_life() {
        let block = [(2, 2), (2, 3), (3, 2), (3, 3)];
        let mut world = world_with(6, &block);
        let original = world.clone();

        world.iterate_n(20);
        assert!(world.same_cells(&original));
        assert_eq!(world.generation(), 20);
    }

    #[test]
    fn test_set_and_get() {
        let mut world = world_with(3, &[]);
        world.set(1, 2, State::Alive).unwrap();
        assert!(world.get(1, 2).unwrap().is_alive());
        assert!(world.get(3, 0).is_none());
        assert_eq!(
            world.set(3, 0, State::Alive),
            Err(LifeError::OutOfBounds { x: 3, y: 0, size: 3 })
        );
    }

    #[test]
    fn test_corner_wraparound_counts() {
        let world = world_with(3, &[(0, 0)]);
        assert_eq!(world.count_neighbors(2, 2), 1);

        let n = 7;
        let world = world_with(n, &[(n - 1, n - 1), (n - 1, 0), (0, n - 1)]);
        assert_eq!(world.count_neighbors(0, 0), 3);
    }

    #[test]
    fn test_rebuild_keeps_generator() {
        let mut world = World::new(4, 99, 50).unwrap();
        let mut twin = world.clone();
        world.iterate();
        twin.iterate();

        let (rows, mut rng) = world.into_parts();
        let rebuilt = World::from_cells(rows, rng.clone()).unwrap();
        assert!(rebuilt.same_cells(&twin));

        let (_, mut twin_rng) = twin.into_parts();
        assert_eq!(rng.gen::<u32>(), twin_rng.gen::<u32>());
    }

    #[test]
    fn test_render_format() {
        let world = world_with(3, &[(0, 1), (2, 2)]);
        assert_eq!(world.to_string(), "  012\n0 .X.\n1 ...\n2 ..X\n");
    }

    #[test]
    fn test_render_indices_wrap_at_ten() {
        let world = world_with(12, &[]);
        let rendered = world.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "  012345678901");
        assert_eq!(lines[11], "0 ............");
        assert_eq!(lines[12], "1 ............");
    }
}
