//! Toroidal Game of Life
//!
//! This library simulates Conway's Game of Life on a fixed-size grid whose
//! edges wrap around, seeded from a deterministic random generator.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod runner;
pub mod utils;

pub use config::Settings;
pub use error::LifeError;
pub use game_of_life::{Cell, State, World};
pub use runner::{RunSummary, Runner};

use anyhow::Result;

/// Build the starting world described by the settings
pub fn build_world(settings: &Settings) -> Result<World> {
    match settings.world.pattern_file {
        Some(ref pattern) => game_of_life::load_world_from_file(pattern, settings.world.seed),
        None => Ok(World::new(
            settings.world.size,
            settings.world.seed,
            settings.world.percent,
        )?),
    }
}

/// Main entry point: build a world from settings and run it into `out`
pub fn simulate<W: std::io::Write>(settings: &Settings, out: &mut W) -> Result<RunSummary> {
    let mut world = build_world(settings)?;
    Runner::new(settings.run.clone(), settings.output.format).run(&mut world, out)
}
