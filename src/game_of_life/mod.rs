//! Game of Life core functionality

pub mod cell;
pub mod io;
pub mod rules;
pub mod world;

pub use cell::{Cell, State};
pub use io::{create_example_patterns, load_world_from_file, WorldSnapshot};
pub use rules::{count_neighbors, LifeRules};
pub use world::World;
