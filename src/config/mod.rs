//! Configuration management for the simulation

pub mod settings;

pub use settings::{CliOverrides, OutputConfig, OutputFormat, RunConfig, Settings, WorldConfig};
