//! Driving loop: iterate a world and write each generation as a frame

use crate::config::{OutputFormat, RunConfig};
use crate::game_of_life::World;
use crate::utils::{FrameFormatter, CLEAR_SCREEN};
use anyhow::{Context, Result};
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info};

/// Outcome of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Generations advanced during the run
    pub generations: u64,
    pub final_living: usize,
}

/// Repeatedly iterates a world and writes frames to an output
pub struct Runner {
    config: RunConfig,
    format: OutputFormat,
}

impl Runner {
    pub fn new(config: RunConfig, format: OutputFormat) -> Self {
        Self { config, format }
    }

    /// Write the current frame, then iterate and write again for each
    /// configured iteration. With no iteration limit this only returns once
    /// writing fails.
    pub fn run<W: Write>(&self, world: &mut World, out: &mut W) -> Result<RunSummary> {
        let start_generation = world.generation();
        info!(
            size = world.size(),
            iterations = ?self.config.iterations,
            delay_ms = self.config.delay_ms,
            "starting run"
        );

        self.write_frame(world, out)?;

        let mut completed = 0usize;
        while self.config.iterations.map_or(true, |limit| completed < limit) {
            self.pause();
            world.iterate();
            completed += 1;
            self.write_frame(world, out)?;
        }

        let summary = RunSummary {
            generations: world.generation() - start_generation,
            final_living: world.living_count(),
        };
        info!(generations = summary.generations, living = summary.final_living, "run finished");
        Ok(summary)
    }

    fn write_frame<W: Write>(&self, world: &World, out: &mut W) -> Result<()> {
        let frame = FrameFormatter::format_frame(world, self.format, self.config.show_generation)?;

        if self.config.clear_screen && self.format == OutputFormat::Text {
            out.write_all(CLEAR_SCREEN.as_bytes())
                .context("Failed to clear screen")?;
        }
        out.write_all(frame.as_bytes())
            .with_context(|| format!("Failed to write generation {}", world.generation()))?;
        out.flush().context("Failed to flush output")?;

        debug!(generation = world.generation(), "wrote frame");
        Ok(())
    }

    fn pause(&self) {
        if self.config.delay_ms > 0 {
            std::thread::sleep(Duration::from_millis(self.config.delay_ms));
        }
    }
}
