//! Pattern files and JSON snapshots for worlds

use super::cell::{Cell, State};
use super::World;
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Load a world from a pattern file.
/// Format: each line is a row, with 'X' for alive cells and '.' for dead cells.
pub fn load_world_from_file<P: AsRef<Path>>(path: P, seed: u64) -> Result<World> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_world(&content, StdRng::seed_from_u64(seed))
        .with_context(|| format!("Failed to parse pattern file: {}", path.as_ref().display()))
}

/// Parse a world from its pattern text, wrapping the given generator
pub fn parse_world(content: &str, rng: StdRng) -> Result<World> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Pattern is empty or contains no valid rows");
    }

    let mut rows = Vec::with_capacity(lines.len());
    for (x, line) in lines.iter().enumerate() {
        let row = line
            .chars()
            .enumerate()
            .map(|(y, ch)| {
                State::from_rep(ch).map(Cell::new).with_context(|| {
                    format!(
                        "Invalid character '{}' at position ({}, {}). Only '.' and 'X' are allowed",
                        ch, x, y
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }

    Ok(World::from_cells(rows, rng)?)
}

/// Render the rows of a world without the index header
pub fn world_to_pattern(world: &World) -> String {
    let mut result = String::with_capacity(world.size() * (world.size() + 1));
    for row in world.rows() {
        result.extend(row.iter().map(Cell::state_rep));
        result.push('\n');
    }
    result
}

/// Write the bundled example patterns into `output_dir`
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for (name, content) in EXAMPLE_PATTERNS {
        let file = format!("{}.txt", name);
        std::fs::write(dir.join(&file), content)
            .with_context(|| format!("Failed to write {}", file))?;
    }

    Ok(())
}

/// Bundled patterns, each on a torus large enough to evolve freely
pub const EXAMPLE_PATTERNS: [(&str, &str); 4] = [
    ("blinker", ".....\n.....\n.XXX.\n.....\n.....\n"),
    ("block", "....\n.XX.\n.XX.\n....\n"),
    ("glider", "..X...\nX.X...\n.XX...\n......\n......\n......\n"),
    ("beacon", "......\n.XX...\n.XX...\n...XX.\n...XX.\n......\n"),
];

/// Serializable view of a world at one generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub size: usize,
    pub generation: u64,
    pub living: usize,
    pub rows: Vec<String>,
}

impl WorldSnapshot {
    pub fn capture(world: &World) -> Self {
        Self {
            size: world.size(),
            generation: world.generation(),
            living: world.living_count(),
            rows: world
                .rows()
                .map(|row| row.iter().map(Cell::state_rep).collect())
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
