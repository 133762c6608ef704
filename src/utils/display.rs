//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::{World, WorldSnapshot};
use anyhow::Result;

/// ANSI sequence that clears the terminal and homes the cursor
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Format worlds as frames for a terminal or a log of snapshots
pub struct FrameFormatter;

impl FrameFormatter {
    /// Format one frame of the simulation
    pub fn format_frame(world: &World, format: OutputFormat, show_generation: bool) -> Result<String> {
        match format {
            OutputFormat::Text => {
                let mut output = String::new();
                if show_generation {
                    output.push_str(&Self::format_header(world));
                    output.push('\n');
                }
                output.push_str(&world.to_string());
                Ok(output)
            }
            OutputFormat::Json => {
                let mut line = WorldSnapshot::capture(world).to_json()?;
                line.push('\n');
                Ok(line)
            }
        }
    }

    /// Header line naming the generation and its population
    pub fn format_header(world: &World) -> String {
        format!(
            "Generation {} (living: {})",
            world.generation(),
            world.living_count()
        )
    }

    /// Short statistics block for a world
    pub fn format_statistics(world: &World) -> String {
        let mut output = String::new();
        output.push_str(&format!("World Statistics ({}x{}):\n", world.size(), world.size()));
        output.push_str(&format!("  Generation: {}\n", world.generation()));
        output.push_str(&format!("  Living cells: {}\n", world.living_count()));
        output.push_str(&format!("  Density: {:.1}%\n", world.density() * 100.0));
        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
