//! Main CLI application for the toroidal Game of Life

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use toroidal_life::{
    build_world,
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::create_example_patterns,
    runner::Runner,
    utils::{init_tracing, ColorOutput, FrameFormatter},
};
use tracing::warn;

#[derive(Parser)]
#[command(name = "toroidal_life")]
#[command(about = "Conway's Game of Life on a wraparound grid")]
#[command(version = "0.1.0")]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation, redrawing the world every generation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        #[command(flatten)]
        world: WorldArgs,

        /// Number of iterations (overrides config)
        #[arg(short, long)]
        iterations: Option<usize>,

        /// Keep iterating until interrupted
        #[arg(long, conflicts_with = "iterations")]
        forever: bool,

        /// Delay between frames in milliseconds (overrides config)
        #[arg(short, long)]
        delay: Option<u64>,

        /// Do not clear the screen between frames
        #[arg(long)]
        no_clear: bool,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print a world after a number of generations, without animation
    Render {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        #[command(flatten)]
        world: WorldArgs,

        /// Generations to advance before printing
        #[arg(short, long, default_value_t = 0)]
        generations: usize,

        /// Also print world statistics
        #[arg(long)]
        stats: bool,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

/// World parameters shared by `run` and `render`
#[derive(clap::Args)]
struct WorldArgs {
    /// Grid size N for an N×N world (overrides config)
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// Random generator seed (overrides config)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Initial percentage of living cells, 0-100 (overrides config)
    #[arg(short, long)]
    percent: Option<u32>,

    /// Start from a pattern file instead of a random world
    #[arg(long)]
    pattern: Option<PathBuf>,
}

impl WorldArgs {
    fn overrides(self) -> CliOverrides {
        CliOverrides {
            size: self.size,
            seed: self.seed,
            percent: self.percent,
            pattern_file: self.pattern,
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command {
        Commands::Run {
            config, world, iterations, forever, delay, no_clear, format
        } => {
            let overrides = CliOverrides {
                iterations,
                forever,
                delay_ms: delay,
                no_clear,
                format,
                ..world.overrides()
            };
            run_command(config, overrides)
        }
        Commands::Render { config, world, generations, stats } => {
            render_command(config, world.overrides(), generations, stats)
        }
        Commands::Setup { directory, force } => {
            setup_command(directory, force)
        }
    }
}

fn load_settings(config_path: &Path, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        warn!(path = %config_path.display(), "config file not found, using defaults");
        Settings::default()
    };

    settings.merge_with_cli(overrides);
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn run_command(config_path: PathBuf, overrides: CliOverrides) -> Result<()> {
    let settings = load_settings(&config_path, &overrides)?;
    let mut world = build_world(&settings).context("Failed to build world")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = Runner::new(settings.run.clone(), settings.output.format)
        .run(&mut world, &mut out)
        .context("Simulation stopped")?;

    if settings.output.format == OutputFormat::Text {
        println!("{}", ColorOutput::success(&format!(
            "Finished after {} generation(s), {} living cell(s)",
            summary.generations, summary.final_living
        )));
    }

    Ok(())
}

fn render_command(
    config_path: PathBuf,
    overrides: CliOverrides,
    generations: usize,
    stats: bool,
) -> Result<()> {
    let settings = load_settings(&config_path, &overrides)?;
    let mut world = build_world(&settings).context("Failed to build world")?;

    world.iterate_n(generations);
    print!("{}", world);

    if stats {
        println!();
        print!("{}", FrameFormatter::format_statistics(&world));
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("{}", ColorOutput::warning(&format!(
            "Skipped: {} (already exists)", config_path.display()
        )));
    }

    create_example_patterns(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    let mut glider = Settings::default();
    glider.world.pattern_file = Some(PathBuf::from("patterns/glider.txt"));
    glider.run.iterations = Some(24);
    glider.to_file(config_dir.join("glider.yaml"))?;
    println!("Created: {}", config_dir.join("glider.yaml").display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: toroidal_life run --config config/default.yaml");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "toroidal_life",
            "run",
            "--size", "20",
            "--seed", "7",
            "--percent", "30",
            "--iterations", "5",
        ]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from([
            "toroidal_life",
            "render",
            "--generations", "3",
            "--format", "json",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_forever_conflicts_with_iterations() {
        let cli = Cli::try_parse_from([
            "toroidal_life", "run", "--forever", "--iterations", "3",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("config/glider.yaml").exists());
        assert!(temp_dir.path().join("patterns/glider.txt").exists());
    }

    #[test]
    fn test_load_settings_rejects_bad_overrides() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing.yaml");

        let overrides = CliOverrides {
            percent: Some(150),
            ..Default::default()
        };
        assert!(load_settings(&missing, &overrides).is_err());

        let overrides = CliOverrides {
            size: Some(4),
            ..Default::default()
        };
        assert_eq!(load_settings(&missing, &overrides).unwrap().world.size, 4);
    }
}
