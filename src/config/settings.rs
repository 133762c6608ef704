//! Configuration settings for the simulation

use crate::game_of_life::world::MAX_PERCENT;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub world: WorldConfig,
    pub run: RunConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub size: usize,
    pub seed: u64,
    pub percent: u32,
    /// Start from this pattern file instead of a random population
    #[serde(default)]
    pub pattern_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// `None` keeps iterating until output fails
    pub iterations: Option<usize>,
    pub delay_ms: u64,
    pub clear_screen: bool,
    pub show_generation: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iterations: Some(10),
            delay_ms: 250,
            clear_screen: true,
            show_generation: true,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world: WorldConfig {
                size: 10,
                seed: 0,
                percent: 25,
                pattern_file: None,
            },
            run: RunConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Text,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.world.size == 0 {
            anyhow::bail!("World size must be positive");
        }

        if self.world.percent > MAX_PERCENT {
            anyhow::bail!(
                "Initial percentage must be within 0..={}, got {}",
                MAX_PERCENT,
                self.world.percent
            );
        }

        if let Some(ref pattern) = self.world.pattern_file {
            if !pattern.exists() {
                anyhow::bail!("Pattern file does not exist: {}", pattern.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(size) = cli_overrides.size {
            self.world.size = size;
        }
        if let Some(seed) = cli_overrides.seed {
            self.world.seed = seed;
        }
        if let Some(percent) = cli_overrides.percent {
            self.world.percent = percent;
        }
        if let Some(ref pattern) = cli_overrides.pattern_file {
            self.world.pattern_file = Some(pattern.clone());
        }
        if cli_overrides.forever {
            self.run.iterations = None;
        } else if let Some(iterations) = cli_overrides.iterations {
            self.run.iterations = Some(iterations);
        }
        if let Some(delay_ms) = cli_overrides.delay_ms {
            self.run.delay_ms = delay_ms;
        }
        if cli_overrides.no_clear {
            self.run.clear_screen = false;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub size: Option<usize>,
    pub seed: Option<u64>,
    pub percent: Option<u32>,
    pub pattern_file: Option<PathBuf>,
    pub iterations: Option<usize>,
    pub forever: bool,
    pub delay_ms: Option<u64>,
    pub no_clear: bool,
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.world.size, 10);
        assert_eq!(settings.run.iterations, Some(10));
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.world.seed = 1234;
        settings.output.format = OutputFormat::Json;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.world.size = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.world.percent = 101;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.world.pattern_file = Some(PathBuf::from("does/not/exist.txt"));
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            size: Some(20),
            percent: Some(60),
            iterations: Some(3),
            no_clear: true,
            ..Default::default()
        });
        assert_eq!(settings.world.size, 20);
        assert_eq!(settings.world.percent, 60);
        assert_eq!(settings.run.iterations, Some(3));
        assert!(!settings.run.clear_screen);

        settings.merge_with_cli(&CliOverrides {
            iterations: Some(5),
            forever: true,
            ..Default::default()
        });
        assert_eq!(settings.run.iterations, None);
    }
}
