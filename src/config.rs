//! Configuration management for the cv matcher

use crate::error::{MatcherError, Result};
use crate::scoring::ExperiencePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub experience_policy: ExperiencePolicy,
    /// Search project text as well as education for qualifications
    pub include_projects: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            experience_policy: ExperiencePolicy::Duration,
            include_projects: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
            pretty_json: true,
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults there on first use
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            MatcherError::Configuration(format!(
                "Failed to parse config {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| MatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("cv-matcher")
            .join("config.toml")
    }

    /// Set a value by dotted key, e.g. `scoring.experience_policy`
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "scoring.experience_policy" => {
                self.scoring.experience_policy = value
                    .parse()
                    .map_err(MatcherError::Configuration)?;
            }
            "scoring.include_projects" => {
                self.scoring.include_projects = parse_bool(key, value)?;
            }
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(MatcherError::Configuration)?;
            }
            "output.detailed" => self.output.detailed = parse_bool(key, value)?,
            "output.color_output" => self.output.color_output = parse_bool(key, value)?,
            "output.pretty_json" => self.output.pretty_json = parse_bool(key, value)?,
            _ => {
                return Err(MatcherError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value.trim().parse::<bool>().map_err(|_| {
        MatcherError::Configuration(format!("{} expects true or false, got {:?}", key, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scoring.experience_policy, ExperiencePolicy::Duration);
        assert!(config.scoring.include_projects);
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.scoring.experience_policy = ExperiencePolicy::ItemCount;
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[scoring]\nexperience_policy = \"item-count\"\ninclude_projects = false\n",
        )
        .unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.scoring.experience_policy, ExperiencePolicy::ItemCount);
        assert!(!loaded.scoring.include_projects);
        assert_eq!(loaded.output, OutputConfig::default());
    }

    #[test]
    fn test_partial_section_fills_missing_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[scoring]\nexperience_policy = \"item-count\"\n\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.scoring.experience_policy, ExperiencePolicy::ItemCount);
        assert!(loaded.scoring.include_projects);
        assert_eq!(loaded.output.format, OutputFormat::Json);
        assert!(loaded.output.pretty_json);
    }

    #[test]
    fn test_invalid_file_is_configuration_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\nexperience_policy = \"vibes\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, MatcherError::Configuration(_)));
    }

    #[test]
    fn test_set_known_keys() {
        let mut config = Config::default();
        config.set("scoring.experience_policy", "item-count").unwrap();
        config.set("scoring.include_projects", "false").unwrap();
        config.set("output.format", "json").unwrap();

        assert_eq!(config.scoring.experience_policy, ExperiencePolicy::ItemCount);
        assert!(!config.scoring.include_projects);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = Config::default();
        assert!(config.set("scoring.weights", "0.5").is_err());
        assert!(config.set("output.detailed", "sometimes").is_err());
        assert!(config.set("output.format", "pdf").is_err());
    }

    #[test]
    fn test_bad_bool_is_configuration_error() {
        let mut config = Config::default();
        let err = config.set("output.detailed", "sometimes").unwrap_err();
        match err {
            MatcherError::Configuration(msg) => assert!(msg.contains("output.detailed")),
            other => panic!("unexpected error: {}", other),
        }
        assert!(config.set("output.detailed", " TRUE ").is_err());
        config.set("output.detailed", " true ").unwrap();
        assert!(config.output.detailed);
    }
}
