//! Configuration loading and typed config structures for EcoArchitect.
//!
//! The configuration lives in `ecoarchitect-config.yaml` next to the
//! binary's working directory. Every section is optional and falls back to
//! the defaults below; a missing file means all defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::command::SessionCommand;
use crate::progress::ReputationRule;

/// Environment variable that replaces `progress.path`.
pub const PROGRESS_PATH_ENV: &str = "ECOARCHITECT_PROGRESS_PATH";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level game configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Which scenario to play and how the countdown is driven.
    #[serde(default)]
    pub session: SessionConfig,

    /// Player progress persistence.
    #[serde(default)]
    pub progress: ProgressConfig,

    /// Reference catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GameConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `ECOARCHITECT_PROGRESS_PATH` overrides `progress.path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.progress.apply_env_overrides();
        Ok(config)
    }

    /// Like [`from_file`](Self::from_file), but a missing file yields the
    /// defaults (with environment overrides applied).
    ///
    /// # Errors
    ///
    /// Same as [`from_file`](Self::from_file) for a file that exists.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            let mut config = Self::default();
            config.progress.apply_env_overrides();
            Ok(config)
        }
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Session settings for the engine binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Scenario started on launch.
    #[serde(default = "default_scenario_id")]
    pub scenario_id: String,

    /// Real-time milliseconds per countdown second.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Milliseconds between live score previews. 0 disables previews.
    #[serde(default = "default_preview_interval_ms")]
    pub preview_interval_ms: u64,

    /// After the plan runs, keep the countdown going until it expires
    /// instead of submitting immediately.
    #[serde(default)]
    pub wait_for_countdown: bool,

    /// Scripted commands applied in order after the scenario starts.
    #[serde(default)]
    pub plan: Vec<SessionCommand>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            scenario_id: default_scenario_id(),
            tick_interval_ms: default_tick_interval_ms(),
            preview_interval_ms: default_preview_interval_ms(),
            wait_for_countdown: false,
            plan: Vec::new(),
        }
    }
}

/// Player progress persistence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProgressConfig {
    /// JSON file holding the player's progress.
    #[serde(default = "default_progress_path")]
    pub path: PathBuf,

    /// Reputation gained the first time a scenario is passed.
    #[serde(default = "default_reputation_increment")]
    pub reputation_increment: u32,

    /// Reputation ceiling.
    #[serde(default = "default_reputation_cap")]
    pub reputation_cap: u32,
}

impl ProgressConfig {
    /// Apply `ECOARCHITECT_PROGRESS_PATH` if set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(PROGRESS_PATH_ENV) {
            self.path = PathBuf::from(val);
        }
    }

    /// The reputation rule these settings describe.
    pub const fn reputation_rule(&self) -> ReputationRule {
        ReputationRule {
            increment: self.reputation_increment,
            cap: self.reputation_cap,
        }
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            path: default_progress_path(),
            reputation_increment: default_reputation_increment(),
            reputation_cap: default_reputation_cap(),
        }
    }
}

/// Reference catalog source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog replacing the built-in one.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_scenario_id() -> String {
    String::from("scenario-1")
}

const fn default_tick_interval_ms() -> u64 {
    1000
}

const fn default_preview_interval_ms() -> u64 {
    2000
}

fn default_progress_path() -> PathBuf {
    PathBuf::from("ecoarchitect-progress.json")
}

const fn default_reputation_increment() -> u32 {
    5
}

const fn default_reputation_cap() -> u32 {
    100
}

fn default_log_level() -> String {
    String::from("info")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ecoarchitect_types::HabitatType;

    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.session.scenario_id, "scenario-1");
        assert_eq!(config.session.tick_interval_ms, 1000);
        assert_eq!(config.session.preview_interval_ms, 2000);
        assert!(!config.session.wait_for_countdown);
        assert_eq!(config.progress.reputation_increment, 5);
        assert_eq!(config.progress.reputation_cap, 100);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn empty_yaml_is_all_defaults() {
        let config: GameConfig = serde_yml::from_str("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn parse_sections() {
        let yaml = r"
session:
  scenario_id: scenario-3
  tick_interval_ms: 50
  preview_interval_ms: 0
  wait_for_countdown: true
  plan:
    - command: place_habitat
      habitat_type: payment
      x: 450
      y: 200
    - command: submit
progress:
  reputation_increment: 10
catalog:
  path: catalog.json
logging:
  level: debug
  format: json
";
        let config: GameConfig = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.session.scenario_id, "scenario-3");
        assert_eq!(config.session.tick_interval_ms, 50);
        assert!(config.session.wait_for_countdown);
        assert_eq!(
            config.session.plan,
            vec![
                SessionCommand::PlaceHabitat {
                    habitat_type: HabitatType::Payment,
                    x: 450,
                    y: 200,
                },
                SessionCommand::Submit,
            ]
        );
        assert_eq!(config.progress.reputation_increment, 10);
        assert_eq!(config.progress.reputation_cap, 100);
        assert_eq!(config.catalog.path, Some(PathBuf::from("catalog.json")));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn missing_file_means_defaults() {
        let path = Path::new("definitely-not-here/ecoarchitect-config.yaml");
        let config = GameConfig::load_or_default(path).unwrap();
        assert_eq!(config.session, SessionConfig::default());
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let err = GameConfig::parse("session: [unterminated").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }
}
