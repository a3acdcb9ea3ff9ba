//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `domohub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Simulation settings.
    pub simulation: SimulationConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Simulation behavior.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for the sensor random sources. Unset means entropy-seeded.
    pub seed: Option<u64>,
    /// Optional file the logging observer appends device events to.
    pub event_log: Option<String>,
}

impl Config {
    /// Load configuration from `domohub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("domohub.toml")?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("DOMOHUB_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("DOMOHUB_SEED") {
            if let Ok(seed) = val.parse() {
                self.simulation.seed = Some(seed);
            }
        }
        if let Ok(val) = std::env::var("DOMOHUB_EVENT_LOG") {
            self.simulation.event_log = Some(val);
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "domohub=info,domohub_sim=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.logging.filter, "domohub=info,domohub_sim=info");
        assert!(config.simulation.seed.is_none());
        assert!(config.simulation.event_log.is_none());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.simulation.seed.is_none());
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [logging]
            filter = 'debug'

            [simulation]
            seed = 42
            event_log = 'events.log'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.simulation.seed, Some(42));
        assert_eq!(config.simulation.event_log.as_deref(), Some("events.log"));
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [simulation]
            seed = 7
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.simulation.seed, Some(7));
        assert_eq!(config.logging.filter, "domohub=info,domohub_sim=info");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert!(config.simulation.seed.is_none());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
