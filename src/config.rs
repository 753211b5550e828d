use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::{Player, PlayerProfile, Profiles};

/// Characters the board rendering already uses for its frame.
const RESERVED_SYMBOLS: [char; 2] = ['|', '-'];

/// Where a loaded configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Defaults,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub red: PlayerProfile,
    pub yellow: PlayerProfile,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file path. The terminal is the game surface, so logs never go there.
    pub file: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            red: PlayerProfile::default_for(Player::Red),
            yellow: PlayerProfile::default_for(Player::Yellow),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            file: PathBuf::from("connect_four.log"),
            filter: "connect_four=info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist. Logging is usually not set up yet, so the caller reports
    /// the fallback.
    pub fn load_or_default(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if path.exists() {
            Ok((Self::load(path)?, ConfigSource::File))
        } else {
            Ok((Self::default(), ConfigSource::Defaults))
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, profile) in [("red", &self.red), ("yellow", &self.yellow)] {
            if profile.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{key}.name must not be empty"
                )));
            }
            if profile.symbol.is_whitespace() || RESERVED_SYMBOLS.contains(&profile.symbol) {
                return Err(ConfigError::Validation(format!(
                    "{key}.symbol must be visible and not one of {RESERVED_SYMBOLS:?}"
                )));
            }
        }
        if self.red.symbol == self.yellow.symbol {
            return Err(ConfigError::Validation(
                "red.symbol and yellow.symbol must differ".into(),
            ));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    pub fn profiles(&self) -> Profiles {
        Profiles::new(self.red.clone(), self.yellow.clone())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
