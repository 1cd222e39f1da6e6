use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;
use crate::game::{PlayerColor, Seat};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Default names and the colors each seat is drawn in.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    /// Pre-filled into the name prompt for player 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player1_name: Option<String>,
    /// Pre-filled into the name prompt for player 2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player2_name: Option<String>,
    pub player1_color: PlayerColor,
    pub player2_color: PlayerColor,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            player1_name: None,
            player2_name: None,
            player1_color: PlayerColor::default_for(Seat::One),
            player2_color: PlayerColor::default_for(Seat::Two),
        }
    }
}

impl PlayersConfig {
    pub fn colors(&self) -> [PlayerColor; 2] {
        [self.player1_color, self.player2_color]
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Glyph drawn for an empty cell
    pub empty_glyph: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { empty_glyph: '.' }
    }
}

/// The terminal belongs to the UI, so log output goes to a file.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// `EnvFilter` directive, overridden by `RUST_LOG` when set
    pub level: String,
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            enabled: true,
            level: "info".to_string(),
            file: PathBuf::from("connect_four.log"),
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
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let players = &self.players;
        if players.player1_color == players.player2_color {
            return Err(ConfigError::Validation(
                "players.player1_color and players.player2_color must differ".into(),
            ));
        }
        for (key, name) in [
            ("players.player1_name", &players.player1_name),
            ("players.player2_name", &players.player2_name),
        ] {
            if name.as_deref().is_some_and(|n| n.trim().is_empty()) {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }

        let glyph = self.display.empty_glyph;
        if glyph.is_control() || glyph.is_whitespace() {
            return Err(ConfigError::Validation(
                "display.empty_glyph must be a visible character".into(),
            ));
        }

        if self.logging.enabled {
            if let Err(e) = EnvFilter::try_new(&self.logging.level) {
                return Err(ConfigError::Validation(format!(
                    "logging.level '{}' is not a valid filter: {e}",
                    self.logging.level
                )));
            }
            if self.logging.file.as_os_str().is_empty() {
                return Err(ConfigError::Validation(
                    "logging.file must be set when logging is enabled".into(),
                ));
            }
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
