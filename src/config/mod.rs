//! # Configuration Management Module
//!
//! Victory Road reads an optional TOML file for the traveler name, starting
//! lives, where saves live, logging, and the intro name lookup. Every section
//! has defaults, so a partial (or empty) file is valid.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [game]
//! traveler_name = "Traveler1"
//! initial_lives = 3
//!
//! [storage]
//! data_dir = "./data"
//!
//! [logging]
//! # level = "info"
//! # file = "victory-road.log"
//!
//! [intro]
//! enabled = true
//! api_url = "https://randomuser.me/api/"
//! timeout_seconds = 5
//! fallback_name = "Professor"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use victory_road::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     println!("Traveler: {}", config.game.traveler_name);
//!     Ok(())
//! }
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub intro: IntroConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Key of the saved record; one save per traveler.
    pub traveler_name: String,
    /// Lives for a traveler with no save yet.
    pub initial_lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            traveler_name: "Traveler1".to_string(),
            initial_lives: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Unset means each command picks its own level (`play` stays at warn).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl LoggingConfig {
    /// Parsed `level` if one is set; unknown names fall back to Info.
    pub fn level_filter(&self) -> Option<log::LevelFilter> {
        self.level
            .as_deref()
            .map(|level| level.parse().unwrap_or(log::LevelFilter::Info))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    /// Look up a random narrator name at startup
    pub enabled: bool,
    pub api_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u32,
    /// Used when the lookup is disabled or fails
    pub fallback_name: String,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: "https://randomuser.me/api/".to_string(),
            timeout_seconds: 5,
            fallback_name: "Professor".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        Self::from_toml(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))
    }

    /// Load `path` if it exists, otherwise use defaults.
    pub async fn load_or_default(path: &str) -> Result<Self> {
        if fs::try_exists(path).await.unwrap_or(false) {
            Self::load(path).await
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.game.traveler_name.trim().is_empty() {
            return Err(anyhow!("game.traveler_name must not be empty"));
        }
        if self.storage.data_dir.trim().is_empty() {
            return Err(anyhow!("storage.data_dir must not be empty"));
        }
        if self.intro.timeout_seconds == 0 {
            return Err(anyhow!("intro.timeout_seconds must be at least 1"));
        }
        Ok(())
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.game.traveler_name, "Traveler1");
        assert_eq!(config.game.initial_lives, 3);
        assert_eq!(config.storage.data_dir, "./data");
        assert!(config.intro.enabled);
        assert_eq!(config.logging.level_filter(), None);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r#"
            [game]
            initial_lives = 5

            [intro]
            enabled = false
            "#,
        )
        .unwrap();
        assert_eq!(config.game.initial_lives, 5);
        assert_eq!(config.game.traveler_name, "Traveler1");
        assert!(!config.intro.enabled);
        assert_eq!(config.intro.fallback_name, "Professor");
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(Config::from_toml("[game]\ntraveler_name = \"  \"\n").is_err());
        assert!(Config::from_toml("[intro]\ntimeout_seconds = 0\n").is_err());
        assert!(Config::from_toml("[game]\ninitial_lives = \"three\"\n").is_err());
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let logging = LoggingConfig {
            level: Some("chatty".to_string()),
            file: None,
        };
        assert_eq!(logging.level_filter(), Some(log::LevelFilter::Info));
        let config = Config::from_toml("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level_filter(), Some(log::LevelFilter::Debug));
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let serialized = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(serialized.contains("traveler_name = \"Traveler1\""));
        let parsed = Config::from_toml(&serialized).unwrap();
        assert_eq!(parsed.game.initial_lives, 3);
        assert_eq!(parsed.intro.api_url, "https://randomuser.me/api/");
        assert!(!serialized.contains("level ="));
        assert_eq!(parsed.logging.level, None);
    }

    #[tokio::test]
    async fn create_default_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        let path = path.to_str().unwrap();
        Config::create_default(path).await.unwrap();
        let config = Config::load(path).await.unwrap();
        assert_eq!(config.game.traveler_name, "Traveler1");
        let missing = tmp.path().join("missing.toml");
        let fallback = Config::load_or_default(missing.to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(fallback.storage.data_dir, "./data");
        assert!(Config::load(missing.to_str().unwrap()).await.is_err());
    }
}
