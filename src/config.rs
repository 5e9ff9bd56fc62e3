use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BanterConfig {
    pub chat: ChatConfig,
    pub catalog: CatalogConfig,
    pub embedding: EmbeddingConfig,
    pub transcript: TranscriptConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChatConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to a TOML or JSON catalog file. Empty = builtin catalog.
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub provider: String,
    pub model: String,
    pub cache_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TranscriptConfig {
    pub enabled: bool,
    pub path: String,
}

impl Default for BanterConfig {
    fn default() -> Self {
        Self {
            chat: ChatConfig::default(),
            catalog: CatalogConfig::default(),
            embedding: EmbeddingConfig::default(),
            transcript: TranscriptConfig::default(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { path: String::new() }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        let cache_dir = default_banter_dir()
            .join("models")
            .to_string_lossy()
            .into_owned();
        Self {
            provider: "local".into(),
            model: "all-MiniLM-L6-v2".into(),
            cache_dir,
        }
    }
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        let path = default_banter_dir()
            .join("logs")
            .join("chat.txt")
            .to_string_lossy()
            .into_owned();
        Self {
            enabled: true,
            path,
        }
    }
}

/// Returns `~/.banter/`
pub fn default_banter_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".banter")
}

/// Returns the default config file path: `~/.banter/config.toml`
pub fn default_config_path() -> PathBuf {
    default_banter_dir().join("config.toml")
}

impl BanterConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            BanterConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (BANTER_CATALOG, BANTER_TRANSCRIPT,
    /// BANTER_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("BANTER_CATALOG") {
            self.catalog.path = val;
        }
        if let Ok(val) = std::env::var("BANTER_TRANSCRIPT") {
            self.transcript.path = val;
        }
        if let Ok(val) = std::env::var("BANTER_LOG_LEVEL") {
            self.chat.log_level = val;
        }
    }

    /// Resolve the transcript path, expanding `~` if needed.
    pub fn resolved_transcript_path(&self) -> PathBuf {
        expand_tilde(&self.transcript.path)
    }

    /// Resolve the catalog path if one is configured.
    pub fn resolved_catalog_path(&self) -> Option<PathBuf> {
        if self.catalog.path.is_empty() {
            None
        } else {
            Some(expand_tilde(&self.catalog.path))
        }
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = BanterConfig::default();
        assert_eq!(config.chat.log_level, "info");
        assert_eq!(config.embedding.provider, "local");
        assert!(config.catalog.path.is_empty());
        assert!(config.transcript.enabled);
        assert!(config.transcript.path.ends_with("chat.txt"));
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[chat]
log_level = "debug"

[catalog]
path = "/tmp/intents.toml"

[transcript]
enabled = false
"#;
        let config: BanterConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.chat.log_level, "debug");
        assert_eq!(config.catalog.path, "/tmp/intents.toml");
        assert!(!config.transcript.enabled);
        // defaults still apply for unset fields
        assert_eq!(config.embedding.model, "all-MiniLM-L6-v2");
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = BanterConfig::default();
        std::env::set_var("BANTER_CATALOG", "/tmp/override.toml");
        std::env::set_var("BANTER_TRANSCRIPT", "/tmp/override.txt");
        std::env::set_var("BANTER_LOG_LEVEL", "trace");

        config.apply_env_overrides();

        assert_eq!(config.catalog.path, "/tmp/override.toml");
        assert_eq!(config.transcript.path, "/tmp/override.txt");
        assert_eq!(config.chat.log_level, "trace");

        // Clean up
        std::env::remove_var("BANTER_CATALOG");
        std::env::remove_var("BANTER_TRANSCRIPT");
        std::env::remove_var("BANTER_LOG_LEVEL");
    }

    #[test]
    fn resolved_catalog_path_empty_is_none() {
        let config = BanterConfig::default();
        assert!(config.resolved_catalog_path().is_none());
    }
}
