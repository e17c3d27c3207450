//! speakable configuration management.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::segmenter::DEFAULT_MAX_CHUNK_CHARS;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakableConfig {
    /// Maximum chunk length in characters per speech request
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,

    /// Flatten structural markup to prose before chunking
    #[serde(default = "default_flatten_markup")]
    pub flatten_markup: bool,
}

fn default_max_chunk_chars() -> usize {
    DEFAULT_MAX_CHUNK_CHARS
}

fn default_flatten_markup() -> bool {
    true
}

impl Default for SpeakableConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: default_max_chunk_chars(),
            flatten_markup: default_flatten_markup(),
        }
    }
}

impl SpeakableConfig {
    /// Get the config file path: ~/.config/cli-programs/speakable.toml
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("cli-programs")
            .join("speakable.toml"))
    }

    /// Load config from file, returning default if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: SpeakableConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SpeakableConfig::default();
        assert_eq!(config.max_chunk_chars, 4096);
        assert!(config.flatten_markup);
    }

    #[test]
    fn test_config_path() {
        let path = SpeakableConfig::config_path().unwrap();
        assert!(path.ends_with("cli-programs/speakable.toml"));
    }

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
max_chunk_chars = 1024
flatten_markup = false
"#;
        let config: SpeakableConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.max_chunk_chars, 1024);
        assert!(!config.flatten_markup);
    }

    #[test]
    fn test_parse_empty_config() {
        let config: SpeakableConfig = toml::from_str("").unwrap();
        assert_eq!(config.max_chunk_chars, 4096);
        assert!(config.flatten_markup);
    }
}
