//! Configuration management for Chunklist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::chunks::ModelInfo;
use crate::constants::{
    CONFIG_GENERATED, DEFAULT_SERVICE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_ENV, MAX_TIMEOUT_SECS,
    PREVIEW_DEFAULT_CHARS, PREVIEW_MAX_CHARS, PREVIEW_MIN_CHARS,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub service: ServiceConfig,
    pub model: ModelInfo,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Icon theme: "ascii", "unicode" or "emoji"
    pub icon_theme: IconTheme,
    /// Characters of content shown on each chunk card
    pub preview_chars: usize,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the source file name on chunk cards
    pub show_file_names: bool,
    /// Show the question count badge on chunk cards
    pub show_question_counts: bool,
    /// Show a content excerpt on chunk cards
    pub show_content_preview: bool,
}

/// Which backend serves the chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Remote chunk service over HTTP
    #[default]
    Http,
    /// In-process demo store
    Memory,
}

/// Chunk service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub backend: BackendKind,
    /// Base URL of the chunk service, without a trailing `/api`
    pub base_url: String,
    /// Environment variable holding the bearer token (unset = no auth header)
    pub api_token_env: String,
    /// Project opened when none is given on the command line
    pub project_id: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            icon_theme: IconTheme::default(),
            preview_chars: PREVIEW_DEFAULT_CHARS,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_file_names: true,
            show_question_counts: true,
            show_content_preview: true,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Http,
            base_url: DEFAULT_SERVICE_URL.to_string(),
            api_token_env: DEFAULT_TOKEN_ENV.to_string(),
            project_id: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ServiceConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Read the bearer token from the configured environment variable
    #[must_use]
    pub fn api_token(&self) -> Option<String> {
        if self.api_token_env.is_empty() {
            return None;
        }
        std::env::var(&self.api_token_env).ok().filter(|token| !token.is_empty())
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("chunklist.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("chunklist").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.preview_chars < PREVIEW_MIN_CHARS || self.ui.preview_chars > PREVIEW_MAX_CHARS {
            anyhow::bail!(
                "preview_chars must be between {} and {}, got {}",
                PREVIEW_MIN_CHARS,
                PREVIEW_MAX_CHARS,
                self.ui.preview_chars
            );
        }

        if self.service.timeout_secs == 0 || self.service.timeout_secs > MAX_TIMEOUT_SECS {
            anyhow::bail!(
                "timeout_secs must be between 1 and {}, got {}",
                MAX_TIMEOUT_SECS,
                self.service.timeout_secs
            );
        }

        if self.service.backend == BackendKind::Http {
            let url = self.service.base_url.as_str();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                anyhow::bail!("base_url must start with http:// or https://, got '{}'", url);
            }
        }

        if !self.model.provider.is_empty() && !self.model.is_configured() {
            anyhow::bail!("model.name cannot be empty when model.provider is set");
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Chunklist Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("chunklist"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
