//! Configuration loader
//!
//! Handles loading configuration from various sources including TOML
//! files, environment variables, and default values, merged with Figment.

use std::env;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;

use souq_domain::error::{Error, Result};

use crate::config::types::AppConfig;
use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources
    /// override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix; nested keys use a double
    ///    underscore (e.g., `SOUQ_LOGGING__LEVEL`) so snake_case field
    ///    names survive the split
    pub fn load(&self) -> Result<AppConfig> {
        // Start with default configuration
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        // Add configuration file if specified
        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Add environment variables
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("__"));

        // Extract and deserialize configuration
        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        // Validate configuration
        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Reload configuration (useful for hot-reloading)
    pub fn reload(&self) -> Result<AppConfig> {
        self.load()
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find a default configuration file, if one exists
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];

        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_embedding_config(config)?;
    validate_vector_store_config(config)?;
    validate_search_config(config)?;
    validate_logging_config(config)?;
    Ok(())
}

fn validate_embedding_config(config: &AppConfig) -> Result<()> {
    if config.embedding.provider == "openai"
        && config
            .embedding
            .api_key
            .as_deref()
            .is_none_or(|key| key.trim().is_empty())
    {
        return Err(Error::configuration(
            "OpenAI embedding provider requires an api_key",
        ));
    }
    if config.embedding.timeout_secs == 0 {
        return Err(Error::configuration("Embedding timeout cannot be 0"));
    }
    Ok(())
}

fn validate_vector_store_config(config: &AppConfig) -> Result<()> {
    if config.vector_store.dimensions == 0 {
        return Err(Error::configuration(
            "Vector store dimensions cannot be 0",
        ));
    }
    Ok(())
}

fn validate_search_config(config: &AppConfig) -> Result<()> {
    let search = &config.search;
    for (name, value) in [
        ("search.min_similarity", search.min_similarity),
        ("search.related_min_similarity", search.related_min_similarity),
    ] {
        if !(-1.0..=1.0).contains(&value) {
            return Err(Error::configuration(format!(
                "{} must lie in [-1, 1], got {}",
                name, value
            )));
        }
    }
    if search.overfetch_factor == 0 {
        return Err(Error::configuration("Overfetch factor cannot be 0"));
    }
    if search.embed_timeout_secs == 0 {
        return Err(Error::configuration("Embed timeout cannot be 0"));
    }
    if search.default_limit == 0 {
        return Err(Error::configuration("Default search limit cannot be 0"));
    }
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    Ok(())
}

/// Configuration builder for programmatic configuration
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Set embedding provider configuration
    pub fn with_embedding(mut self, embedding: crate::config::EmbeddingConfig) -> Self {
        self.config.embedding = embedding;
        self
    }

    /// Set vector store configuration
    pub fn with_vector_store(mut self, vector_store: crate::config::VectorStoreConfig) -> Self {
        self.config.vector_store = vector_store;
        self
    }

    /// Set search tuning configuration
    pub fn with_search(mut self, search: crate::config::SearchConfig) -> Self {
        self.config.search = search;
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: crate::config::LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
