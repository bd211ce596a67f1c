use serde::{Deserialize, Serialize};

use super::backend::BackendConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::provider::{ProviderConfig, ProviderKind, DOMAIN_ENV, INITIAL_WEIGHT_ENV};

/// Main configuration structure for zonectl
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Provider selection and record-write policy
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Hosted-zone store
    #[serde(default)]
    pub backend: BackendConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. zonectl.toml in current directory
    /// 3. /etc/zonectl/config.toml
    /// 4. Default configuration
    ///
    /// Environment overrides are applied on top of the file, and CLI
    /// overrides on top of both.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        Self::load_with_env(path, cli_overrides, |key| std::env::var(key).ok())
    }

    pub fn load_with_env<F>(
        path: Option<&str>,
        cli_overrides: CliOverrides,
        env: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("zonectl.toml").exists() {
            Self::from_file("zonectl.toml")?
        } else if std::path::Path::new("/etc/zonectl/config.toml").exists() {
            Self::from_file("/etc/zonectl/config.toml")?
        } else {
            Self::default()
        };

        config.apply_env_overrides(&env);
        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply environment overrides (`ROUTE53_INITIAL_WEIGHT`, `DOMAIN`) and
    /// detect the provider when none is configured.
    pub fn apply_env_overrides<F>(&mut self, env: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(weight) = env(INITIAL_WEIGHT_ENV) {
            self.provider.initial_weight = Some(weight);
        }
        if let Some(domain) = env(DOMAIN_ENV).filter(|d| !d.is_empty()) {
            self.provider.domain = Some(domain);
        }
        if self.provider.kind.is_none() {
            self.provider.kind = ProviderKind::detect(env);
        }
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(zones_file) = overrides.zones_file {
            self.backend.zones_file = zones_file;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend.zones_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "backend.zones_file cannot be empty".to_string(),
            ));
        }

        if self.backend.page_size == 0 {
            return Err(ConfigError::Validation(
                "backend.page_size cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub zones_file: Option<String>,
    pub log_level: Option<String>,
}
