// ABOUTME: Configuration file loading, validation, and hierarchical merging for bz-replace
// ABOUTME: Supports TOML config files with XDG Base Directory specification compliance

use anyhow::{Context, Result, anyhow};
use bugzilla_sdk::constants::urls;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

use crate::constants::paths;

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub api_key_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from standard XDG-compliant locations
    pub fn load() -> Result<Self> {
        let paths = Self::get_config_paths();
        Self::load_from_paths(&paths)
    }

    /// Load configuration from specific file paths in order of precedence.
    /// Missing files are skipped; later files override earlier ones.
    pub fn load_from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut config = Config::default();

        for path in paths {
            let path = path.as_ref();
            if !path.is_file() {
                continue;
            }
            log::debug!("Loading config from {}", path.display());
            config = config.merge(Self::load_from_file(path)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a single file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse TOML config file: {}",
                path.as_ref().display()
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Standard config file paths, lowest precedence first
    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut config_paths = Vec::new();

        // 1. User config directory fallback
        if let Some(home_dir) = dirs::home_dir() {
            config_paths.push(
                home_dir
                    .join(".config")
                    .join(paths::CONFIG_DIR)
                    .join(paths::CONFIG_FILE),
            );
        }

        // 2. XDG config home
        if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
            config_paths.push(
                PathBuf::from(config_home)
                    .join(paths::CONFIG_DIR)
                    .join(paths::CONFIG_FILE),
            );
        }

        // 3. Project-specific config (highest precedence)
        if let Ok(current_dir) = std::env::current_dir() {
            config_paths.push(current_dir.join(paths::PROJECT_CONFIG_FILE));
        }

        config_paths
    }

    /// Merge this config with another, giving precedence to the other config
    pub fn merge(self, other: Config) -> Config {
        Config {
            api_url: other.api_url.or(self.api_url),
            api_key_file: other.api_key_file.or(self.api_key_file),
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(ref api_url) = self.api_url {
            let url = Url::parse(api_url)
                .with_context(|| format!("Invalid api_url '{}'", api_url))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(anyhow!(
                    "Invalid api_url '{}': scheme must be http or https",
                    api_url
                ));
            }
        }

        Ok(())
    }

    /// Command-line value, then config, then the built-in endpoint
    pub fn resolve_api_url(&self, cli_value: Option<&str>) -> String {
        cli_value
            .map(str::to_string)
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| urls::DEFAULT_API_URL.to_string())
    }

    /// Configured key file with `~/` expanded, or the default under home
    pub fn resolve_api_key_file(&self) -> Result<PathBuf> {
        let home = dirs::home_dir();

        match &self.api_key_file {
            Some(path) => match path.strip_prefix("~") {
                Ok(rest) => home
                    .map(|h| h.join(rest))
                    .ok_or_else(|| anyhow!("Cannot expand '~': no home directory")),
                Err(_) => Ok(path.clone()),
            },
            None => home
                .map(|h| h.join(paths::API_KEY_FILE))
                .ok_or_else(|| anyhow!("Cannot locate the API key file: no home directory")),
        }
    }
}
