use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::utils::path::resolve_config_path;

use super::cli::CliConfig;
use super::constants::{
    APP_DOT_FOLDER, CONFIG_FILE_NAME, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PROFILE_DELAY_MS,
    DEFAULT_TRADERS_COUNT, DEFAULT_TRADERS_DELAY_MS, DEFAULT_TRADES_COUNT,
    DEFAULT_TRADES_DELAY_MS, MAX_DELAY_MS, MAX_RECORD_COUNT,
};

// =============================================================================
// File Config Structs (JSON deserialization)
// =============================================================================

/// Server configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ServerFileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Artificial latency per endpoint (nested under mock)
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DelayFileConfig {
    pub traders_ms: Option<u64>,
    pub profile_ms: Option<u64>,
    pub trades_ms: Option<u64>,
}

/// Mock data configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct MockFileConfig {
    pub traders_count: Option<usize>,
    pub trades_count: Option<usize>,
    pub seed: Option<u64>,
    pub delay: Option<DelayFileConfig>,
}

/// Filter configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FiltersFileConfig {
    /// Reject non-numeric bounds with 400 instead of matching nothing
    pub strict: Option<bool>,
}

/// File-based configuration (JSON)
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub server: Option<ServerFileConfig>,
    pub mock: Option<MockFileConfig>,
    pub filters: Option<FiltersFileConfig>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl FileConfig {
    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::trace!(config = ?config, "Parsed config file");
        Ok(config)
    }

    /// Warn about unknown fields in the config
    fn warn_unknown_fields(&self) {
        if let serde_json::Value::Object(map) = &self.extra
            && !map.is_empty()
        {
            let keys_str: String = map
                .keys()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(
                fields = %keys_str,
                "Unknown fields in config file (possible typos)"
            );
        }
    }

    /// Merge another FileConfig into this one (other takes precedence)
    fn merge(&mut self, other: FileConfig) {
        if let Some(server) = other.server {
            let current = self.server.get_or_insert_with(ServerFileConfig::default);
            if server.host.is_some() {
                tracing::trace!(host = ?server.host, "Merging server.host");
                current.host = server.host;
            }
            if server.port.is_some() {
                tracing::trace!(port = ?server.port, "Merging server.port");
                current.port = server.port;
            }
        }

        if let Some(mock) = other.mock {
            let current = self.mock.get_or_insert_with(MockFileConfig::default);
            if mock.traders_count.is_some() {
                current.traders_count = mock.traders_count;
            }
            if mock.trades_count.is_some() {
                current.trades_count = mock.trades_count;
            }
            if mock.seed.is_some() {
                tracing::trace!(seed = ?mock.seed, "Merging mock.seed");
                current.seed = mock.seed;
            }
            if let Some(delay) = mock.delay {
                let current_delay = current.delay.get_or_insert_with(DelayFileConfig::default);
                if delay.traders_ms.is_some() {
                    current_delay.traders_ms = delay.traders_ms;
                }
                if delay.profile_ms.is_some() {
                    current_delay.profile_ms = delay.profile_ms;
                }
                if delay.trades_ms.is_some() {
                    current_delay.trades_ms = delay.trades_ms;
                }
            }
        }

        if let Some(filters) = other.filters {
            let current = self.filters.get_or_insert_with(FiltersFileConfig::default);
            if filters.strict.is_some() {
                tracing::trace!(strict = ?filters.strict, "Merging filters.strict");
                current.strict = filters.strict;
            }
        }
    }
}

// =============================================================================
// Runtime Config Structs (final merged configuration)
// =============================================================================

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Artificial latency per endpoint (final/runtime)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayConfig {
    pub traders_ms: u64,
    pub profile_ms: u64,
    pub trades_ms: u64,
}

impl DelayConfig {
    pub const NONE: Self = Self {
        traders_ms: 0,
        profile_ms: 0,
        trades_ms: 0,
    };

    pub fn traders(&self) -> Duration {
        Duration::from_millis(self.traders_ms)
    }

    pub fn profile(&self) -> Duration {
        Duration::from_millis(self.profile_ms)
    }

    pub fn trades(&self) -> Duration {
        Duration::from_millis(self.trades_ms)
    }
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            traders_ms: DEFAULT_TRADERS_DELAY_MS,
            profile_ms: DEFAULT_PROFILE_DELAY_MS,
            trades_ms: DEFAULT_TRADES_DELAY_MS,
        }
    }
}

/// Mock data configuration (final/runtime)
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub traders_count: usize,
    pub trades_count: usize,
    pub seed: Option<u64>,
    pub delay: DelayConfig,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            traders_count: DEFAULT_TRADERS_COUNT,
            trades_count: DEFAULT_TRADES_COUNT,
            seed: None,
            delay: DelayConfig::default(),
        }
    }
}

/// Filter configuration (final/runtime)
#[derive(Debug, Clone, Default)]
pub struct FiltersConfig {
    pub strict: bool,
}

/// Final merged application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub mock: MockConfig,
    pub filters: FiltersConfig,
}

impl AppConfig {
    /// Load configuration from all sources
    ///
    /// Priority (lowest to highest):
    /// 1. Defaults
    /// 2. Profile directory config (~/.traderboard/traderboard.json)
    /// 3. Local directory config OR CLI-specified config path
    /// 4. CLI arguments (which include env var fallbacks via clap)
    pub fn load(cli: &CliConfig) -> Result<Self> {
        tracing::debug!("Loading application configuration");
        tracing::trace!(cli = ?cli, "CLI config");

        let mut file_config = FileConfig::default();
        let mut found_configs: Vec<String> = Vec::new();

        if let Some(profile_path) = get_profile_config_path()
            && profile_path.exists()
        {
            let profile_config = FileConfig::load_from_file(&profile_path)?;
            profile_config.warn_unknown_fields();
            file_config.merge(profile_config);
            found_configs.push(profile_path.display().to_string());
        }

        let overlay_path = if let Some(ref path) = cli.config {
            let resolved = resolve_config_path(&path.to_string_lossy());
            if !resolved.exists() {
                anyhow::bail!("Config file not found: {}", resolved.display());
            }
            Some(resolved)
        } else {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() { Some(local) } else { None }
        };

        if let Some(path) = overlay_path {
            let overlay_config = FileConfig::load_from_file(&path)?;
            overlay_config.warn_unknown_fields();
            file_config.merge(overlay_config);
            found_configs.push(path.display().to_string());
        }

        tracing::debug!(configs = ?found_configs, "Config files loaded");

        let config = Self::layer(file_config, cli);
        config.validate()?;

        tracing::debug!(
            host = %config.server.host,
            port = config.server.port,
            traders = config.mock.traders_count,
            trades = config.mock.trades_count,
            seeded = config.mock.seed.is_some(),
            strict_filters = config.filters.strict,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Layer configs: defaults -> file config -> CLI/env overrides
    fn layer(file_config: FileConfig, cli: &CliConfig) -> Self {
        let file_server = file_config.server.unwrap_or_default();
        let file_mock = file_config.mock.unwrap_or_default();
        let file_delay = file_mock.delay.unwrap_or_default();
        let file_filters = file_config.filters.unwrap_or_default();

        let host = cli
            .host
            .clone()
            .or(file_server.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = cli.port.or(file_server.port).unwrap_or(DEFAULT_PORT);

        // --no-delay wins over any configured latency
        let delay = if cli.no_delay {
            DelayConfig::NONE
        } else {
            let defaults = DelayConfig::default();
            DelayConfig {
                traders_ms: file_delay.traders_ms.unwrap_or(defaults.traders_ms),
                profile_ms: file_delay.profile_ms.unwrap_or(defaults.profile_ms),
                trades_ms: file_delay.trades_ms.unwrap_or(defaults.trades_ms),
            }
        };

        Self {
            server: ServerConfig { host, port },
            mock: MockConfig {
                traders_count: cli
                    .traders_count
                    .or(file_mock.traders_count)
                    .unwrap_or(DEFAULT_TRADERS_COUNT),
                trades_count: cli
                    .trades_count
                    .or(file_mock.trades_count)
                    .unwrap_or(DEFAULT_TRADES_COUNT),
                seed: cli.seed.or(file_mock.seed),
                delay,
            },
            filters: FiltersConfig {
                strict: cli
                    .strict_filters
                    .or(file_filters.strict)
                    .unwrap_or(false),
            },
        }
    }

    /// Validate the configuration for consistency and correctness
    fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            anyhow::bail!("Configuration error: server.host must not be empty");
        }

        // Port 0 would bind a random port the frontend cannot find
        if self.server.port == 0 {
            anyhow::bail!("Configuration error: server.port must be greater than 0");
        }

        for (name, count) in [
            ("mock.traders_count", self.mock.traders_count),
            ("mock.trades_count", self.mock.trades_count),
        ] {
            if count == 0 || count > MAX_RECORD_COUNT {
                anyhow::bail!(
                    "Configuration error: {} must be between 1 and {} (got {})",
                    name,
                    MAX_RECORD_COUNT,
                    count
                );
            }
        }

        let delay = &self.mock.delay;
        for (name, ms) in [
            ("mock.delay.traders_ms", delay.traders_ms),
            ("mock.delay.profile_ms", delay.profile_ms),
            ("mock.delay.trades_ms", delay.trades_ms),
        ] {
            if ms > MAX_DELAY_MS {
                anyhow::bail!(
                    "Configuration error: {} must be at most {} (got {})",
                    name,
                    MAX_DELAY_MS,
                    ms
                );
            }
        }

        Ok(())
    }
}

/// Get the profile config path (~/.traderboard/traderboard.json)
fn get_profile_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(APP_DOT_FOLDER).join(CONFIG_FILE_NAME))
}

/// Check if host binds to all network interfaces
pub(crate) fn is_all_interfaces(host: &str) -> bool {
    matches!(host, "0.0.0.0" | "::" | "[::]")
}
