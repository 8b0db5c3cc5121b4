//! Analysis limits and failure policy
//!
//! Precedence: defaults < YAML file < environment < builder calls made after loading.

use super::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 10 MiB
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
/// 30 seconds
pub const DEFAULT_PARSE_TIMEOUT_MS: u64 = 30_000;

const MAX_FILE_SIZE_CEILING: u64 = 1024 * 1024 * 1024;
const PARSE_TIMEOUT_CEILING_MS: u64 = 600_000;
const SUPPORTED_VERSIONS: &[u32] = &[1];

pub const ENV_MAX_FILE_SIZE: &str = "CODEGRAPH_MAX_FILE_SIZE";
pub const ENV_PARSE_TIMEOUT_MS: &str = "CODEGRAPH_PARSE_TIMEOUT_MS";
pub const ENV_CONTINUE_ON_ERROR: &str = "CODEGRAPH_CONTINUE_ON_ERROR";
pub const ENV_DEBUG: &str = "CODEGRAPH_DEBUG";

/// Resource limits and batch policy for the analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Files at or above this size are rejected before reading (1..=1 GiB)
    pub max_file_size_bytes: u64,

    /// Wall-clock budget for building one syntax tree (1..=600000 ms)
    pub parse_timeout_ms: u64,

    /// Default batch policy: keep going after a failed file
    pub continue_on_error: bool,

    /// Capture stack traces on error records
    pub debug: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            parse_timeout_ms: DEFAULT_PARSE_TIMEOUT_MS,
            continue_on_error: true,
            debug: false,
        }
    }
}

/// YAML Schema v1
///
/// Every setting is optional; omitted ones keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_size_bytes: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_timeout_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continue_on_error: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
}

impl AnalysisConfig {
    pub fn max_file_size_bytes(mut self, bytes: u64) -> Self {
        self.max_file_size_bytes = bytes;
        self
    }

    pub fn parse_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.parse_timeout_ms = timeout_ms;
        self
    }

    pub fn continue_on_error(mut self, enabled: bool) -> Self {
        self.continue_on_error = enabled;
        self
    }

    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_file_size_bytes < 1 || self.max_file_size_bytes > MAX_FILE_SIZE_CEILING {
            return Err(ConfigError::range_with_hint(
                "max_file_size_bytes",
                self.max_file_size_bytes,
                1,
                MAX_FILE_SIZE_CEILING,
                "Size limit must admit at least one byte and stay under 1 GiB",
            ));
        }

        if self.parse_timeout_ms < 1 || self.parse_timeout_ms > PARSE_TIMEOUT_CEILING_MS {
            return Err(ConfigError::range_with_hint(
                "parse_timeout_ms",
                self.parse_timeout_ms,
                1,
                PARSE_TIMEOUT_CEILING_MS,
                "Parse budget must be positive and at most 10 minutes",
            ));
        }

        Ok(())
    }

    /// Load from a YAML file (schema v1), validated
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        if !SUPPORTED_VERSIONS.contains(&file.version) {
            return Err(ConfigError::UnsupportedVersion {
                found: file.version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let mut config = Self::default();
        if let Some(bytes) = file.max_file_size_bytes {
            config.max_file_size_bytes = bytes;
        }
        if let Some(timeout_ms) = file.parse_timeout_ms {
            config.parse_timeout_ms = timeout_ms;
        }
        if let Some(enabled) = file.continue_on_error {
            config.continue_on_error = enabled;
        }
        if let Some(enabled) = file.debug {
            config.debug = enabled;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: 1,
            max_file_size_bytes: Some(self.max_file_size_bytes),
            parse_timeout_ms: Some(self.parse_timeout_ms),
            continue_on_error: Some(self.continue_on_error),
            debug: Some(self.debug),
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> ConfigResult<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply `CODEGRAPH_*` environment variables on top of `self`
    pub fn with_env_overrides(self) -> ConfigResult<Self> {
        self.with_overrides_from(|var| std::env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides_from<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_MAX_FILE_SIZE) {
            self.max_file_size_bytes = parse_u64(ENV_MAX_FILE_SIZE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_PARSE_TIMEOUT_MS) {
            self.parse_timeout_ms = parse_u64(ENV_PARSE_TIMEOUT_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_CONTINUE_ON_ERROR) {
            self.continue_on_error = parse_bool(ENV_CONTINUE_ON_ERROR, &raw)?;
        }
        if let Some(raw) = lookup(ENV_DEBUG) {
            self.debug = parse_bool(ENV_DEBUG, &raw)?;
        }

        self.validate()?;
        Ok(self)
    }
}

fn parse_u64(var: &str, raw: &str) -> ConfigResult<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::invalid_env(var, raw, e.to_string()))
}

fn parse_bool(var: &str, raw: &str) -> ConfigResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid_env(var, raw, "expected a boolean")),
    }
}
