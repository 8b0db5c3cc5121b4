//! Configuration System
//!
//! Two knobs guard the analyzer against hostile inputs, plus the batch
//! failure policy:
//!
//! ```rust,ignore
//! use codegraph_analysis::config::AnalysisConfig;
//!
//! // Defaults: 10 MiB, 30 s, continue on error
//! let config = AnalysisConfig::default();
//!
//! // Builder overrides
//! let config = AnalysisConfig::default().max_file_size_bytes(1 << 20).parse_timeout_ms(5_000);
//!
//! // Without code changes: YAML file, then environment on top
//! let config = AnalysisConfig::from_yaml("analysis.yaml")?.with_env_overrides()?;
//! ```

pub mod analysis_config;
pub mod error;

// Re-exports
pub use analysis_config::{
    AnalysisConfig, ConfigFileV1, DEFAULT_MAX_FILE_SIZE_BYTES, DEFAULT_PARSE_TIMEOUT_MS,
    ENV_CONTINUE_ON_ERROR, ENV_DEBUG, ENV_MAX_FILE_SIZE, ENV_PARSE_TIMEOUT_MS,
};
pub use error::{ConfigError, ConfigResult};
