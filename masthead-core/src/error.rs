//! Error types for masthead-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from configuration and registry lookups.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure (unreadable file, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error (write/save path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The module registry has no record at the expected path.
    #[error("module not found at {path}")]
    ModuleNotFound { path: PathBuf },
}
