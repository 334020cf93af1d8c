//! Error types for masthead-assemble.

use thiserror::Error;

use masthead_core::ConfigError;

/// All errors that can arise from page assembly.
#[derive(Debug, Error)]
pub enum AssembleError {
    /// A configuration or registry lookup failed.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
