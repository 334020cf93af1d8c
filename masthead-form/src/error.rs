//! Error types for masthead-form.

use thiserror::Error;

/// All errors that can arise from form elements.
#[derive(Debug, Error)]
pub enum FormError {
    /// Failure reported by the backing tag store.
    #[error("tag store error: {0}")]
    Store(String),
}
