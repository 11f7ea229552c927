//! Result and error types for animar.

use thiserror::Error;

/// Result type for animar operations
pub type AnimarResult<T> = Result<T, AnimarError>;

/// Errors that can occur in animar.
///
/// The taxonomy is deliberately narrow: the compositor and compiler are
/// pure transforms whose degenerate inputs are corrected at the boundary
/// (clamping, length-0-as-1 divisors) instead of surfaced as errors.
#[derive(Debug, Error)]
pub enum AnimarError {
    /// Clipboard backend failed to accept the document
    #[error("Clipboard delivery failed: {message}")]
    Clipboard {
        /// Error message from the clipboard backend
        message: String,
    },

    /// Delivery target rejected the document
    #[error("Delivery to {target} failed: {message}")]
    DeliveryFailed {
        /// Name of the delivery target
        target: String,
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
