//! Error types for model validation.

use thiserror::Error;

/// Errors raised while validating document-model values.
#[derive(Error, Debug)]
pub enum ModelError {
    /// When an identifier is not an absolute HTTP(S) URI.
    #[error("'{value}' is not a valid resource identifier")]
    InvalidId {
        /// Offending value.
        value: String,
    },
    /// When an identifier must use the HTTPS scheme but does not.
    #[error("'{value}' must use the HTTPS scheme")]
    HttpsRequired {
        /// Offending value.
        value: String,
    },
}
