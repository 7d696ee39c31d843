//! Error types for HPP signing and verification.

use thiserror::Error;

/// Result type alias for HPP operations.
pub type Result<T> = std::result::Result<T, HppError>;

/// Errors that can occur while preparing, signing, or verifying HPP data.
///
/// All variants indicate caller misuse (bad configuration or bad input) and
/// are returned synchronously at the point of detection; nothing is retried
/// or recovered internally. A signature that fails verification is NOT an
/// error: [`PaymentResult::is_valid`](crate::PaymentResult::is_valid)
/// returns `Ok(false)` for that case.
#[derive(Debug, Error)]
pub enum HppError {
    /// A required configuration value is absent or empty.
    #[error("Missing configuration value: {0}")]
    MissingConfiguration(&'static str),

    /// Required fields are absent from the data mapping.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// The payment amount does not normalize to a non-zero integral
    /// minor-unit value.
    #[error("Invalid payment amount: {0:?}")]
    InvalidAmount(String),

    /// The configured signing method is not recognized.
    #[error("Unsupported signing method: {0:?}")]
    UnsupportedMethod(String),

    /// The merchant secret is not valid hex. SHA256 secrets are hex-encoded
    /// and decoded into the raw HMAC key before signing.
    #[error("Merchant secret is not valid hex: {0}")]
    InvalidSecret(#[from] hex::FromHexError),
}
