use thiserror::Error;

/// Result type for push-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Startup-time errors
///
/// Per-request failures surface as `pasabay_fcm_shared::FcmError` and are
/// collapsed into the response envelope by the handler.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),
}
