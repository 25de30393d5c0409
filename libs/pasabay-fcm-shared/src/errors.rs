use thiserror::Error;

/// FCM Client Error Types
///
/// The provider-message variants (`TokenExchange`, `Send`) display the
/// upstream text verbatim so the gateway can relay it to the caller
/// unchanged.
#[derive(Error, Debug)]
pub enum FcmError {
    #[error("Failed to parse private key: {0}")]
    Key(String),

    #[error("Failed to encode JWT: {0}")]
    Jwt(String),

    /// Token endpoint returned an error body
    #[error("{0}")]
    TokenExchange(String),

    /// Send endpoint returned a non-success status
    #[error("{0}")]
    Send(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response from {0}")]
    MalformedResponse(&'static str),
}
