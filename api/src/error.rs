use thiserror::Error;

/// Failures surfaced by a visualization request.
///
/// `Status`, `Http`, `Decode` and `Unavailable` are transport failures;
/// `Backend` is the service reporting `success: false`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{}", .0.as_deref().unwrap_or("Unknown error from backend."))]
    Backend(Option<String>),

    /// The HTTP client could not be built, so no request was sent.
    #[error("Client unavailable: {0}")]
    Unavailable(String),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}
