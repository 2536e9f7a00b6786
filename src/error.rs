//! Vedrfolnir error types

/// Vedrfolnir error types
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    // Creation-time errors
    #[error("configuration error: {0}")]
    Configuration(String),

    // Input validation
    #[error("location must not be blank")]
    InvalidLocation,

    // Provider-reported errors
    #[error("location not found: {0}")]
    LocationNotFound(String),

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited by provider")]
    RateLimited,

    #[error("weather service unavailable (HTTP {status})")]
    ServiceUnavailable { status: u16 },

    #[error("unexpected status: HTTP {0}")]
    UnexpectedStatus(u16),

    // Data errors
    #[error("failed to decode weather document: {0}")]
    Decode(#[from] serde_json::Error),

    // Transport errors (connect failure, timeout, broken body)
    #[error("network error: {0}")]
    Network(String),
}

/// Result type alias for vedrfolnir operations
pub type Result<T> = std::result::Result<T, WeatherError>;
