//! Distance client error types.

/// Errors from the Routes HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum DistanceError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// The API answered but found no drivable route
    #[error("no route from {from} to {to}")]
    NoRoute { from: String, to: String },

    /// A route came back without a usable distance or duration
    #[error("malformed route: {0}")]
    MalformedRoute(String),

    /// Rate limited by the API
    #[error("rate limited by Routes API")]
    RateLimited,

    /// Invalid API key or unauthorized
    #[error("unauthorized (invalid API key)")]
    Unauthorized,
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_deref()
        .map(|body| format!(" (body: {body})"))
        .unwrap_or_default()
}
