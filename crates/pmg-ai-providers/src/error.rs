//! Provider failure taxonomy
//!
//! None of these reach the caller of `ProviderChain::process`; they are
//! logged and the chain moves on to the next provider.

/// Result type alias for provider calls
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Provider is disabled or not configured
    #[error("provider '{0}' is not available")]
    Unavailable(&'static str),

    /// Transport, timeout, or body decoding failure
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with something other than 200
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    /// Endpoint answered without any generated text
    #[error("{0} returned an empty payload")]
    EmptyPayload(String),

    /// No API key configured
    #[error("missing credentials for '{0}'")]
    MissingCredentials(&'static str),

    /// Every endpoint of a multi-endpoint provider failed
    #[error("all {0} endpoints failed")]
    Exhausted(usize),
}

impl ProviderError {
    /// Short label for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "unavailable",
            Self::Http(e) if e.is_timeout() => "timeout",
            Self::Http(_) => "http",
            Self::Status { .. } => "status",
            Self::EmptyPayload(_) => "empty_payload",
            Self::MissingCredentials(_) => "missing_credentials",
            Self::Exhausted(_) => "exhausted",
        }
    }
}

impl From<ProviderError> for pmg_ai_core::Error {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Http(e) if e.is_timeout() => pmg_ai_core::Error::Timeout,
            other => pmg_ai_core::Error::provider(other.to_string()),
        }
    }
}
