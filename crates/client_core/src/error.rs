use thiserror::Error;

pub const NETWORK_FAILURE_MESSAGE: &str =
    "Network error: please check your internet connection and try again.";
pub const FALLBACK_FAILURE_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Why a directory fetch failed. Classification happens once per failure,
/// first match wins: transport, then HTTP status, then everything else
/// (including a body that fails to parse).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Network(#[source] reqwest::Error),
    #[error("HTTP error! status: {status}")]
    Http { status: reqwest::StatusCode },
    #[error("{message}")]
    Unexpected { message: String },
}

impl FetchError {
    pub fn classify(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::Http { status };
        }
        if err.is_decode() {
            return Self::Unexpected {
                message: err.to_string(),
            };
        }
        if err.is_connect() || err.is_timeout() || err.is_request() || err.is_body() {
            return Self::Network(err);
        }
        Self::Unexpected {
            message: err.to_string(),
        }
    }

    /// The human-readable message shown in the error banner. The `Display`
    /// impl keeps the original detail for the diagnostic channel.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => NETWORK_FAILURE_MESSAGE.to_string(),
            Self::Http { status } => {
                format!("Server error: HTTP error! status: {}", status.as_u16())
            }
            Self::Unexpected { message } => {
                if message.trim().is_empty() {
                    FALLBACK_FAILURE_MESSAGE.to_string()
                } else {
                    message.clone()
                }
            }
        }
    }
}
