use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("API error ({status}): {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid response from {endpoint}: {reason}")]
    InvalidResponse { endpoint: String, reason: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl DeskError {
    /// Build an `InvalidResponse` error for the given endpoint.
    pub fn invalid_response(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        DeskError::InvalidResponse {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error came from talking to the backend (as opposed to
    /// local configuration or IO).
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            DeskError::Api { .. } | DeskError::Http(_) | DeskError::InvalidResponse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DeskError>;
