use crate::shared::error::AppError;
use serde::Deserialize;
use thiserror::Error;

/// Error body PostgREST/GoTrue return alongside non-2xx statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteErrorBody {
    #[serde(default, alias = "msg", alias = "error_description")]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("remote rejected the request ({status}): {message}")]
    Status {
        status: u16,
        message: String,
        code: Option<String>,
    },
    #[error("failed to decode remote payload: {0}")]
    Decode(String),
    #[error("invalid remote url: {0}")]
    InvalidUrl(String),
}

impl RemoteError {
    pub fn from_status(status: u16, body: RemoteErrorBody) -> Self {
        Self::Status {
            status,
            message: body
                .message
                .unwrap_or_else(|| "request failed".to_string()),
            code: body.code,
        }
    }
}

impl From<RemoteError> for AppError {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::Transport(inner) => AppError::Network(inner.to_string()),
            RemoteError::Status {
                status, message, ..
            } => match status {
                401 | 403 => AppError::Unauthorized(message),
                404 | 406 => AppError::NotFound(message),
                400 | 422 => AppError::InvalidInput(message),
                _ => AppError::Database(message),
            },
            RemoteError::Decode(message) => AppError::DeserializationError(message),
            RemoteError::InvalidUrl(message) => AppError::ConfigurationError(message),
        }
    }
}
