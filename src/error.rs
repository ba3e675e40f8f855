use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::server::ErrorResponse;

pub type Result<T> = std::result::Result<T, Error>;

/// Message used when a failure carries no text of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Prompt is required")]
    PromptRequired,

    #[error("AI model is loading, please wait 20 seconds and try again")]
    ModelLoading,

    /// Non-success upstream status; carries the upstream body text.
    #[error("{0}")]
    Upstream(String),

    #[error("Unexpected response format from AI")]
    UnexpectedFormat,

    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::PromptRequired => StatusCode::BAD_REQUEST,
            Self::ModelLoading => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True for failures caused by the caller rather than the relay or upstream.
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Text placed in the `{error}` envelope.
    pub fn client_message(&self) -> String {
        let message = self.to_string();
        if message.is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_client_error() {
            debug!(status = status.as_u16(), "Rejected request: {}", self);
        } else if matches!(self, Self::ModelLoading) {
            warn!("Upstream model is still loading");
        } else {
            error!(status = status.as_u16(), "Relay failed: {:?}", self);
        }

        (
            status,
            Json(ErrorResponse {
                error: self.client_message(),
            }),
        )
            .into_response()
    }
}
