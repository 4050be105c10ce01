//! Error types for the HTTP layer.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rb_phase::PhaseError;
use rb_ship::ShipError;
use serde_json::json;
use std::path::PathBuf;

pub type ServerResult<T> = Result<T, ServerError>;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Phase(#[from] PhaseError),

    #[error(transparent)]
    Ship(#[from] ShipError),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Phase(_) => StatusCode::BAD_REQUEST,
            ServerError::Ship(ShipError::UnknownSystem { .. }) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "rejected request");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_client_errors() {
        let range = ServerError::from(PhaseError::Range {
            pressure: 0.01,
            min: 0.05,
            max: 10.0,
        });
        assert_eq!(range.status(), StatusCode::BAD_REQUEST);

        let invalid = ServerError::from(PhaseError::InvalidInput {
            message: "pressure must be a number".into(),
        });
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.to_string(), "pressure must be a number");
    }

    #[test]
    fn poisoned_state_is_server_error() {
        let err = ServerError::from(ShipError::StatePoisoned);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
