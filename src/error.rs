use std::fmt::{self, Display, Formatter};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::views;

/// Application error types for the portfolio site
#[derive(Debug)]
pub enum AppError {
    /// The project database could not be opened, read or written
    StorageError(String),

    /// Settings file or environment overrides are invalid
    ConfigError(String),

    /// The HTTP listener could not be bound or the server loop failed
    ServerError(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            AppError::StorageError(msg) => {
                write!(f, "Storage failure: {}", msg)
            }
            AppError::ConfigError(msg) => {
                write!(f, "Invalid configuration: {}", msg)
            }
            AppError::ServerError(msg) => {
                write!(f, "Server failure: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Details stay in the log, the visitor only gets a generic page.
        tracing::error!(error = %self, "request failed");

        (StatusCode::INTERNAL_SERVER_ERROR, views::server_error()).into_response()
    }
}
