/// Server error types
use crate::api::response::ErrorResponse;
use crate::config::ErrorMode;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::RosterError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{message}")]
    NotFound {
        message: String,
        details: Option<String>,
    },

    #[error("{message}")]
    Internal {
        message: String,
        details: Option<String>,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    pub fn not_found(message: impl Into<String>, details: impl ToString) -> Self {
        ServerError::NotFound {
            message: message.into(),
            details: Some(details.to_string()),
        }
    }

    pub fn internal(message: impl Into<String>, details: impl ToString) -> Self {
        ServerError::Internal {
            message: message.into(),
            details: Some(details.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error, developer_details) = match self {
            ServerError::NotFound { message, details } => {
                tracing::debug!(details = ?details, "{message}");
                (StatusCode::NOT_FOUND, message, details)
            }
            ServerError::Internal { message, details } => {
                tracing::error!(details = ?details, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message, details)
            }
            ServerError::Config(msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error,
            developer_details,
        });

        (status, body).into_response()
    }
}

impl ErrorMode {
    /// Map a failure while decoding a page of users
    ///
    /// Legacy mode reports a decode failure as "No users found" (404) and
    /// terminates on any other query failure.
    pub fn list_failure(self, err: RosterError) -> ServerError {
        match self {
            ErrorMode::Legacy if err.is_decode() => {
                tracing::warn!(error = %err, "failed to scan users row");
                ServerError::not_found("No users found", err)
            }
            ErrorMode::Legacy => terminate("list users", &err),
            ErrorMode::Recover => ServerError::internal("Failed to read users", err),
        }
    }

    /// Map a failure while fetching a single user
    ///
    /// Legacy mode reports every failure as "User not found".
    pub fn get_failure(self, err: RosterError) -> ServerError {
        match self {
            ErrorMode::Legacy => {
                tracing::warn!(error = %err, "failed to fetch user");
                ServerError::not_found("User not found", err)
            }
            ErrorMode::Recover => ServerError::internal("Failed to read user", err),
        }
    }

    /// Map a failure of an insert, update, or delete
    ///
    /// Legacy mode terminates the process.
    pub fn write_failure(self, message: &str, err: RosterError) -> ServerError {
        match self {
            ErrorMode::Legacy => terminate(message, &err),
            ErrorMode::Recover => ServerError::internal(message, err),
        }
    }
}

fn terminate(operation: &str, err: &RosterError) -> ! {
    tracing::error!(error = %err, operation, "storage failure, exiting");
    std::process::exit(1)
}
