use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing parameters: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Customer already exists")]
    DuplicateCustomer,

    #[error("Customer not found")]
    CustomerNotFound,

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        // Every domain failure surfaces as 400 with a JSON error message;
        // only infrastructure failures map to 500.
        let (status, error_message) = match self {
            AppError::MissingParameter(field) => (
                StatusCode::BAD_REQUEST,
                format!("Missing parameters: {}", field),
            ),
            AppError::InvalidParameter(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::DuplicateCustomer => (
                StatusCode::BAD_REQUEST,
                "Customer already exists".to_string(),
            ),
            AppError::CustomerNotFound => {
                (StatusCode::BAD_REQUEST, "Customer not found".to_string())
            }
            AppError::InsufficientFunds => {
                (StatusCode::BAD_REQUEST, "Insufficient funds".to_string())
            }
            AppError::ConfigError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Configuration error: {}", err),
            ),
            AppError::InternalError(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: error_message,
            }),
        )
            .into_response()
    }
}
