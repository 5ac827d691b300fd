use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;

use crate::models::stock::ErrorResponse;

const DEFAULT_MESSAGE: &str = "Internal Server Error";

/// Error returned by API handlers.
///
/// Renders as `{ "message": ... }` with the error's status and leaves an
/// [`EscalatedError`] on the response so `report_errors` can log it after
/// the client has been answered.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{status}: {message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        ApiError::internal(format!("Database error: {}", err))
    }
}

/// Response extension carrying a handler failure up to `report_errors`
#[derive(Debug, Clone)]
pub struct EscalatedError {
    pub status: StatusCode,
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = if self.message.is_empty() {
            DEFAULT_MESSAGE.to_string()
        } else {
            self.message
        };

        let mut response = (
            self.status,
            Json(ErrorResponse {
                message: message.clone(),
            }),
        )
            .into_response();

        response.extensions_mut().insert(EscalatedError {
            status: self.status,
            detail: message,
        });

        response
    }
}

/// `CatchPanicLayer` handler: the client gets a plain 500, the log gets the panic payload
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    let mut response = ApiError::internal(DEFAULT_MESSAGE).into_response();
    response.extensions_mut().insert(EscalatedError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        detail: format!("handler panicked: {}", detail),
    });

    response
}
