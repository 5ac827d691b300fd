use axum::{extract::Request, middleware::Next, response::Response};

use crate::error::EscalatedError;

/// Logs handler failures once the error response has been produced.
pub async fn report_errors(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    if let Some(error) = response.extensions().get::<EscalatedError>() {
        tracing::error!(
            method = %method,
            path = %path,
            status = error.status.as_u16(),
            "Request failed: {}",
            error.detail
        );
    }

    response
}
