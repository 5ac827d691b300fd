use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    http::{header::CONTENT_TYPE, Method, StatusCode},
    middleware::Next,
    response::Response,
};

/// Only requests under this prefix are logged
pub const API_PREFIX: &str = "/api";

pub const MAX_LOG_LINE_CHARS: usize = 80;

/// One line per API request: method, path, status, duration and the JSON
/// body when there is one.
pub async fn log_api_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    if !path.starts_with(API_PREFIX) {
        return response;
    }

    let (response, json_body) = capture_json_body(response).await;

    let line = format_log_line(
        &method,
        &path,
        response.status(),
        start.elapsed().as_millis(),
        json_body.as_deref(),
    );
    tracing::info!(target: "http", "{}", line);

    response
}

/// `{METHOD} {path} {status} in {ms}ms`, then ` :: {json}` when a JSON body
/// was captured, capped at [`MAX_LOG_LINE_CHARS`].
pub fn format_log_line(
    method: &Method,
    path: &str,
    status: StatusCode,
    elapsed_ms: u128,
    json: Option<&str>,
) -> String {
    let mut line = format!("{} {} {} in {}ms", method, path, status.as_u16(), elapsed_ms);
    if let Some(json) = json {
        line.push_str(" :: ");
        line.push_str(json);
    }

    truncate_log_line(line)
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/json"))
        .unwrap_or(false)
}

/// Buffers a JSON body so it can be logged, then puts it back.
async fn capture_json_body(response: Response) -> (Response, Option<String>) {
    if !is_json(&response) {
        return (response, None);
    }

    let (parts, body) = response.into_parts();
    match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            let json = String::from_utf8_lossy(&bytes).into_owned();
            (Response::from_parts(parts, Body::from(bytes)), Some(json))
        }
        Err(e) => {
            tracing::warn!("Failed to buffer response body for logging: {}", e);
            (Response::from_parts(parts, Body::empty()), None)
        }
    }
}

/// Caps a log line at [`MAX_LOG_LINE_CHARS`] characters, ending in `…` when cut.
pub fn truncate_log_line(line: String) -> String {
    if line.chars().count() <= MAX_LOG_LINE_CHARS {
        return line;
    }

    let mut truncated: String = line.chars().take(MAX_LOG_LINE_CHARS - 1).collect();
    truncated.push('…');
    truncated
}
