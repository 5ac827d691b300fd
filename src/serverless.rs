//! Entry point for serverless hosts, which call in per request instead of
//! letting the process bind a socket.

use std::future::Future;

use axum::{extract::Request, response::Response, Router};
use futures_util::future::BoxFuture;
use tokio::sync::OnceCell;
use tower::ServiceExt;

use crate::app::build_app;
use crate::config::AppConfig;

type Initializer = Box<dyn Fn() -> BoxFuture<'static, Router> + Send + Sync>;

/// Lazily built application shared by every invocation.
///
/// Initialisation runs at most once; concurrent cold-start callers all wait
/// on the same attempt.
pub struct ServerlessApp {
    app: OnceCell<Router>,
    init: Initializer,
}

impl ServerlessApp {
    pub fn new(config: AppConfig) -> Self {
        Self::with_initializer(move || {
            let config = config.clone();
            async move { build_app(&config).await }
        })
    }

    pub fn with_initializer<F, Fut>(init: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Router> + Send + 'static,
    {
        Self {
            app: OnceCell::new(),
            init: Box::new(move || -> BoxFuture<'static, Router> { Box::pin(init()) }),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.app.initialized()
    }

    pub async fn ensure_initialized(&self) -> &Router {
        self.app.get_or_init(|| (self.init)()).await
    }

    pub async fn handle(&self, request: Request) -> Response {
        let app = self.ensure_initialized().await.clone();

        match app.oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn counting_app(counter: Arc<AtomicUsize>) -> ServerlessApp {
        ServerlessApp::with_initializer(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(20)).await;
                Router::new().route("/api/ping", get(|| async { "pong" }))
            }
        })
    }

    #[tokio::test]
    async fn test_concurrent_cold_start_initializes_once() {
        let counter = Arc::new(AtomicUsize::new(0));
        let app = Arc::new(counting_app(counter.clone()));

        let calls = (0..16).map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                app.handle(Request::builder().uri("/api/ping").body(Body::empty()).unwrap())
                    .await
                    .status()
            })
        });

        for status in futures_util::future::join_all(calls).await {
            assert_eq!(status.unwrap(), StatusCode::OK);
        }
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_lazy_until_first_call() {
        let counter = Arc::new(AtomicUsize::new(0));
        let app = counting_app(counter.clone());

        assert!(!app.is_initialized());
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        app.ensure_initialized().await;
        app.ensure_initialized().await;

        assert!(app.is_initialized());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
