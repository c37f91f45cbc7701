//! Top-level application router.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use http::header::CONTENT_TYPE;
use http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use super::submission::{health, submission_router, SubmissionAppState, ADMIN_KEY_HEADER};

/// Cross-cutting HTTP settings.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Allowed origins; empty allows any.
    pub cors_origins: Vec<String>,
    pub body_limit_bytes: usize,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            body_limit_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Builds the full application router with tracing, CORS and body limits.
pub fn build_router(state: SubmissionAppState, options: &RouterOptions) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(submission_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.cors_origins))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(options.body_limit_bytes))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(ADMIN_KEY_HEADER)]);

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(parsed))
    }
}
