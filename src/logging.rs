use axum::{
    extract::{MatchedPath, Request},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{Instrument, error, field, info, info_span, warn};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Response header echoing the id the request was logged under.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Runs the request inside a `request` span.
///
/// The span starts with an empty `username` field that
/// [`authenticate_jwt`](crate::middleware::auth::authenticate_jwt) fills in
/// when the caller presents a valid credential, so every event logged for the
/// request, including the completion line, says who made it.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());
    let request_id = uuid::Uuid::new_v4().to_string();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %path,
        username = field::Empty,
    );

    let mut response = next.run(req).instrument(span.clone()).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;
    span.in_scope(|| match status {
        400..=499 => warn!(status, latency_ms, "Client error"),
        500..=599 => error!(status, latency_ms, "Server error"),
        _ => info!(status, latency_ms, "Request completed"),
    });

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// Console logging for the server and CLI.
///
/// `RUST_LOG` takes precedence; otherwise `LOG_LEVEL` (default `info`) sets
/// the level for Jobly crates with noisy dependencies held at `warn`.
pub fn init_tracing() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "jobly={lvl},jobly_auth={lvl},jobly_db={lvl},tower_http=warn,hyper=warn,sqlx=warn,axum::rejection=trace",
            lvl = log_level
        ))
    });

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer).init();
}
