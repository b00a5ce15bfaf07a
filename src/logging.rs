//! Tracing subscriber setup and request logging.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use axum::http::HeaderValue;
use std::time::Instant;
use tracing::{Instrument, info, info_span};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides the default filter; `LOG_FORMAT=json` switches the
/// console output to one JSON object per line.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // axum logs rejections from built-in extractors with the `axum::rejection`
        // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
        EnvFilter::new(format!(
            "{}=debug,campus_auth=debug,campus_db=debug,campus_core=info,tower_http=debug,axum::rejection=trace",
            env!("CARGO_CRATE_NAME")
        ))
    });

    let json = std::env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    }
}

/// Wraps each request in a span carrying a fresh request id, echoes the id in
/// `x-request-id` and logs completion with status and latency.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());
    let request_id = Uuid::new_v4();

    let span = info_span!("request", %request_id, method = %req.method(), %path);
    let mut response = next.run(req).instrument(span.clone()).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;
    // Failure severity is logged by the error classifier.
    span.in_scope(|| info!(status = status.as_u16(), latency_ms, "Request completed"));

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
