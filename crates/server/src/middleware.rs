use std::time::{Duration, Instant};

use axum::{extract::Request, middleware::Next, response::Response, Router};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

/// Logs the start of every request and its duration once it completes.
pub async fn request_logger(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();
    info!(%method, %path, "request started");

    let res = next.run(req).await;

    info!(
        %method,
        %path,
        status = res.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request finished"
    );
    res
}

/// Tracing, per-request timeout, panic recovery and permissive CORS.
pub fn with_common_layers(router: Router, request_timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                    .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
            )
            .layer(CorsLayer::very_permissive())
            .layer(TimeoutLayer::new(request_timeout))
            .layer(CatchPanicLayer::new()),
    )
}
