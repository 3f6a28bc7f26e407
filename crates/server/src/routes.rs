use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, middleware, routing::get, Json, Router};
use common::types::Health;
use service::{sightings::SightingStore, weather::WeatherStore};

use crate::middleware::{request_logger, with_common_layers};

pub mod ufo_rpc;
pub mod weather;
pub mod weather_openapi;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn metrics() -> (StatusCode, String) {
    common::metrics::encode_metrics()
}

fn ops_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
}

/// UFO sightings RPC service.
pub fn build_ufo_router(store: Arc<SightingStore>, request_timeout: Duration) -> Router {
    with_common_layers(ufo_rpc::router(store).merge(ops_routes()), request_timeout)
}

/// Weather service with hand-written routes.
pub fn build_weather_router(store: Arc<WeatherStore>, request_timeout: Duration) -> Router {
    with_common_layers(weather::router(store).merge(ops_routes()), request_timeout)
}

/// Weather service described by the OpenAPI document at `/openapi.json`.
pub fn build_weather_openapi_router(store: Arc<WeatherStore>, request_timeout: Duration) -> Router {
    let app = weather_openapi::router(store)
        .merge(ops_routes())
        .layer(middleware::from_fn(request_logger));
    with_common_layers(app, request_timeout)
}
