use std::process::ExitCode;

use axum::Router;
use common::shutdown::{serve_with_grace, shutdown_signal};
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, ServiceConfig, ServiceKind};
use dotenvy::dotenv;
use service::{sightings, weather};
use tracing::{error, info};
use uuid::Uuid;

use crate::routes;

/// Build the router of one service around a fresh, empty store.
pub fn build_app(kind: ServiceKind, cfg: &ServiceConfig) -> Router {
    let timeout = cfg.request_timeout();
    match kind {
        ServiceKind::Ufo => routes::build_ufo_router(sightings::new_store(), timeout),
        ServiceKind::Weather => routes::build_weather_router(weather::new_store(), timeout),
        ServiceKind::WeatherOpenapi => routes::build_weather_openapi_router(weather::new_store(), timeout),
    }
}

/// Bind, serve until SIGINT/SIGTERM, then drain within the shutdown timeout.
pub async fn run(kind: ServiceKind, cfg: ServiceConfig) -> anyhow::Result<()> {
    let app = build_app(kind, &cfg);
    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(service = kind.name(), %addr, event = "listening", "server listening");
    serve_with_grace(listener, app, cfg.shutdown_timeout(), shutdown_signal()).await
}

/// Process entry for the server binaries.
pub fn launch(kind: ServiceKind) -> ExitCode {
    dotenv().ok();
    init_logging_from_env();

    let service = kind.name();
    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service, event = "panic", %service_id, pid, message = %info, "unhandled panic occurred");
    }));

    let cfg = match AppConfig::load_and_validate() {
        Ok(cfg) => cfg.service(kind).clone(),
        Err(e) => {
            error!(service, event = "config_invalid", error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service,
        event = "start",
        %service_id,
        pid,
        version,
        threads = cfg.worker_threads.unwrap_or_default(),
        "service starting"
    );

    match rt.block_on(run(kind, cfg)) {
        Ok(()) => {
            info!(service, event = "stop", %service_id, pid, "service stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service, event = "run_failed", error = %e, "service exited with error");
            ExitCode::FAILURE
        }
    }
}
