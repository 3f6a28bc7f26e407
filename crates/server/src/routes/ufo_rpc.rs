//! `ufo.v1.UFOService`: JSON request/response messages posted to
//! `/ufo.v1.UFOService/{Method}`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use models::ufo_v1::{
    CreateRequest, CreateResponse, DeleteRequest, Empty, GetRequest, GetResponse, ServiceDescriptor,
    UpdateRequest, SERVICE_NAME,
};
use service::sightings::SightingStore;
use tracing::{debug, info};

use crate::errors::{RpcCode, RpcStatus};

type RpcResult<T> = Result<Json<T>, RpcStatus>;

pub async fn create(
    State(store): State<Arc<SightingStore>>,
    body: Result<Json<CreateRequest>, JsonRejection>,
) -> RpcResult<CreateResponse> {
    let Json(req) = body?;
    let uuid = store.create(req.info)?;
    info!(rpc = "Create", %uuid, "created sighting");
    Ok(Json(CreateResponse { uuid }))
}

pub async fn get_sighting(
    State(store): State<Arc<SightingStore>>,
    body: Result<Json<GetRequest>, JsonRejection>,
) -> RpcResult<GetResponse> {
    let Json(req) = body?;
    let rec = store.get(&req.uuid)?;
    Ok(Json(GetResponse { sighting: rec.into() }))
}

pub async fn update(
    State(store): State<Arc<SightingStore>>,
    body: Result<Json<UpdateRequest>, JsonRejection>,
) -> RpcResult<Empty> {
    let Json(req) = body?;
    if req.update_info.as_ref().is_some_and(|p| p.is_empty()) {
        debug!(rpc = "Update", uuid = %req.uuid, "empty update_info, only updated_at changes");
    }
    store.update(&req.uuid, req.update_info)?;
    Ok(Json(Empty {}))
}

pub async fn delete(
    State(store): State<Arc<SightingStore>>,
    body: Result<Json<DeleteRequest>, JsonRejection>,
) -> RpcResult<Empty> {
    let Json(req) = body?;
    store.delete(&req.uuid)?;
    Ok(Json(Empty {}))
}

pub async fn unimplemented(Path(method): Path<String>) -> RpcStatus {
    RpcStatus::new(RpcCode::Unimplemented, format!("method {SERVICE_NAME}/{method} is not implemented"))
}

/// Lists the service and its methods, so clients can discover what is callable.
pub async fn describe() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor::ufo())
}

pub fn router(store: Arc<SightingStore>) -> Router {
    Router::new()
        .route("/ufo.v1.UFOService", get(describe))
        .route("/ufo.v1.UFOService/Create", post(create))
        .route("/ufo.v1.UFOService/Get", post(get_sighting))
        .route("/ufo.v1.UFOService/Update", post(update))
        .route("/ufo.v1.UFOService/Delete", post(delete))
        .route("/ufo.v1.UFOService/:method", post(unimplemented))
        .with_state(store)
}
