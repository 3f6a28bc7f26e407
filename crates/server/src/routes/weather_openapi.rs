//! Schema-described weather routes. Each handler is annotated with its
//! OpenAPI operation and returns a typed response enum.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use models::weather::WeatherReading;
use models::weather_v1::{not_found_message, NotFoundError, UpdateWeatherRequest, Weather};
use service::errors::StoreError;
use service::weather::WeatherStore;

use crate::errors::GenericApiError;

/// Outcomes of `getWeatherByCity`.
#[derive(Debug)]
pub enum GetWeatherByCityRes {
    Ok(Weather),
    NotFound(NotFoundError),
}

impl IntoResponse for GetWeatherByCityRes {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(w) => (StatusCode::OK, Json(w)).into_response(),
            Self::NotFound(e) => (StatusCode::NOT_FOUND, Json(e)).into_response(),
        }
    }
}

#[utoipa::path(
    get, path = "/api/v1/weather/{city}", tag = "weather",
    operation_id = "getWeatherByCity",
    params(("city" = String, Path, description = "City name")),
    responses(
        (status = 200, description = "Current weather", body = crate::openapi::WeatherDoc),
        (status = 404, description = "No weather for the city", body = crate::openapi::NotFoundErrorDoc),
        (status = "default", description = "Unexpected error", body = crate::openapi::GenericErrorDoc)
    )
)]
pub async fn get_weather_by_city(
    State(store): State<Arc<WeatherStore>>,
    Path(city): Path<String>,
) -> Result<GetWeatherByCityRes, GenericApiError> {
    match store.get(&city) {
        Ok(rec) => Ok(GetWeatherByCityRes::Ok(Weather::from(&rec))),
        Err(StoreError::NotFound { .. }) => Ok(GetWeatherByCityRes::NotFound(NotFoundError {
            code: StatusCode::NOT_FOUND.as_u16(),
            message: not_found_message(&city),
        })),
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    put, path = "/api/v1/weather/{city}", tag = "weather",
    operation_id = "updateWeatherByCity",
    params(("city" = String, Path, description = "City name")),
    request_body = crate::openapi::UpdateWeatherRequestDoc,
    responses(
        (status = 200, description = "Weather stored", body = crate::openapi::WeatherDoc),
        (status = "default", description = "Unexpected error", body = crate::openapi::GenericErrorDoc)
    )
)]
pub async fn update_weather_by_city(
    State(store): State<Arc<WeatherStore>>,
    Path(city): Path<String>,
    body: Result<Json<UpdateWeatherRequest>, JsonRejection>,
) -> Result<Json<Weather>, GenericApiError> {
    let Json(req) = body?;
    let rec = store.upsert(&city, WeatherReading { temperature: req.temperature })?;
    Ok(Json(Weather::from(&rec)))
}

pub fn router(store: Arc<WeatherStore>) -> Router {
    Router::new()
        .route("/api/v1/weather/:city", get(get_weather_by_city).put(update_weather_by_city))
        .route("/openapi.json", get(crate::openapi::openapi_json))
        .with_state(store)
}
