//! Hand-written weather routes: `GET`/`PUT /api/v1/weather/:city`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use models::weather::WeatherReading;
use models::weather_v1::{not_found_message, UpdateWeatherRequest, Weather};
use service::errors::StoreError;
use service::weather::WeatherStore;
use tracing::info;

use crate::errors::PlainError;

fn require_city(city: &str) -> Result<(), PlainError> {
    if city.is_empty() {
        return Err(PlainError::new(StatusCode::BAD_REQUEST, "City parameter is required"));
    }
    Ok(())
}

pub async fn get_weather(
    State(store): State<Arc<WeatherStore>>,
    Path(city): Path<String>,
) -> Result<Json<Weather>, PlainError> {
    require_city(&city)?;
    match store.get(&city) {
        Ok(rec) => Ok(Json(Weather::from(&rec))),
        Err(StoreError::NotFound { .. }) => Err(PlainError::new(StatusCode::NOT_FOUND, not_found_message(&city))),
        Err(e) => Err(e.into()),
    }
}

pub async fn update_weather(
    State(store): State<Arc<WeatherStore>>,
    Path(city): Path<String>,
    body: Result<Json<UpdateWeatherRequest>, JsonRejection>,
) -> Result<Json<Weather>, PlainError> {
    // Stored keys must not be blank.
    require_city(city.trim())?;
    let Json(req) = body.map_err(|_| PlainError::new(StatusCode::BAD_REQUEST, "Invalid request body"))?;
    let rec = store.upsert(&city, WeatherReading { temperature: req.temperature })?;
    info!(%city, temperature = req.temperature, "weather updated");
    Ok(Json(Weather::from(&rec)))
}

pub fn router(store: Arc<WeatherStore>) -> Router {
    Router::new()
        .route("/api/v1/weather/:city", get(get_weather).put(update_weather))
        .with_state(store)
}
