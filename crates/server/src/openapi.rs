use axum::Json;
use chrono::{DateTime, Utc};
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct WeatherDoc {
    pub city: String,
    pub temperature: f64,
    pub updated_at: DateTime<Utc>,
}

#[derive(ToSchema)]
pub struct UpdateWeatherRequestDoc {
    pub temperature: f64,
}

#[derive(ToSchema)]
pub struct NotFoundErrorDoc {
    pub code: u16,
    pub message: String,
}

#[derive(ToSchema)]
pub struct GenericErrorDoc {
    pub code: Option<u16>,
    pub message: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Weather API", version = "1.0.0"),
    paths(
        crate::routes::weather_openapi::get_weather_by_city,
        crate::routes::weather_openapi::update_weather_by_city,
    ),
    components(
        schemas(
            WeatherDoc,
            UpdateWeatherRequestDoc,
            NotFoundErrorDoc,
            GenericErrorDoc,
        )
    ),
    tags(
        (name = "weather")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
