use actix_web::{web, HttpResponse, Result as ActixResult};
use validator::Validate;

use crate::errors::AppError;
use crate::models::{WeatherQuery, WeatherSnapshot};
use crate::response::ApiResponse;
use crate::services::WeatherService;

const CACHE_SECS: u32 = 60;

/// Current conditions and hourly forecast for a place name or coordinate.
#[utoipa::path(
    get,
    path = "/weather",
    tag = "Weather",
    summary = "Weather for a location",
    description = "Resolve a location and return current conditions plus an hourly forecast.\n\n\
        Pass either `q` (a place name, geocoded to the single best match) or both `lat` and `lon`. \
        When both coordinates are present they win and no geocoding happens; `0` is a valid \
        coordinate.\n\n\
        `hours` defaults to 12 and is clamped to 1..48. Fewer entries are returned when the \
        provider has less data; entries are never invented.",
    params(
        ("q" = Option<String>, Query, description = "Place name", example = "Jakarta"),
        ("lat" = Option<f64>, Query, description = "Latitude in decimal degrees", minimum = -90, maximum = 90),
        ("lon" = Option<f64>, Query, description = "Longitude in decimal degrees", minimum = -180, maximum = 180),
        ("hours" = Option<i64>, Query, description = "Hourly entries to return (default: 12, clamped to 1..48)")
    ),
    responses(
        (status = 200, description = "Weather snapshot", body = WeatherSnapshot),
        (status = 400, description = "Neither q nor both coordinates given"),
        (status = 404, description = "Place name not found"),
        (status = 502, description = "Geocoding or forecast provider failed"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub(crate) async fn get_weather(
    service: web::Data<WeatherService>,
    query: web::Query<WeatherQuery>,
) -> ActixResult<HttpResponse> {
    query.validate().map_err(|e| {
        AppError::Validation(format!("Validation failed: {e}"))
    })?;

    let location = query.location()?;
    let snapshot = service.get_weather(&location, query.hours()).await?;

    Ok(ApiResponse::cached(snapshot, CACHE_SECS))
}
