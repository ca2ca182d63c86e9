//! Outbound collaborators: a geocoder (name → best match) and a forecast
//! source (coordinates → current + hourly conditions).
//!
//! Both are reached through traits so the weather pipeline can be driven by
//! in-memory fakes in tests.

pub(crate) mod forecast;
pub(crate) mod geocoding;

use async_trait::async_trait;

use crate::errors::AppError;

pub(crate) use forecast::{ForecastResponse, OpenMeteoForecast};
pub(crate) use geocoding::{GeocodeMatch, OpenMeteoGeocoder};

#[async_trait]
pub(crate) trait Geocoder: Send + Sync {
    /// Best match for `name`, or `None` when the service knows no such place.
    async fn search(&self, name: &str) -> Result<Option<GeocodeMatch>, AppError>;
}

#[async_trait]
pub(crate) trait ForecastSource: Send + Sync {
    async fn forecast(&self, latitude: f64, longitude: f64) -> Result<ForecastResponse, AppError>;
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
