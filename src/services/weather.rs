use std::sync::Arc;

use crate::errors::AppError;
use crate::models::{
    Coordinates, CurrentConditions, HourlyForecast, LocationQuery, ResolvedLocation,
    WeatherSnapshot,
};
use crate::providers::forecast::{ForecastCurrent, ForecastHourly};
use crate::providers::{ForecastResponse, ForecastSource, Geocoder};
use crate::services::resolver::resolve;
use crate::weather_codes::{describe, WeatherCategory};

pub const MIN_HOURS: i64 = 1;
pub const MAX_HOURS: i64 = 48;
pub const PROVIDER: &str = "open-meteo";

/// Resolves a location, fetches its forecast and normalizes the result.
///
/// At most two sequential outbound calls per request: the optional geocode
/// and the forecast. Nothing is retried or cached.
pub(crate) struct WeatherService {
    geocoder: Arc<dyn Geocoder>,
    forecast: Arc<dyn ForecastSource>,
}

impl WeatherService {
    pub fn new(geocoder: Arc<dyn Geocoder>, forecast: Arc<dyn ForecastSource>) -> Self {
        Self { geocoder, forecast }
    }

    pub async fn get_weather(
        &self,
        query: &LocationQuery,
        hours: i64,
    ) -> Result<WeatherSnapshot, AppError> {
        let hours = hours.clamp(MIN_HOURS, MAX_HOURS) as usize;
        let location = resolve(self.geocoder.as_ref(), query).await?;
        let data = self
            .forecast
            .forecast(location.latitude, location.longitude)
            .await?;

        Ok(build_snapshot(location, data, hours))
    }
}

fn build_snapshot(location: ResolvedLocation, data: ForecastResponse, hours: usize) -> WeatherSnapshot {
    WeatherSnapshot {
        coordinates: Coordinates {
            latitude: data.latitude.unwrap_or(location.latitude),
            longitude: data.longitude.unwrap_or(location.longitude),
        },
        location: location.label,
        timezone: data.timezone.or(location.timezone),
        current: current_conditions(data.current.unwrap_or_default()),
        hourly: data
            .hourly
            .map(|h| hourly_forecast(h, hours))
            .unwrap_or_default(),
        provider: PROVIDER.to_string(),
    }
}

fn current_conditions(current: ForecastCurrent) -> CurrentConditions {
    let category = WeatherCategory::from_code(current.weather_code);
    CurrentConditions {
        time: current.time,
        temperature: current.temperature_2m,
        feels_like: current.apparent_temperature,
        humidity: current.relative_humidity_2m,
        wind_speed: current.wind_speed_10m,
        code: current.weather_code,
        description: describe(current.weather_code).to_string(),
        icon: category.icon().to_string(),
        gradient: category.gradient().to_string(),
    }
}

/// First `hours` entries, zipped by index over the time axis. Short arrays
/// leave the matching fields absent; no entries are invented.
fn hourly_forecast(hourly: ForecastHourly, hours: usize) -> Vec<HourlyForecast> {
    let ForecastHourly { time, temperature_2m, weather_code } = hourly;
    time.into_iter()
        .take(hours)
        .enumerate()
        .map(|(i, time)| {
            let code = weather_code.get(i).copied().flatten();
            HourlyForecast {
                time,
                temperature: temperature_2m.get(i).copied().flatten(),
                code,
                description: describe(code).to_string(),
                icon: WeatherCategory::from_code(code).icon().to_string(),
            }
        })
        .collect()
}
