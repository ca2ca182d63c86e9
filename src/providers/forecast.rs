use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{truncate_body, ForecastSource};
use crate::errors::AppError;

const PROVIDER_FAILED: &str = "Weather provider error";

const CURRENT_FIELDS: &str =
    "temperature_2m,apparent_temperature,relative_humidity_2m,wind_speed_10m,weather_code";
const HOURLY_FIELDS: &str = "temperature_2m,weather_code";

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ForecastResponse {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    pub current: Option<ForecastCurrent>,
    pub hourly: Option<ForecastHourly>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ForecastCurrent {
    pub time: Option<String>,
    pub temperature_2m: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub relative_humidity_2m: Option<f64>,
    pub wind_speed_10m: Option<f64>,
    pub weather_code: Option<i64>,
}

/// Parallel arrays indexed by hour. Individual slots may be null.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ForecastHourly {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub weather_code: Vec<Option<i64>>,
}

/// Open-Meteo forecast endpoint; the provider picks the timezone.
pub(crate) struct OpenMeteoForecast {
    http: Client,
    url: String,
}

impl OpenMeteoForecast {
    pub fn new(http: Client, url: impl Into<String>) -> Self {
        Self { http, url: url.into() }
    }
}

#[async_trait]
impl ForecastSource for OpenMeteoForecast {
    async fn forecast(&self, latitude: f64, longitude: f64) -> Result<ForecastResponse, AppError> {
        log::debug!("Fetching forecast for ({latitude:.4}, {longitude:.4})");

        let res = self
            .http
            .get(&self.url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("timezone", "auto".to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
            ])
            .send()
            .await
            .map_err(|err| {
                log::warn!("Forecast request failed: {err}");
                AppError::Upstream(PROVIDER_FAILED.to_string())
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|err| {
            log::warn!("Failed to read forecast response body: {err}");
            AppError::Upstream(PROVIDER_FAILED.to_string())
        })?;

        if !status.is_success() {
            log::warn!(
                "Forecast request failed with status {status}: {}",
                truncate_body(&body)
            );
            return Err(AppError::Upstream(PROVIDER_FAILED.to_string()));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
