use serde::Serialize;
use utoipa::ToSchema;

use crate::models::hazard::HazardEvent;

#[derive(Serialize, ToSchema)]
pub struct HealthPayload {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions. Fields the provider left out stay absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct CurrentConditions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feels_like: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    pub description: String,
    pub icon: String,
    pub gradient: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HourlyForecast {
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WeatherSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub coordinates: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyForecast>,
    pub provider: String,
}

#[derive(Serialize, ToSchema)]
pub struct FeedPayload {
    pub events: Vec<HazardEvent>,
    pub provider: String,
}
