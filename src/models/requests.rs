use serde::Deserialize;
use std::collections::HashSet;
use validator::Validate;

use crate::errors::AppError;
use crate::models::hazard::{FeedRequest, HazardType};
use crate::models::location::LocationQuery;
use crate::validation::{parse_finite, parse_int_prefix, validate_coordinates};

pub const DEFAULT_HOURS: i64 = 12;

/// Raw `/weather` parameters. Numbers arrive as text so that malformed
/// values degrade to "absent" instead of rejecting the request.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct WeatherQuery {
    #[validate(length(max = 200, message = "q must be at most 200 characters"))]
    pub q: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub hours: Option<String>,
}

impl WeatherQuery {
    /// Coordinates win when both are present (zero included); otherwise a
    /// non-empty name is required.
    pub fn location(&self) -> Result<LocationQuery, AppError> {
        let lat = parse_finite(self.lat.as_deref());
        let lon = parse_finite(self.lon.as_deref());

        if let (Some(latitude), Some(longitude)) = (lat, lon) {
            validate_coordinates(latitude, longitude)?;
            return Ok(LocationQuery::Coordinates { latitude, longitude });
        }

        match self.q.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(LocationQuery::Name(name.to_string())),
            _ => Err(missing_location()),
        }
    }

    /// Requested forecast hours before clamping.
    pub fn hours(&self) -> i64 {
        parse_finite(self.hours.as_deref())
            .map(|h| h.trunc() as i64)
            .unwrap_or(DEFAULT_HOURS)
    }
}

pub(crate) fn missing_location() -> AppError {
    AppError::Validation("Provide either q (city name) or lat & lon.".to_string())
}

/// Raw `/disasters` parameters. Nothing here is ever rejected.
#[derive(Debug, Default, Deserialize)]
pub struct FeedQuery {
    pub country: Option<String>,
    /// Comma-separated hazard types.
    pub types: Option<String>,
    pub count: Option<String>,
}

impl FeedQuery {
    pub fn to_request(&self) -> FeedRequest {
        let country = self
            .country
            .as_deref()
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty());

        let types = self.types.as_deref().and_then(|raw| {
            let lowered = raw.to_lowercase();
            let names: Vec<&str> = lowered
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            if names.is_empty() {
                return None;
            }
            Some(
                names
                    .into_iter()
                    .filter_map(HazardType::parse)
                    .collect::<HashSet<_>>(),
            )
        });

        let count = self.count.as_deref().and_then(parse_int_prefix);

        FeedRequest { country, types, count }
    }
}
