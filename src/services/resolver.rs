use crate::errors::AppError;
use crate::models::requests::missing_location;
use crate::models::{LocationQuery, ResolvedLocation};
use crate::providers::Geocoder;

/// Turn a location query into coordinates.
///
/// Explicit coordinates are returned as-is without a label or timezone.
/// Names go through a single geocoder lookup; the first match wins.
pub(crate) async fn resolve(
    geocoder: &dyn Geocoder,
    query: &LocationQuery,
) -> Result<ResolvedLocation, AppError> {
    let name = match query {
        LocationQuery::Coordinates { latitude, longitude } => {
            return Ok(ResolvedLocation {
                latitude: *latitude,
                longitude: *longitude,
                label: None,
                timezone: None,
            });
        }
        LocationQuery::Name(name) => name.trim(),
    };

    if name.is_empty() {
        return Err(missing_location());
    }

    let best = geocoder
        .search(name)
        .await?
        .ok_or_else(|| AppError::NotFound("Location not found".to_string()))?;

    Ok(ResolvedLocation {
        latitude: best.latitude,
        longitude: best.longitude,
        label: place_label(best.name.as_deref(), best.country.as_deref()),
        timezone: best.timezone,
    })
}

/// "Place, Country", dropping whichever part is missing.
fn place_label(name: Option<&str>, country: Option<&str>) -> Option<String> {
    let parts: Vec<&str> = [name, country]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}
