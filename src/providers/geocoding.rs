use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{truncate_body, Geocoder};
use crate::errors::AppError;

const GEOCODING_FAILED: &str = "Geocoding failed";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct GeocodeMatch {
    pub name: Option<String>,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodeMatch>>,
}

/// Open-Meteo place search.
pub(crate) struct OpenMeteoGeocoder {
    http: Client,
    url: String,
}

impl OpenMeteoGeocoder {
    pub fn new(http: Client, url: impl Into<String>) -> Self {
        Self { http, url: url.into() }
    }
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    async fn search(&self, name: &str) -> Result<Option<GeocodeMatch>, AppError> {
        log::debug!("Geocoding '{name}'");

        let res = self
            .http
            .get(&self.url)
            .query(&[("name", name), ("count", "1")])
            .send()
            .await
            .map_err(|err| {
                log::warn!("Geocoding request for '{name}' failed: {err}");
                AppError::Upstream(GEOCODING_FAILED.to_string())
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|err| {
            log::warn!("Failed to read geocoding response body: {err}");
            AppError::Upstream(GEOCODING_FAILED.to_string())
        })?;

        if !status.is_success() {
            log::warn!(
                "Geocoding request failed with status {status}: {}",
                truncate_body(&body)
            );
            return Err(AppError::Upstream(GEOCODING_FAILED.to_string()));
        }

        let parsed: GeocodingResponse = serde_json::from_str(&body)?;
        Ok(parsed.results.and_then(|results| results.into_iter().next()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve;
    use actix_web::{web, HttpResponse};
    use serde_json::json;
    use std::collections::HashMap;

    fn geocoding_stub(cfg: &mut web::ServiceConfig) {
        cfg.route(
            "/v1/search",
            web::get().to(|q: web::Query<HashMap<String, String>>| async move {
                let hit = q.get("name").map(String::as_str) == Some("Jakarta")
                    && q.get("count").map(String::as_str) == Some("1");
                if hit {
                    HttpResponse::Ok().json(json!({
                        "results": [{
                            "name": "Jakarta",
                            "country": "Indonesia",
                            "latitude": -6.2088,
                            "longitude": 106.8456,
                            "timezone": "Asia/Jakarta"
                        }]
                    }))
                } else {
                    HttpResponse::Ok().json(json!({ "generationtime_ms": 0.4 }))
                }
            }),
        )
        .route(
            "/broken/search",
            web::get().to(|| async { HttpResponse::ServiceUnavailable().body("down") }),
        )
        .route(
            "/garbled/search",
            web::get().to(|| async { HttpResponse::Ok().body("<html>") }),
        );
    }

    #[actix_web::test]
    async fn returns_first_match() {
        let base = serve(geocoding_stub).await;
        let geocoder = OpenMeteoGeocoder::new(Client::new(), format!("{base}/v1/search"));

        let hit = geocoder.search("Jakarta").await.unwrap().unwrap();
        assert_eq!(hit.name.as_deref(), Some("Jakarta"));
        assert_eq!(hit.country.as_deref(), Some("Indonesia"));
        assert_eq!(hit.latitude, -6.2088);
        assert_eq!(hit.timezone.as_deref(), Some("Asia/Jakarta"));
    }

    #[actix_web::test]
    async fn missing_results_mean_no_match() {
        let base = serve(geocoding_stub).await;
        let geocoder = OpenMeteoGeocoder::new(Client::new(), format!("{base}/v1/search"));

        assert_eq!(geocoder.search("Atlantis").await.unwrap(), None);
    }

    #[actix_web::test]
    async fn non_success_status_is_upstream_failure() {
        let base = serve(geocoding_stub).await;
        let geocoder = OpenMeteoGeocoder::new(Client::new(), format!("{base}/broken/search"));

        let err = geocoder.search("Jakarta").await.unwrap_err();
        assert!(matches!(err, AppError::Upstream(ref msg) if msg == GEOCODING_FAILED));
    }

    #[actix_web::test]
    async fn unreadable_body_is_internal() {
        let base = serve(geocoding_stub).await;
        let geocoder = OpenMeteoGeocoder::new(Client::new(), format!("{base}/garbled/search"));

        assert!(matches!(geocoder.search("Jakarta").await, Err(AppError::Internal(_))));
    }

    #[actix_web::test]
    async fn transport_error_is_upstream_failure() {
        let geocoder = OpenMeteoGeocoder::new(Client::new(), "http://127.0.0.1:1/v1/search");

        assert!(matches!(geocoder.search("Jakarta").await, Err(AppError::Upstream(_))));
    }
}
