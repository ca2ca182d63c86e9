pub mod disasters;
pub mod health;
pub mod weather;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health))
        .route("/weather", web::get().to(weather::get_weather))
        .route("/disasters", web::get().to(disasters::get_disasters));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::API_PREFIX;
    use crate::providers::{ForecastResponse, OpenMeteoForecast};
    use crate::services::{FeedGenerator, WeatherService};
    use crate::test_support::{serve, FakeForecast, FakeGeocoder};
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use serde_json::Value;
    use std::sync::Arc;

    fn forecast_payload() -> ForecastResponse {
        serde_json::from_value(serde_json::json!({
            "latitude": -6.25,
            "longitude": 106.875,
            "timezone": "Asia/Jakarta",
            "current": { "time": "2026-10-16T09:00", "temperature_2m": 31.2, "weather_code": 95 },
            "hourly": {
                "time": (0..72).map(|h| format!("t{h}")).collect::<Vec<_>>(),
                "temperature_2m": vec![30.0; 72],
                "weather_code": vec![2; 72]
            }
        }))
        .unwrap()
    }

    async fn call(
        geocoder: FakeGeocoder,
        forecast: FakeForecast,
        uri: &str,
    ) -> actix_web::dev::ServiceResponse {
        let weather = WeatherService::new(Arc::new(geocoder), Arc::new(forecast));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(weather))
                .app_data(web::Data::new(FeedGenerator::new(Some(1))))
                .service(web::scope(API_PREFIX).configure(configure_routes)),
        )
        .await;
        test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await
    }

    async fn call_default(uri: &str) -> actix_web::dev::ServiceResponse {
        call(
            FakeGeocoder::found("Jakarta", Some("Indonesia"), -6.2088, 106.8456),
            FakeForecast::new(Some(forecast_payload())),
            uri,
        )
        .await
    }

    fn cache_control(resp: &actix_web::dev::ServiceResponse) -> Option<String> {
        resp.headers()
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    }

    #[actix_web::test]
    async fn health_is_ok() {
        let resp = call_default("/api/v1/health").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn weather_by_name() {
        let resp = call_default("/api/v1/weather?q=Jakarta&hours=6").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(cache_control(&resp).as_deref(), Some("public, max-age=60"));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["location"], "Jakarta, Indonesia");
        assert_eq!(body["timezone"], "Asia/Jakarta");
        assert_eq!(body["provider"], "open-meteo");
        assert_eq!(body["current"]["description"], "Thunderstorm");
        assert_eq!(body["current"]["icon"], "/icons/storm.svg");
        assert_eq!(body["current"]["gradient"], "storm");
        assert!(body["current"].get("feels_like").is_none());
        assert_eq!(body["hourly"].as_array().unwrap().len(), 6);
        assert_eq!(body["hourly"][0]["description"], "Partly cloudy");
    }

    #[actix_web::test]
    async fn weather_hours_default_and_clamp() {
        let body: Value = test::read_body_json(call_default("/api/v1/weather?q=Jakarta").await).await;
        assert_eq!(body["hourly"].as_array().unwrap().len(), 12);

        let body: Value =
            test::read_body_json(call_default("/api/v1/weather?q=Jakarta&hours=500").await).await;
        assert_eq!(body["hourly"].as_array().unwrap().len(), 48);

        let body: Value =
            test::read_body_json(call_default("/api/v1/weather?q=Jakarta&hours=0").await).await;
        assert_eq!(body["hourly"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn zero_coordinates_skip_geocoding() {
        let forecast = FakeForecast::new(Some(forecast_payload()));
        let resp = call(FakeGeocoder::with(Err(())), forecast, "/api/v1/weather?lat=0&lon=0").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("location").is_none());
    }

    #[actix_web::test]
    async fn weather_without_location_is_bad_request() {
        for uri in ["/api/v1/weather", "/api/v1/weather?q=", "/api/v1/weather?lat=10"] {
            let resp = call_default(uri).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
            assert!(cache_control(&resp).is_none());
        }
    }

    #[actix_web::test]
    async fn weather_unknown_place_is_not_found() {
        let forecast = FakeForecast::new(Some(forecast_payload()));
        let resp = call(FakeGeocoder::with(Ok(None)), forecast, "/api/v1/weather?q=Atlantis").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Location not found");
    }

    #[actix_web::test]
    async fn weather_upstream_failures_are_bad_gateway() {
        let resp = call(
            FakeGeocoder::with(Err(())),
            FakeForecast::new(Some(forecast_payload())),
            "/api/v1/weather?q=Jakarta",
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let resp = call(
            FakeGeocoder::found("Jakarta", None, -6.2, 106.8),
            FakeForecast::new(None),
            "/api/v1/weather?q=Jakarta",
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Weather provider error");
    }

    fn garbled_forecast(cfg: &mut web::ServiceConfig) {
        cfg.route(
            "/v1/forecast",
            web::get().to(|| async {
                actix_web::HttpResponse::Ok()
                    .content_type("application/json")
                    .body(r#"{"latitude": "north", "hourly": ["#)
            }),
        );
    }

    #[actix_web::test]
    async fn weather_unreadable_forecast_is_internal_error() {
        let base = serve(garbled_forecast).await;
        let weather = WeatherService::new(
            Arc::new(FakeGeocoder::found("Jakarta", Some("Indonesia"), -6.2088, 106.8456)),
            Arc::new(OpenMeteoForecast::new(reqwest::Client::new(), format!("{base}/v1/forecast"))),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(weather))
                .app_data(web::Data::new(FeedGenerator::new(Some(1))))
                .service(web::scope(API_PREFIX).configure(configure_routes)),
        )
        .await;
        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/weather?q=Jakarta").to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(cache_control(&resp).is_none());
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 500);
        assert_eq!(body["error"], "Unexpected error");
        assert!(body["details"].as_str().is_some_and(|d| !d.is_empty()));
    }

    #[actix_web::test]
    async fn disasters_baseline() {
        let resp = call_default("/api/v1/disasters").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(cache_control(&resp).as_deref(), Some("public, max-age=30"));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["provider"], "internal-sample");
        assert_eq!(body["events"].as_array().unwrap().len(), 7);
        assert_eq!(body["events"][0]["id"], "ID-JKT-FLD-1");
        assert_eq!(body["events"][0]["type"], "flood");
    }

    #[actix_web::test]
    async fn disasters_filters_and_generation() {
        let body: Value = test::read_body_json(
            call_default("/api/v1/disasters?country=JAPAN&types=earthquake").await,
        )
        .await;
        let events = body["events"].as_array().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["id"], "JP-PAC-EQ-1");

        let body: Value = test::read_body_json(call_default("/api/v1/disasters?count=5").await).await;
        assert_eq!(body["events"].as_array().unwrap().len(), 7 + 10);
    }

    #[actix_web::test]
    async fn disasters_never_reject() {
        for uri in [
            "/api/v1/disasters?types=volcano",
            "/api/v1/disasters?country=atlantis&count=abc",
            "/api/v1/disasters?count=-4&types=,,",
        ] {
            let resp = call_default(uri).await;
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        }

        let body: Value =
            test::read_body_json(call_default("/api/v1/disasters?types=volcano").await).await;
        assert!(body["events"].as_array().unwrap().is_empty());
    }
}
