use actix_web::{web, App, HttpServer};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::errors::AppError;
use crate::providers::{ForecastResponse, ForecastSource, GeocodeMatch, Geocoder};

/// Start a throwaway HTTP server on an ephemeral port and return its base URL.
pub(crate) async fn serve(routes: fn(&mut web::ServiceConfig)) -> String {
    let server = HttpServer::new(move || App::new().configure(routes))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}")
}

/// Geocoder answering from a fixed result; `Err(())` simulates an outage.
pub(crate) struct FakeGeocoder {
    pub result: Result<Option<GeocodeMatch>, ()>,
    pub calls: AtomicUsize,
}

impl FakeGeocoder {
    pub fn found(name: &str, country: Option<&str>, latitude: f64, longitude: f64) -> Self {
        Self::with(Ok(Some(GeocodeMatch {
            name: Some(name.to_string()),
            country: country.map(String::from),
            latitude,
            longitude,
            timezone: None,
        })))
    }

    pub fn with(result: Result<Option<GeocodeMatch>, ()>) -> Self {
        Self { result, calls: AtomicUsize::new(0) }
    }
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn search(&self, _name: &str) -> Result<Option<GeocodeMatch>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result
            .clone()
            .map_err(|_| AppError::Upstream("Geocoding failed".to_string()))
    }
}

/// Forecast source that records requested coordinates; `None` simulates an outage.
pub(crate) struct FakeForecast {
    pub response: Option<ForecastResponse>,
    pub requested: Mutex<Vec<(f64, f64)>>,
}

impl FakeForecast {
    pub fn new(response: Option<ForecastResponse>) -> Self {
        Self { response, requested: Mutex::new(Vec::new()) }
    }
}

#[async_trait]
impl ForecastSource for FakeForecast {
    async fn forecast(&self, latitude: f64, longitude: f64) -> Result<ForecastResponse, AppError> {
        self.requested.lock().unwrap().push((latitude, longitude));
        self.response
            .clone()
            .ok_or_else(|| AppError::Upstream("Weather provider error".to_string()))
    }
}
