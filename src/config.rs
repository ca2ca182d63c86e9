use std::env;
use std::time::Duration;

pub(crate) const API_PREFIX: &str = "/api/v1";

pub(crate) struct Config {
    pub host: String,
    pub port: u16,
    pub geocoding_url: String,
    pub forecast_url: String,
    pub upstream_timeout: Duration,
    /// Fixed seed for the hazard feed generator; each request gets a fresh RNG from it.
    pub feed_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: env::var("API_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            geocoding_url: env::var("GEOCODING_API_URL")
                .unwrap_or_else(|_| "https://geocoding-api.open-meteo.com/v1/search".into()),
            forecast_url: env::var("FORECAST_API_URL")
                .unwrap_or_else(|_| "https://api.open-meteo.com/v1/forecast".into()),
            upstream_timeout: Duration::from_secs(
                env::var("UPSTREAM_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .filter(|&s| s > 0)
                    .unwrap_or(10),
            ),
            feed_seed: env::var("FEED_SEED").ok().and_then(|s| s.trim().parse().ok()),
        }
    }
}
