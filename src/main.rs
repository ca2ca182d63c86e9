mod baseline;
mod config;
mod errors;
mod models;
mod providers;
mod regions;
mod response;
mod routes;
mod services;
#[cfg(test)]
mod test_support;
mod validation;
mod weather_codes;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use std::sync::Arc;
use utoipa::openapi::Server;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::API_PREFIX;
use crate::providers::{OpenMeteoForecast, OpenMeteoGeocoder};
use crate::services::{FeedGenerator, WeatherService};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hazard Weather API",
        description = "Weather lookups and hazard event feeds for arbitrary locations worldwide.\n\n\
            Weather data: Open-Meteo geocoding and forecast services. \
            Hazard events: curated samples plus synthetic, region-constrained events.",
        version = "1.0.0"
    ),
    paths(
        routes::health::health,
        routes::weather::get_weather,
        routes::disasters::get_disasters,
    ),
    components(schemas(
        models::HealthPayload,
        models::WeatherSnapshot, models::Coordinates,
        models::CurrentConditions, models::HourlyForecast,
        models::FeedPayload, models::HazardEvent, models::HazardType, models::Severity,
        models::EventLocation, models::Timeframe,
    )),
    tags(
        (name = "System", description = "Health and status"),
        (name = "Weather", description = "Location resolution and forecasts"),
        (name = "Hazards", description = "Hazard event feed"),
    )
)]
struct ApiDoc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();
    let cfg = config::Config::from_env();

    let http = reqwest::Client::builder()
        .timeout(cfg.upstream_timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("failed to build HTTP client");

    let weather = web::Data::new(WeatherService::new(
        Arc::new(OpenMeteoGeocoder::new(http.clone(), cfg.geocoding_url.clone())),
        Arc::new(OpenMeteoForecast::new(http, cfg.forecast_url.clone())),
    ));
    let feed = web::Data::new(FeedGenerator::new(cfg.feed_seed));

    log::info!("Geocoding via {}", cfg.geocoding_url);
    log::info!("Forecasts via {}", cfg.forecast_url);
    if let Some(seed) = cfg.feed_seed {
        log::warn!("Hazard feed seeded with {seed}; synthetic events repeat across requests");
    }

    let bind = format!("{}:{}", cfg.host, cfg.port);
    log::info!("Starting Hazard Weather API on {bind}");
    log::info!("Swagger UI: http://{bind}{API_PREFIX}/docs/");

    let mut openapi = ApiDoc::openapi();
    openapi.servers = Some(vec![Server::new(API_PREFIX)]);

    let openapi_url: &'static str = Box::leak(format!("{API_PREFIX}/openapi.json").into_boxed_str());
    let docs_path: &'static str = Box::leak(format!("{API_PREFIX}/docs/{{_:.*}}").into_boxed_str());
    let health_path = format!("{API_PREFIX}/health");

    HttpServer::new(move || {
        App::new()
            .wrap(
                Logger::new(r#"%a "%r" %s %b %Dms "%{User-Agent}i""#)
                    .exclude(health_path.clone()),
            )
            .wrap(Cors::permissive())
            .app_data(weather.clone())
            .app_data(feed.clone())
            .service(SwaggerUi::new(docs_path).url(openapi_url, openapi.clone()))
            .service(web::scope(API_PREFIX).configure(routes::configure_routes))
    })
    .bind(&bind)?
    .run()
    .await
}
