use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::models::{FeedPayload, FeedQuery};
use crate::response::ApiResponse;
use crate::services::feed::{FeedGenerator, PROVIDER};

const CACHE_SECS: u32 = 30;

/// Hazard event feed.
#[utoipa::path(
    get,
    path = "/disasters",
    tag = "Hazards",
    summary = "Hazard event feed",
    description = "Curated baseline hazard events, optionally augmented with synthetic ones.\n\n\
        A positive `count` adds that many generated events (clamped to 10..1000), placed inside \
        the requested country's regions when it is known and anywhere between 60°S and 60°N \
        otherwise. `country` keeps events whose country contains it (case-insensitive); `types` \
        keeps events of the listed types. Unknown values simply match nothing. This endpoint \
        never rejects a request.",
    params(
        ("country" = Option<String>, Query, description = "Country name or fragment", example = "indonesia"),
        ("types" = Option<String>, Query, description = "Comma-separated: flood, landslide, storm, earthquake, tsunami"),
        ("count" = Option<i64>, Query, description = "Synthetic events to generate (clamped to 10..1000)")
    ),
    responses((status = 200, description = "Filtered events", body = FeedPayload))
)]
pub(crate) async fn get_disasters(
    generator: web::Data<FeedGenerator>,
    query: web::Query<FeedQuery>,
) -> HttpResponse {
    let request = query.to_request();
    let events = generator.feed(&request, Utc::now());

    ApiResponse::cached(
        FeedPayload {
            events,
            provider: PROVIDER.to_string(),
        },
        CACHE_SECS,
    )
}
