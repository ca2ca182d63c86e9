use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::HttpResponse;
use serde::Serialize;

pub(crate) struct ApiResponse;

impl ApiResponse {
    pub fn ok<T: Serialize>(payload: T) -> HttpResponse {
        HttpResponse::Ok().json(payload)
    }

    /// Successful response that shared caches may keep for `max_age` seconds.
    pub fn cached<T: Serialize>(payload: T, max_age: u32) -> HttpResponse {
        HttpResponse::Ok()
            .insert_header(CacheControl(vec![
                CacheDirective::Public,
                CacheDirective::MaxAge(max_age),
            ]))
            .json(payload)
    }
}
