use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

#[derive(Debug)]
pub(crate) enum AppError {
    Validation(String),
    NotFound(String),
    Upstream(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "validation error: {msg}"),
            Self::NotFound(msg) => write!(f, "not found: {msg}"),
            Self::Upstream(msg) => write!(f, "upstream error: {msg}"),
            Self::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Validation(msg) => HttpResponse::BadRequest().json(ErrorBody {
                code: 400,
                error: msg,
                details: None,
            }),
            Self::NotFound(msg) => HttpResponse::NotFound().json(ErrorBody {
                code: 404,
                error: msg,
                details: None,
            }),
            Self::Upstream(msg) => {
                log::error!("Upstream error: {msg}");
                HttpResponse::BadGateway().json(ErrorBody {
                    code: 502,
                    error: msg,
                    details: None,
                })
            }
            Self::Internal(msg) => {
                log::error!("Internal error: {msg}");
                HttpResponse::InternalServerError().json(ErrorBody {
                    code: 500,
                    error: "Unexpected error",
                    details: Some(msg),
                })
            }
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("malformed upstream payload: {err}"))
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: u16,
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
}
