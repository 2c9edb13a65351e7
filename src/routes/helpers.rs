use std::fmt;

use actix_web::error::{JsonPayloadError, UrlencodedError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use uuid::Uuid;

use crate::utils::error_chain_fmt;

/// Successful response envelope carrying a payload
#[derive(serde::Serialize)]
pub struct ApiData<T> {
    pub success: bool,
    pub data: T,
}

impl<T: serde::Serialize> ApiData<T> {
    pub const fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Failed response envelope
#[derive(serde::Serialize)]
pub struct ApiErrors {
    pub success: bool,
    pub errors: Vec<String>,
}

/// API error type
#[derive(thiserror::Error)]
pub enum ApiError {
    #[error("Subscriber not found")]
    SubscriberNotFound,
    #[error("Route not found")]
    RouteNotFound,
    #[error("Invalid request payload")]
    InvalidPayload(#[source] actix_web::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl fmt::Debug for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::SubscriberNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // The cause of an unexpected error is logged, never returned
        let message = match self {
            Self::UnexpectedError(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ApiErrors {
            success: false,
            errors: vec![message],
        })
    }
}

/// Fallback handler for unmatched routes
pub async fn route_not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::RouteNotFound)
}

/// Turn JSON extraction failures into the API error envelope
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::InvalidPayload(err.into()).into()
}

/// Turn form extraction failures into the API error envelope
pub fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::InvalidPayload(err.into()).into()
}

/// Parse a subscriber id taken from the request path.
///
/// A malformed id can never match a stored record, so it maps to `None`.
pub fn parse_subscriber_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}
