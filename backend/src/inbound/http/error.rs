//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while turning every
//! failure into the `{ timeStamp, message, details }` envelope with a
//! matching status code. This is the only place that happens; extractor
//! failures and unmatched routes are routed through it as well.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, Violation, violations_summary};
use crate::middleware::RequestContext;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Description used when no request context is in scope.
const UNKNOWN_REQUEST: &str = "uri=unknown";

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    /// Instant the failure was translated, RFC 3339.
    #[schema(value_type = String, format = DateTime)]
    pub time_stamp: DateTime<Utc>,
    #[schema(example = "id-999")]
    pub message: String,
    /// Request description (`uri=<path>`), or the violation summary for
    /// validation failures.
    #[schema(example = "uri=/users/999")]
    pub details: String,
    /// Individual constraint violations; validation failures only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<Violation>>,
}

impl ErrorEnvelope {
    /// Build the envelope for `error` as observed at `time_stamp`.
    pub fn from_error(error: &Error, time_stamp: DateTime<Utc>) -> Self {
        let (details, violations) = match error.code() {
            ErrorCode::ValidationFailed => {
                let violations = error.violations();
                (violations_summary(violations), Some(violations.to_vec()))
            }
            _ => (
                RequestContext::current_description().unwrap_or_else(|| UNKNOWN_REQUEST.into()),
                None,
            ),
        };
        Self {
            time_stamp,
            message: error.message().to_owned(),
            details,
            violations,
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ValidationFailed | ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let envelope = ErrorEnvelope::from_error(self, Utc::now());
        if self.code() == ErrorCode::InternalError {
            error!(
                message = %envelope.message,
                details = %envelope.details,
                "request failed with internal error"
            );
        }
        HttpResponse::build(self.status_code()).json(envelope)
    }
}

/// `JsonConfig` error handler: malformed bodies become `InvalidRequest`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("malformed request body: {err}")).into()
}

/// `PathConfig` error handler: unparseable path segments become
/// `InvalidRequest`.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("malformed path: {err}")).into()
}

/// Default service for unmatched routes.
pub async fn unmatched_route(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(Error::not_found(format!("no resource at {}", req.path())))
}
