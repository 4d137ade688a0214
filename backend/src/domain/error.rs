//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps them onto the
//! `{ timeStamp, message, details }` envelope and a status code in a single
//! place (`inbound::http::error`).

use super::user_validation::Violation;

/// Message carried by every constraint violation failure.
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";

/// Failure category; decides the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The requested resource does not exist.
    NotFound,
    /// A payload parsed but broke one or more declared constraints.
    ValidationFailed,
    /// The request could not be decoded (malformed body or path).
    InvalidRequest,
    /// Any other failure, including storage faults.
    InternalError,
}

/// Domain error payload.
///
/// Only [`Error::validation_failed`] attaches violations.
///
/// # Examples
/// ```
/// use rest_ws::domain::{Error, ErrorCode};
///
/// let err = Error::missing_id(999);
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "id-999");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    code: ErrorCode,
    message: String,
    violations: Vec<Violation>,
}

impl Error {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            violations: Vec::new(),
        }
    }

    /// Failure category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Broken constraints; empty unless the code is
    /// [`ErrorCode::ValidationFailed`].
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Not-found error for a missing entity id, rendered as `id-<id>`.
    pub fn missing_id(id: impl std::fmt::Display) -> Self {
        Self::not_found(format!("id-{id}"))
    }

    /// Constraint failure carrying every violation.
    pub fn validation_failed(violations: Vec<Violation>) -> Self {
        Self {
            violations,
            ..Self::new(ErrorCode::ValidationFailed, VALIDATION_FAILED_MESSAGE)
        }
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}
