//! Shared primitives for all Rust crates in the campus console.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across campus crates.
pub type AppResult<T> = Result<T, AppError>;

/// A validated non-empty UTF-8 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a validated non-empty string.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation(
                "value must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(value))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client-side validation failure, raised before any network call.
    #[error("validation error: {0}")]
    Validation(String),

    /// Server rejected the payload as invalid.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Write operation conflicts with existing state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// User is not authenticated.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// User is authenticated but blocked by authorization policy.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Backend could not be reached at all.
    #[error("unavailable: {0}")]
    Unavailable(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Maps an HTTP status code reported by a REST backend to an error category.
    ///
    /// Status `0` is what browser-style transports report when no response
    /// arrived, so it maps to [`AppError::Unavailable`].
    #[must_use]
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            0 => Self::Unavailable(message),
            400 => Self::BadRequest(message),
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            _ => Self::Internal(message),
        }
    }

    /// Returns the HTTP status a server should answer with for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::Unavailable(_) => 503,
            Self::Internal(_) => 500,
        }
    }

    /// Returns the human-readable detail without the category prefix.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::Validation(message)
            | Self::BadRequest(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::Unauthorized(message)
            | Self::Forbidden(message)
            | Self::Unavailable(message)
            | Self::Internal(message) => message.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppError, NonEmptyString};

    #[test]
    fn non_empty_string_rejects_whitespace() {
        let result = NonEmptyString::new("   ");
        assert!(result.is_err());
    }

    #[test]
    fn status_zero_maps_to_unavailable() {
        assert!(matches!(
            AppError::from_status(0, "no response"),
            AppError::Unavailable(_)
        ));
    }

    #[test]
    fn known_statuses_map_to_matching_categories() {
        assert!(matches!(AppError::from_status(400, ""), AppError::BadRequest(_)));
        assert!(matches!(AppError::from_status(403, ""), AppError::Forbidden(_)));
        assert!(matches!(AppError::from_status(404, ""), AppError::NotFound(_)));
        assert!(matches!(AppError::from_status(409, ""), AppError::Conflict(_)));
        assert!(matches!(AppError::from_status(502, ""), AppError::Internal(_)));
    }

    #[test]
    fn status_code_round_trips_for_server_side_categories() {
        for status in [400_u16, 401, 403, 404, 409] {
            assert_eq!(AppError::from_status(status, "x").status_code(), status);
        }
        assert_eq!(AppError::Validation("x".to_owned()).status_code(), 400);
        assert_eq!(AppError::Unavailable("x".to_owned()).status_code(), 503);
    }

    #[test]
    fn detail_strips_category_prefix() {
        let error = AppError::Conflict("duplicate name".to_owned());
        assert_eq!(error.detail(), "duplicate name");
        assert_eq!(error.to_string(), "conflict: duplicate name");
    }
}
