//! Path and query extractors for API routes

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{FromRequestParts, Path, Query};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::core::constants::MAX_ADDRESS_LENGTH;
use crate::domain::filters::FilterParams;

/// Raw path extractor for trader routes (internal use)
#[derive(Debug, Deserialize)]
struct AddressPathRaw {
    address: String,
}

/// Trader address extractor.
///
/// Any percent-decoded path segment is accepted verbatim; only empty or
/// overlong segments get a 400 Bad Request.
#[derive(Debug)]
pub struct AddressPath {
    pub address: String,
}

/// Length check for an address path segment, counted in characters
pub fn is_valid_address(address: &str) -> bool {
    !address.is_empty() && address.chars().count() <= MAX_ADDRESS_LENGTH
}

impl<S> FromRequestParts<S> for AddressPath
where
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<AddressPathRaw>::from_request_parts(parts, state)
            .await
            .map_err(ValidationRejection::Path)?;

        if !is_valid_address(&raw.address) {
            return Err(ValidationRejection::InvalidAddress);
        }

        Ok(Self {
            address: raw.address,
        })
    }
}

/// Query string kept as ordered key/value pairs for range filtering.
///
/// Repeated keys are preserved so the first occurrence can win.
#[derive(Debug)]
pub struct FilterQuery(pub FilterParams);

impl<S> FromRequestParts<S> for FilterQuery
where
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(ValidationRejection::Query)?;
        Ok(Self(FilterParams::new(pairs)))
    }
}

/// Rejection type for validated extractors
#[derive(Debug)]
pub enum ValidationRejection {
    /// Failed to parse path parameters
    Path(PathRejection),
    /// Empty or overlong address
    InvalidAddress,
    /// Failed to parse query string
    Query(QueryRejection),
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::Path(rejection) => (
                StatusCode::BAD_REQUEST,
                "PATH_PARSE_ERROR",
                rejection.body_text(),
            ),
            Self::InvalidAddress => (
                StatusCode::BAD_REQUEST,
                "INVALID_ADDRESS",
                format!(
                    "Invalid address: must be 1-{} characters",
                    MAX_ADDRESS_LENGTH
                ),
            ),
            Self::Query(rejection) => (
                StatusCode::BAD_REQUEST,
                "QUERY_PARSE_ERROR",
                rejection.body_text(),
            ),
        };
        (
            status,
            Json(serde_json::json!({
                "error": "bad_request",
                "code": code,
                "message": message
            })),
        )
            .into_response()
    }
}
