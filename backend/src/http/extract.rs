//! Request extractors.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use rust_decimal::Decimal;

use super::dto::DegreesQuery;
use super::error::AppError;

/// The `degrees` query parameter, parsed as a decimal (zero when absent).
///
/// Rejections are reported as [`AppError`] so malformed input gets the same
/// JSON error body as every other failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Degrees(pub Decimal);

impl<S> FromRequestParts<S> for Degrees
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<DegreesQuery>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        query.degrees().map(Degrees)
    }
}
