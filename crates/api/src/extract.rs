//! Custom Axum extractors that reject with [`AppError`] instead of Axum's
//! plain-text rejections, so malformed input still gets a JSON envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use family_budget_core::types::DbId;

use crate::error::AppError;

/// A resource ID taken from the `{id}` path segment.
///
/// Only plain decimal digits that fit in a `u32` are accepted.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub DbId);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::InvalidIdentifier("Missing ID".into()))?;

        parse_id(&raw).map(Self)
    }
}

/// Parse a path ID as an unsigned 32-bit integer.
pub fn parse_id(raw: &str) -> Result<DbId, AppError> {
    let invalid = || AppError::InvalidIdentifier(format!("Invalid ID '{raw}'"));

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse::<u32>().map(DbId::from).map_err(|_| invalid())
}

/// JSON body extractor whose rejection is [`AppError::InvalidPayload`].
#[derive(Debug, Clone)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                AppError::InvalidPayload("Invalid request body".into())
            })?;
        Ok(Self(value))
    }
}
