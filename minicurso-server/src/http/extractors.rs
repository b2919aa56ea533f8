//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;

/// Extract an integer record id from the path.
///
/// Any integer is accepted, including ids that do not exist.
pub struct RecordId(pub i32);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::BadRequest {
                field: "id",
                reason: "missing from path",
            })?;

        let id = raw.parse::<i32>().map_err(|_| ApiError::BadRequest {
            field: "id",
            reason: "must be an integer",
        })?;

        Ok(Self(id))
    }
}
