//! Validating JSON body extractor

use crate::error::ApiError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use pingpong_core::{parse_body, Schema};

/// Like `axum::Json`, but rejects with a structured 422 payload listing
/// every invalid field. The content type is not checked.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: Schema,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let value = parse_body::<T>(&bytes)?;
        Ok(ValidatedJson(value))
    }
}
