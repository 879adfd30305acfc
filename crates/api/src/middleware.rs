//! Request validation for the product write paths.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::Response,
};

use prodapi_catalog::Product;
use prodapi_core::DomainError;

use crate::app::errors;

/// A product decoded from the request body that passed every field rule.
///
/// Handlers take this as an argument; when decoding or validation fails the
/// request is answered with 400 and the handler never runs. The body is read
/// as raw bytes, so the `Content-Type` header is not consulted.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProduct(pub Product);

#[axum::async_trait]
impl<S> FromRequest<S> for ValidatedProduct
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::warn!(error = %e.body_text(), "failed to read product body");
            errors::domain_error_to_response(DomainError::decode(e.body_text()))
        })?;

        let product = decode_and_validate(&body).map_err(|e| {
            tracing::warn!(error = %e, "rejected product payload");
            errors::domain_error_to_response(e)
        })?;

        Ok(Self(product))
    }
}

fn decode_and_validate(body: &[u8]) -> Result<Product, DomainError> {
    let product = Product::from_json(body)?;
    product.validate()?;
    Ok(product)
}
