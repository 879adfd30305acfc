//! HTTP API application wiring (Axum router + shared repository).
//!
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use prodapi_catalog::ProductRepository;

pub mod errors;
pub mod routes;

/// Build the full HTTP router around `repository` (public entrypoint used by `main.rs`).
pub fn build_app(repository: Arc<ProductRepository>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(repository)))
}
