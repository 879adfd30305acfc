use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use prodapi_catalog::ProductRepository;
use prodapi_core::ProductId;

use crate::app::errors;
use crate::middleware::ValidatedProduct;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", put(update_product))
}

pub async fn list_products(
    Extension(repository): Extension<Arc<ProductRepository>>,
) -> axum::response::Response {
    tracing::info!("handle GET products");

    (StatusCode::OK, Json(repository.list())).into_response()
}

pub async fn create_product(
    Extension(repository): Extension<Arc<ProductRepository>>,
    ValidatedProduct(product): ValidatedProduct,
) -> axum::response::Response {
    tracing::info!(name = %product.name, "handle POST product");

    match repository.add(product) {
        Ok(stored) => {
            tracing::info!(product_id = %stored.id, "product created");
            StatusCode::CREATED.into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(repository): Extension<Arc<ProductRepository>>,
    Path(id): Path<String>,
    ValidatedProduct(product): ValidatedProduct,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(raw_id = %id, "rejected non-integer product id");
            return errors::domain_error_to_response(e);
        }
    };

    tracing::info!(product_id = %id, "handle PUT product");

    match repository.update(id, product) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
