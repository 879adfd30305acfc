use axum::Router;

pub mod products;
pub mod system;

/// Router for the product endpoints, mounted at `/`.
pub fn router() -> Router {
    products::router()
}
