//! Demo catalog loaded at startup when seeding is enabled.

use prodapi_core::{DomainResult, ProductId};

use crate::product::Product;
use crate::repository::ProductRepository;

pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Latte".to_string(),
            description: "Frothy milky coffee".to_string(),
            price: 2.45,
            sku: "abc-323-lat".to_string(),
        },
        Product {
            id: ProductId::new(2),
            name: "Espresso".to_string(),
            description: "Short and strong coffee without milk".to_string(),
            price: 1.99,
            sku: "fjd-034-esp".to_string(),
        },
    ]
}

/// Repository holding [`demo_products`].
pub fn demo_repository() -> DomainResult<ProductRepository> {
    ProductRepository::with_products(demo_products())
}
