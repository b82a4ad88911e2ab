use axum::{Router, routing::get};
use crate::handler::product_handler::{list_products_handler, get_product_handler};
use std::sync::Arc;
use crate::service::catalog_service::CatalogServiceImpl;

pub fn product_router(service: Arc<CatalogServiceImpl>) -> Router {
    Router::new()
        .route("/products", get(list_products_handler))
        .route("/products/{slug}", get(get_product_handler))
        .with_state(service)
}
