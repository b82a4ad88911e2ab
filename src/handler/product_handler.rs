use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::service::catalog_service::{CatalogServiceImpl, CatalogService};
use crate::util::error::HandlerError;
use std::sync::Arc;

pub async fn list_products_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> impl IntoResponse {
    Json(service.list_products())
}

pub async fn get_product_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let product = service.get_product(&slug)?;
    Ok(Json(product))
}
