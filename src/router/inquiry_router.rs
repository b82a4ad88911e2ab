use axum::{Router, routing::post};
use crate::handler::inquiry_handler::{contact_handler, checkout_handler};
use std::sync::Arc;
use crate::service::inquiry_service::InquiryServiceImpl;

pub fn inquiry_router(service: Arc<InquiryServiceImpl>) -> Router {
    Router::new()
        .route("/contact", post(contact_handler))
        .route("/checkout", post(checkout_handler))
        .with_state(service)
}
