use axum::{extract::{State, rejection::JsonRejection}, response::IntoResponse, Json};
use crate::dto::inquiry_dto::{CheckoutOrderRequest, ContactMessageRequest};
use crate::handler::json_body;
use crate::service::inquiry_service::{InquiryServiceImpl, InquiryService};
use crate::util::error::HandlerError;
use std::sync::Arc;

use validator::Validate;

// Handler: Contact form (public)
pub async fn contact_handler(
    State(service): State<Arc<InquiryServiceImpl>>,
    payload: Result<Json<ContactMessageRequest>, JsonRejection>,
) -> Result<impl IntoResponse, HandlerError> {
    let payload = json_body(payload)?;
    payload.validate().map_err(HandlerError::validation)?;
    let ack = service.submit_contact(payload)?;
    Ok(Json(ack))
}

// Handler: Checkout form (public)
pub async fn checkout_handler(
    State(service): State<Arc<InquiryServiceImpl>>,
    payload: Result<Json<CheckoutOrderRequest>, JsonRejection>,
) -> Result<impl IntoResponse, HandlerError> {
    let payload = json_body(payload)?;
    payload.validate().map_err(HandlerError::validation)?;
    let ack = service.submit_checkout(payload)?;
    Ok(Json(ack))
}
