use axum::{extract::{State, Path, Query, rejection::JsonRejection}, response::IntoResponse, Json, http::StatusCode};
use crate::dto::inquiry_dto::SubmissionAck;
use crate::dto::quote_dto::{CreateQuoteRequest, QuoteCreatedResponse, QuoteListQuery, UpdateQuoteStatusRequest};
use crate::handler::json_body;
use crate::model::quote::StatusFilter;
use crate::service::quote_service::{QuoteServiceImpl, QuoteService};
use crate::util::error::HandlerError;
use std::sync::Arc;
use tracing::{info, error};

use validator::Validate;

// Handler: Submit Quote Request (public)
pub async fn create_quote_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    payload: Result<Json<CreateQuoteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, HandlerError> {
    let payload = json_body(payload)?;
    if let Err(e) = payload.validate() {
        error!("[create_quote_handler] Validation failed: {}", e);
        return Err(HandlerError::validation(e));
    }
    let quote = service.register_quote(payload.into()).await?;
    info!(quote_id = %quote.id, "[create_quote_handler] Quote request received");
    let ack = SubmissionAck::new(
        "Quote Request Sent!",
        format!("We'll contact you soon regarding {}.", quote.product),
    );
    Ok((StatusCode::CREATED, Json(QuoteCreatedResponse { quote, ack })))
}

// Handler: List Quotes with search and status filter (admin only)
pub async fn list_quotes_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    Query(params): Query<QuoteListQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let status = params
        .status
        .as_deref()
        .unwrap_or("all")
        .parse::<StatusFilter>()
        .map_err(HandlerError::bad_request)?;
    let search = params.search.as_deref().unwrap_or("");
    let listing = service.list_quotes(search, status).await?;
    Ok(Json(listing))
}

// Handler: Status Counts (admin only)
pub async fn quote_stats_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let stats = service.stats().await?;
    Ok(Json(stats))
}

// Handler: Get Quote with its available actions (admin only)
pub async fn get_quote_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let detail = service.get_quote(&id).await?;
    Ok(Json(detail))
}

// Handler: Update Quote Status (admin only)
pub async fn update_quote_status_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateQuoteStatusRequest>, JsonRejection>,
) -> Result<impl IntoResponse, HandlerError> {
    let payload = json_body(payload)?;
    let updated = service.update_quote_status(&id, payload.status).await?;
    Ok(Json(updated))
}

// Handler: Delete Quote (admin only)
pub async fn delete_quote_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    service.delete_quote(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
