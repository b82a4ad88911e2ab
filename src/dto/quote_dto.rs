use crate::model::quote::{NewQuote, QuoteRequest, QuoteStatus, StatusAction, StatusCounts};
use serde::{Deserialize, Serialize};

use validator::Validate;

// --- Validated DTOs for request validation ---

/// Quote form body. Only name and email are required; phone and quantity may be omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateQuoteRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 30))]
    pub phone: Option<String>,

    #[validate(length(max = 100))]
    pub product: String,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub quantity: String,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub message: String,
}

impl From<CreateQuoteRequest> for NewQuote {
    fn from(req: CreateQuoteRequest) -> Self {
        NewQuote {
            name: req.name.trim().to_string(),
            email: req.email.trim().to_string(),
            phone: req.phone.as_deref().map(str::trim).unwrap_or_default().to_string(),
            product: req.product.trim().to_string(),
            quantity: req.quantity.trim().to_string(),
            message: req.message.trim().to_string(),
        }
    }
}

/// Body of `PATCH /quotes/{id}`. Unknown status strings fail deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateQuoteStatusRequest {
    pub status: QuoteStatus,
}

/// Query string of the admin list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteListQuery {
    pub search: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteListResponse {
    pub quotes: Vec<QuoteRequest>,
    /// Counts over the whole collection, independent of the filter.
    pub stats: StatusCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteDetailResponse {
    pub quote: QuoteRequest,
    pub actions: Vec<StatusAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteCreatedResponse {
    pub quote: QuoteRequest,
    pub ack: crate::dto::inquiry_dto::SubmissionAck,
}
