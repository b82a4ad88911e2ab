use tracing::{info, error, warn, instrument};
use crate::model::quote::{NewQuote, QuoteRequest, QuoteStatus, StatusCounts, StatusFilter};
use crate::repository::quote_repo::{QuoteRepository, StatusUpdate};
use crate::repository::quote_store;
use crate::util::error::ServiceError;
use crate::dto::quote_dto::{QuoteDetailResponse, QuoteListResponse};
use std::sync::Arc;

use async_trait::async_trait;

#[async_trait]
pub trait QuoteService: Send + Sync {
	async fn register_quote(&self, quote: NewQuote) -> Result<QuoteRequest, ServiceError>;
	async fn get_quote(&self, id: &str) -> Result<QuoteDetailResponse, ServiceError>;
	async fn list_quotes(&self, search: &str, status: StatusFilter) -> Result<QuoteListResponse, ServiceError>;
	async fn update_quote_status(&self, id: &str, status: QuoteStatus) -> Result<QuoteRequest, ServiceError>;
	async fn delete_quote(&self, id: &str) -> Result<(), ServiceError>;
	async fn stats(&self) -> Result<StatusCounts, ServiceError>;
}

pub struct QuoteServiceImpl {
	pub quote_repo: Arc<dyn QuoteRepository>,
	/// Only allow the transitions the admin view offers.
	pub strict_transitions: bool,
}

impl QuoteServiceImpl {
	pub fn new(quote_repo: Arc<dyn QuoteRepository>, strict_transitions: bool) -> Self {
		QuoteServiceImpl { quote_repo, strict_transitions }
	}

	fn not_found(id: &str) -> ServiceError {
		ServiceError::NotFound(format!("Quote not found: {}", id))
	}
}

#[async_trait]
impl QuoteService for QuoteServiceImpl {
	#[instrument(skip(self, quote), fields(product = %quote.product))]
	async fn register_quote(&self, quote: NewQuote) -> Result<QuoteRequest, ServiceError> {
		info!("Registering new quote request");
		let res = self.quote_repo.create(quote).await;
		match &res {
			Ok(q) => info!(quote_id = %q.id, "Quote registered successfully"),
			Err(e) => error!("Failed to register quote: {e}"),
		}
		res.map_err(ServiceError::from)
	}

	#[instrument(skip(self))]
	async fn get_quote(&self, id: &str) -> Result<QuoteDetailResponse, ServiceError> {
		info!("Getting quote by id");
		let quote = self.quote_repo.get_by_id(id).await?.ok_or_else(|| Self::not_found(id))?;
		let actions = quote.status.available_actions();
		Ok(QuoteDetailResponse { quote, actions })
	}

	#[instrument(skip(self), fields(status = ?status))]
	async fn list_quotes(&self, search: &str, status: StatusFilter) -> Result<QuoteListResponse, ServiceError> {
		let all = self.quote_repo.list().await?;
		let stats = quote_store::counts_by_status(&all);
		let quotes = quote_store::filter(&all, search, status);
		info!("Listing {} of {} quotes", quotes.len(), stats.total);
		Ok(QuoteListResponse { quotes, stats })
	}

	#[instrument(skip(self), fields(status = %status))]
	async fn update_quote_status(&self, id: &str, status: QuoteStatus) -> Result<QuoteRequest, ServiceError> {
		info!("Updating quote status");
		let guard: fn(QuoteStatus, QuoteStatus) -> bool = if self.strict_transitions {
			|from, to| from == to || from.can_transition_to(to)
		} else {
			|_, _| true
		};
		match self.quote_repo.update_status_if(id, status, guard).await? {
			StatusUpdate::Updated(q) => {
				info!("Quote status updated successfully");
				Ok(q)
			},
			StatusUpdate::Rejected(current) => {
				warn!(from = %current, to = %status, "Rejected status transition");
				Err(ServiceError::Conflict(format!(
					"Quote {} cannot move from {} to {}",
					id, current, status
				)))
			},
			StatusUpdate::NotFound => {
				error!("Failed to update quote status: unknown id");
				Err(Self::not_found(id))
			}
		}
	}

	#[instrument(skip(self))]
	async fn delete_quote(&self, id: &str) -> Result<(), ServiceError> {
		info!("Deleting quote");
		if self.quote_repo.delete(id).await? {
			info!("Quote deleted successfully");
			Ok(())
		} else {
			error!("Failed to delete quote: unknown id");
			Err(Self::not_found(id))
		}
	}

	#[instrument(skip(self))]
	async fn stats(&self) -> Result<StatusCounts, ServiceError> {
		let all = self.quote_repo.list().await?;
		Ok(quote_store::counts_by_status(&all))
	}
}
