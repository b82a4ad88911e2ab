use crate::model::quote::{NewQuote, QuoteRequest, QuoteStatus};
use crate::repository::quote_store;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use crate::repository::seed::sample_quotes;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

#[async_trait]
pub trait QuoteRepository: Send + Sync {
    async fn create(&self, quote: NewQuote) -> RepositoryResult<QuoteRequest>;
    async fn get_by_id(&self, id: &str) -> RepositoryResult<Option<QuoteRequest>>;
    /// Returns the updated record, or `None` when `id` is unknown and nothing changed.
    async fn update_status(&self, id: &str, status: QuoteStatus) -> RepositoryResult<Option<QuoteRequest>>;
    /// Applies `status` only when `allow(current, status)` holds, checked and
    /// written under one lock.
    async fn update_status_if(
        &self,
        id: &str,
        status: QuoteStatus,
        allow: fn(QuoteStatus, QuoteStatus) -> bool,
    ) -> RepositoryResult<StatusUpdate>;
    /// Returns `false` when `id` is unknown and nothing was removed.
    async fn delete(&self, id: &str) -> RepositoryResult<bool>;
    /// Full, unfiltered snapshot in insertion order.
    async fn list(&self) -> RepositoryResult<Vec<QuoteRequest>>;
    async fn count(&self) -> RepositoryResult<usize>;
}

/// Outcome of a guarded status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusUpdate {
    Updated(QuoteRequest),
    /// The guard refused; carries the status the record still has.
    Rejected(QuoteStatus),
    NotFound,
}

struct QuoteState {
    records: Vec<QuoteRequest>,
    next_seq: u32,
}

/// Process-lifetime quote storage. Every mutation is one `quote_store`
/// application under the write lock.
pub struct InMemoryQuoteRepository {
    state: RwLock<QuoteState>,
}

fn id_sequence(id: &str) -> Option<u32> {
    id.strip_prefix('Q').and_then(|n| n.parse().ok())
}

impl InMemoryQuoteRepository {
    pub fn new(records: Vec<QuoteRequest>) -> Self {
        let next_seq = records.iter().filter_map(|q| id_sequence(&q.id)).max().unwrap_or(0).saturating_add(1);
        InMemoryQuoteRepository {
            state: RwLock::new(QuoteState { records, next_seq }),
        }
    }

    /// Repository loaded with the sample quote requests.
    pub fn seeded() -> Self {
        Self::new(sample_quotes())
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl QuoteRepository for InMemoryQuoteRepository {
    #[tracing::instrument(skip(self, quote), fields(product = %quote.product))]
    async fn create(&self, quote: NewQuote) -> RepositoryResult<QuoteRequest> {
        if quote.name.trim().is_empty() || quote.email.trim().is_empty() {
            error!("Rejected quote without name or email");
            return Err(RepositoryError::validation("Quote requires a name and an email"));
        }

        let mut state = self.state.write().await;
        let id = format!("Q{:03}", state.next_seq);
        if state.records.iter().any(|q| q.id == id) {
            error!(quote_id = %id, "Generated quote id already in use");
            return Err(RepositoryError::already_exists(format!("Quote id already in use: {}", id)));
        }

        let new_quote = QuoteRequest {
            id,
            name: quote.name,
            email: quote.email,
            phone: quote.phone,
            product: quote.product,
            quantity: quote.quantity,
            message: quote.message,
            status: QuoteStatus::Pending,
            date: chrono::Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S").to_string(),
        };
        state.next_seq = state.next_seq.saturating_add(1);
        state.records.push(new_quote.clone());
        info!(quote_id = %new_quote.id, "Quote created successfully");
        Ok(new_quote)
    }

    #[tracing::instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> RepositoryResult<Option<QuoteRequest>> {
        let state = self.state.read().await;
        let found = state.records.iter().find(|q| q.id == id).cloned();
        if found.is_none() {
            warn!(quote_id = %id, "Quote not found");
        }
        Ok(found)
    }

    #[tracing::instrument(skip(self), fields(status = %status))]
    async fn update_status(&self, id: &str, status: QuoteStatus) -> RepositoryResult<Option<QuoteRequest>> {
        let mut state = self.state.write().await;
        let records = quote_store::set_status(&state.records, id, status);
        state.records = records;
        let updated = state.records.iter().find(|q| q.id == id).cloned();
        match &updated {
            Some(_) => info!(quote_id = %id, status = %status, "Quote status updated"),
            None => warn!(quote_id = %id, "No quote found to update status"),
        }
        Ok(updated)
    }

    #[tracing::instrument(skip(self, allow), fields(status = %status))]
    async fn update_status_if(
        &self,
        id: &str,
        status: QuoteStatus,
        allow: fn(QuoteStatus, QuoteStatus) -> bool,
    ) -> RepositoryResult<StatusUpdate> {
        let mut state = self.state.write().await;
        let Some(current) = state.records.iter().find(|q| q.id == id).map(|q| q.status) else {
            warn!(quote_id = %id, "No quote found to update status");
            return Ok(StatusUpdate::NotFound);
        };
        if !allow(current, status) {
            warn!(quote_id = %id, from = %current, to = %status, "Status change refused");
            return Ok(StatusUpdate::Rejected(current));
        }
        let records = quote_store::set_status(&state.records, id, status);
        state.records = records;
        match state.records.iter().find(|q| q.id == id).cloned() {
            Some(updated) => {
                info!(quote_id = %id, from = %current, to = %status, "Quote status updated");
                Ok(StatusUpdate::Updated(updated))
            }
            None => Ok(StatusUpdate::NotFound),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: &str) -> RepositoryResult<bool> {
        let mut state = self.state.write().await;
        let before = state.records.len();
        let records = quote_store::remove(&state.records, id);
        state.records = records;
        let removed = state.records.len() < before;
        if removed {
            info!(quote_id = %id, "Quote deleted");
        } else {
            warn!(quote_id = %id, "No quote found to delete");
        }
        Ok(removed)
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<QuoteRequest>> {
        let state = self.state.read().await;
        info!("Fetched {} quotes", state.records.len());
        Ok(state.records.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn count(&self) -> RepositoryResult<usize> {
        Ok(self.state.read().await.records.len())
    }
}
