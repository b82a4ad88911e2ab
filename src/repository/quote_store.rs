//! Pure operations over an ordered sequence of quote requests.
//!
//! Nothing here caches derived state: the admin list and its statistics are
//! recomputed from the sequence on every call. Operations on an unknown id
//! return the input unchanged and report nothing.

use crate::model::quote::{QuoteRequest, QuoteStatus, StatusCounts, StatusFilter};

/// True when `term` is empty or occurs, ignoring case, in the name, email,
/// product or id of the record.
pub fn matches_search(quote: &QuoteRequest, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    [&quote.name, &quote.email, &quote.product, &quote.id]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Records passing both the status filter and the search term, in input order.
pub fn filter(records: &[QuoteRequest], search_term: &str, status_filter: StatusFilter) -> Vec<QuoteRequest> {
    records
        .iter()
        .filter(|q| status_filter.matches(q.status) && matches_search(q, search_term))
        .cloned()
        .collect()
}

/// Copy of `records` with the status of `id` replaced. Other records are untouched.
pub fn set_status(records: &[QuoteRequest], id: &str, new_status: QuoteStatus) -> Vec<QuoteRequest> {
    records
        .iter()
        .map(|q| {
            if q.id == id {
                QuoteRequest { status: new_status, ..q.clone() }
            } else {
                q.clone()
            }
        })
        .collect()
}

/// Copy of `records` without the record `id`.
pub fn remove(records: &[QuoteRequest], id: &str) -> Vec<QuoteRequest> {
    records.iter().filter(|q| q.id != id).cloned().collect()
}

/// Counts per status. Always called with the unfiltered collection.
pub fn counts_by_status(records: &[QuoteRequest]) -> StatusCounts {
    records.iter().fold(
        StatusCounts { total: records.len(), ..StatusCounts::default() },
        |mut counts, q| {
            match q.status {
                QuoteStatus::Pending => counts.pending += 1,
                QuoteStatus::Processed => counts.processed += 1,
                QuoteStatus::Cancelled => counts.cancelled += 1,
            }
            counts
        },
    )
}
