use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle stage of a quote request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    #[default]
    Pending,
    Processed,
    Cancelled,
}

impl QuoteStatus {
    pub const ALL: [QuoteStatus; 3] = [
        QuoteStatus::Pending,
        QuoteStatus::Processed,
        QuoteStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStatus::Pending => "pending",
            QuoteStatus::Processed => "processed",
            QuoteStatus::Cancelled => "cancelled",
        }
    }

    /// Transitions the admin view offers for a record in this state.
    ///
    /// Advisory only: the store accepts any status change. Strict mode in the
    /// quote service uses this table to reject everything else.
    pub fn can_transition_to(&self, next: QuoteStatus) -> bool {
        matches!(
            (self, next),
            (QuoteStatus::Pending, QuoteStatus::Processed)
                | (QuoteStatus::Pending, QuoteStatus::Cancelled)
                | (QuoteStatus::Processed, QuoteStatus::Pending)
                | (QuoteStatus::Cancelled, QuoteStatus::Pending)
        )
    }

    /// Commands shown for a record in this state, in display order.
    pub fn available_actions(&self) -> Vec<StatusAction> {
        match self {
            QuoteStatus::Pending => vec![
                StatusAction::new("Mark as Processed", QuoteStatus::Processed),
                StatusAction::new("Cancel Request", QuoteStatus::Cancelled),
            ],
            QuoteStatus::Processed => vec![StatusAction::new("Mark as Pending", QuoteStatus::Pending)],
            QuoteStatus::Cancelled => vec![StatusAction::new("Reopen Request", QuoteStatus::Pending)],
        }
    }
}

impl fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuoteStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(QuoteStatus::Pending),
            "processed" => Ok(QuoteStatus::Processed),
            "cancelled" => Ok(QuoteStatus::Cancelled),
            other => Err(format!("unknown quote status: {}", other)),
        }
    }
}

/// A status command available from the admin view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusAction {
    pub label: String,
    pub target: QuoteStatus,
}

impl StatusAction {
    fn new(label: &str, target: QuoteStatus) -> Self {
        StatusAction { label: label.to_string(), target }
    }
}

/// Status selection applied to the admin list. `All` disables the status check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(QuoteStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: QuoteStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        trimmed.parse::<QuoteStatus>().map(StatusFilter::Only)
    }
}

/// One customer inquiry about a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub product: String,
    pub quantity: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: QuoteStatus,
    /// ISO-8601 creation time. Set once.
    pub date: String,
}

/// Fields supplied by the customer; id, status and date are assigned on create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuote {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub product: String,
    pub quantity: String,
    pub message: String,
}

/// Per-status counts over the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub processed: usize,
    pub cancelled: usize,
}

impl StatusCounts {
    pub fn get(&self, status: QuoteStatus) -> usize {
        match status {
            QuoteStatus::Pending => self.pending,
            QuoteStatus::Processed => self.processed,
            QuoteStatus::Cancelled => self.cancelled,
        }
    }
}
