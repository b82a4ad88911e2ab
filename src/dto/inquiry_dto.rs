use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactMessageRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    /// Optional; a blank value counts as absent.
    #[serde(default)]
    #[validate(length(max = 30))]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}

impl ContactMessageRequest {
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CheckoutOrderRequest {
    #[validate(length(min = 1, max = 100))]
    pub product: String,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 30))]
    pub phone: String,

    #[validate(length(min = 1, max = 100))]
    pub quantity: String,

    #[validate(length(min = 1, max = 300))]
    pub address: String,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

/// Response to a simulated form submission. Nothing is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAck {
    pub reference: Uuid,
    pub title: String,
    pub description: String,
}

impl SubmissionAck {
    pub fn new<T: Into<String>, D: Into<String>>(title: T, description: D) -> Self {
        SubmissionAck {
            reference: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
        }
    }
}
