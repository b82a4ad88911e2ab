use tracing::{info, warn, instrument};
use crate::dto::inquiry_dto::{CheckoutOrderRequest, ContactMessageRequest, SubmissionAck};
use crate::repository::catalog::ProductCatalog;
use crate::util::error::ServiceError;

/// Contact and checkout submissions. Acknowledged and logged, never stored.
pub trait InquiryService: Send + Sync {
	fn submit_contact(&self, message: ContactMessageRequest) -> Result<SubmissionAck, ServiceError>;
	fn submit_checkout(&self, order: CheckoutOrderRequest) -> Result<SubmissionAck, ServiceError>;
}

#[derive(Debug, Clone, Default)]
pub struct InquiryServiceImpl {
	pub catalog: ProductCatalog,
}

impl InquiryService for InquiryServiceImpl {
	#[instrument(skip(self, message), fields(email = %message.email))]
	fn submit_contact(&self, message: ContactMessageRequest) -> Result<SubmissionAck, ServiceError> {
		let ack = SubmissionAck::new("Message Sent!", "We'll get back to you as soon as possible.");
		info!(
			reference = %ack.reference,
			name = %message.name,
			has_phone = message.phone().is_some(),
			"Contact message received"
		);
		Ok(ack)
	}

	#[instrument(skip(self, order), fields(product = %order.product))]
	fn submit_checkout(&self, order: CheckoutOrderRequest) -> Result<SubmissionAck, ServiceError> {
		if !self.catalog.contains_title(&order.product) {
			warn!("Checkout for a product outside the catalog");
			return Err(ServiceError::InvalidInput(format!("Unknown product: {}", order.product)));
		}
		let ack = SubmissionAck::new(
			"Order Placed!",
			format!(
				"Your order for {} has been received. We'll contact you to confirm payment and delivery.",
				order.product.trim()
			),
		);
		info!(reference = %ack.reference, quantity = %order.quantity, "Checkout order received");
		Ok(ack)
	}
}
