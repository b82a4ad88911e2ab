use crate::model::quote::{QuoteRequest, QuoteStatus};

fn sample(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    product: &str,
    quantity: &str,
    message: &str,
    status: QuoteStatus,
    date: &str,
) -> QuoteRequest {
    QuoteRequest {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        product: product.to_string(),
        quantity: quantity.to_string(),
        message: message.to_string(),
        status,
        date: date.to_string(),
    }
}

/// Quote requests loaded at startup in place of a backend fetch.
pub fn sample_quotes() -> Vec<QuoteRequest> {
    vec![
        sample(
            "Q001",
            "Juan Dela Cruz",
            "juan@example.com",
            "+63 912 345 6789",
            "NPK 20-20-20",
            "100 bags",
            "Need this for my 5-hectare corn farm. Delivery to Nueva Ecija.",
            QuoteStatus::Pending,
            "2024-12-08T10:30:00",
        ),
        sample(
            "Q002",
            "Maria Santos",
            "maria.santos@farm.com",
            "+63 917 654 3210",
            "Urea (46-0-0)",
            "200 bags",
            "Bulk order for cooperative. Need best price for 200 bags.",
            QuoteStatus::Processed,
            "2024-12-07T14:20:00",
        ),
        sample(
            "Q003",
            "Pedro Reyes",
            "pedro.reyes@gmail.com",
            "+63 905 123 4567",
            "Organic Compost Blend",
            "50 bags",
            "Interested in organic fertilizer for vegetable garden.",
            QuoteStatus::Pending,
            "2024-12-08T09:15:00",
        ),
        sample(
            "Q004",
            "Ana Garcia",
            "ana.garcia@agri.ph",
            "+63 918 765 4321",
            "DAP (18-46-0)",
            "150 bags",
            "For rice planting season. Need delivery schedule.",
            QuoteStatus::Cancelled,
            "2024-12-06T16:45:00",
        ),
        sample(
            "Q005",
            "Roberto Cruz",
            "roberto@farmcoop.ph",
            "+63 922 333 4444",
            "Liquid NPK 10-5-5",
            "500 gallons",
            "Large scale operation. Looking for volume discount.",
            QuoteStatus::Processed,
            "2024-12-05T11:00:00",
        ),
    ]
}
