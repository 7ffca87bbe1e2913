use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub cost: Decimal,
    pub estimated_days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub credit_card_number: String,
}

impl PaymentMethod {
    pub fn card(number: impl Into<String>) -> Self {
        Self {
            credit_card_number: number.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
    Failed,
}

/// What the payment gateway reports for a single charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResult {
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderFailure {
    PaymentError,
}

/// Result of submitting an order.
///
/// Serializes as `{"success":true}` or
/// `{"success":false,"error":"payment_error"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<OrderFailure>,
}

impl OrderOutcome {
    pub fn accepted() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn rejected(reason: OrderFailure) -> Self {
        Self {
            success: false,
            error: Some(reason),
        }
    }
}

impl From<PaymentResult> for OrderOutcome {
    fn from(result: PaymentResult) -> Self {
        match result.status {
            PaymentStatus::Success => Self::accepted(),
            PaymentStatus::Failed => Self::rejected(OrderFailure::PaymentError),
        }
    }
}
