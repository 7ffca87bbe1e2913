//! Capabilities the workflows consume from external services.
//!
//! One trait per collaborator. Services hold them as boxed trait objects so
//! that no concrete client is a compile-time dependency of the workflows.

use super::account::SecurityCode;
use super::order::{PaymentMethod, PaymentResult, ShippingQuote};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CurrencyRates: Send + Sync {
    /// Rate to multiply a base-currency price by to get `currency`.
    async fn exchange_rate(&self, currency: &str) -> Result<Decimal>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShippingQuotes: Send + Sync {
    /// `None` when no carrier can quote `destination`.
    async fn quote(&self, destination: &str) -> Result<Option<ShippingQuote>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Analytics: Send + Sync {
    async fn track_page_view(&self, route: &str) -> Result<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, method: &PaymentMethod, amount: Decimal) -> Result<PaymentResult>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> Result<()>;
}

#[cfg_attr(test, mockall::automock)]
pub trait SecurityCodes: Send + Sync {
    fn generate(&self) -> SecurityCode;
}

pub type CurrencyRatesBox = Box<dyn CurrencyRates>;
pub type ShippingQuotesBox = Box<dyn ShippingQuotes>;
pub type AnalyticsBox = Box<dyn Analytics>;
pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
pub type MailerBox = Box<dyn Mailer>;
pub type SecurityCodesBox = Box<dyn SecurityCodes>;
