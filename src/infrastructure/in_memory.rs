use crate::domain::account::SecurityCode;
use crate::domain::order::{PaymentMethod, PaymentResult, PaymentStatus, ShippingQuote};
use crate::domain::ports::{
    Analytics, CurrencyRates, Mailer, PaymentGateway, SecurityCodes, ShippingQuotes,
};
use crate::error::{Result, StorefrontError};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use tokio::sync::RwLock;

/// Currency rates from a fixed table.
///
/// Asking for a currency missing from the table fails like an unreachable
/// rates service would.
#[derive(Default, Clone)]
pub struct FixedRates {
    rates: HashMap<String, Decimal>,
}

impl FixedRates {
    /// Creates a rate table from `(currency, rate)` pairs.
    pub fn new<I, S>(rates: I) -> Self
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        Self {
            rates: rates
                .into_iter()
                .map(|(currency, rate)| (currency.into(), rate))
                .collect(),
        }
    }
}

#[async_trait]
impl CurrencyRates for FixedRates {
    async fn exchange_rate(&self, currency: &str) -> Result<Decimal> {
        self.rates.get(currency).copied().ok_or_else(|| {
            StorefrontError::service("currency", format!("no rate for {currency}"))
        })
    }
}

/// Shipping quotes keyed by destination.
#[derive(Default, Clone)]
pub struct QuoteTable {
    quotes: HashMap<String, ShippingQuote>,
}

impl QuoteTable {
    /// Creates a quote table from `(destination, quote)` pairs.
    pub fn new<I, S>(quotes: I) -> Self
    where
        I: IntoIterator<Item = (S, ShippingQuote)>,
        S: Into<String>,
    {
        Self {
            quotes: quotes
                .into_iter()
                .map(|(destination, quote)| (destination.into(), quote))
                .collect(),
        }
    }
}

#[async_trait]
impl ShippingQuotes for QuoteTable {
    async fn quote(&self, destination: &str) -> Result<Option<ShippingQuote>> {
        Ok(self.quotes.get(destination).copied())
    }
}

/// Records every tracked route, in order.
///
/// Clones share the same log, so a test can keep one handle and give another
/// to the service under test.
#[derive(Default, Clone)]
pub struct PageViewLog {
    routes: Arc<RwLock<Vec<String>>>,
}

impl PageViewLog {
    /// Creates a new, empty page-view log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tracked routes, oldest first.
    pub async fn routes(&self) -> Vec<String> {
        self.routes.read().await.clone()
    }
}

#[async_trait]
impl Analytics for PageViewLog {
    async fn track_page_view(&self, route: &str) -> Result<()> {
        let mut routes = self.routes.write().await;
        routes.push(route.to_string());
        Ok(())
    }
}

/// A charge as seen by [`ScriptedGateway`].
#[derive(Debug, Clone, PartialEq)]
pub struct Charge {
    pub method: PaymentMethod,
    pub amount: Decimal,
}

/// Payment gateway that answers every charge with the same status.
#[derive(Clone)]
pub struct ScriptedGateway {
    status: PaymentStatus,
    charges: Arc<RwLock<Vec<Charge>>>,
}

impl ScriptedGateway {
    /// Creates a gateway that reports `status` for every charge.
    pub fn new(status: PaymentStatus) -> Self {
        Self {
            status,
            charges: Arc::default(),
        }
    }

    /// Creates a gateway that accepts every charge.
    pub fn approving() -> Self {
        Self::new(PaymentStatus::Success)
    }

    /// Creates a gateway that declines every charge.
    pub fn declining() -> Self {
        Self::new(PaymentStatus::Failed)
    }

    /// Returns the charges received so far, oldest first.
    pub async fn charges(&self) -> Vec<Charge> {
        self.charges.read().await.clone()
    }
}

#[async_trait]
impl PaymentGateway for ScriptedGateway {
    async fn charge(&self, method: &PaymentMethod, amount: Decimal) -> Result<PaymentResult> {
        let mut charges = self.charges.write().await;
        charges.push(Charge {
            method: method.clone(),
            amount,
        });
        Ok(PaymentResult {
            status: self.status,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub body: String,
}

/// Mailer that keeps every message instead of delivering it.
#[derive(Default, Clone)]
pub struct Outbox {
    sent: Arc<RwLock<Vec<SentEmail>>>,
}

impl Outbox {
    /// Creates a new, empty outbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the messages sent so far, oldest first.
    pub async fn sent(&self) -> Vec<SentEmail> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl Mailer for Outbox {
    async fn send(&self, to: &str, body: &str) -> Result<()> {
        let mut sent = self.sent.write().await;
        sent.push(SentEmail {
            to: to.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

/// Deterministic code generator: `start`, `start + 1`, ...
#[derive(Clone)]
pub struct SequentialCodes {
    next: Arc<AtomicU32>,
}

impl SequentialCodes {
    /// Creates a generator whose first code is `start`.
    pub fn starting_at(start: u32) -> Self {
        Self {
            next: Arc::new(AtomicU32::new(start)),
        }
    }
}

impl SecurityCodes for SequentialCodes {
    fn generate(&self) -> SecurityCode {
        SecurityCode::new(self.next.fetch_add(1, Ordering::Relaxed))
    }
}
