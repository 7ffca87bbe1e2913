use crate::domain::order::{Order, OrderOutcome, PaymentMethod};
use crate::domain::ports::{AnalyticsBox, CurrencyRatesBox, PaymentGatewayBox, ShippingQuotesBox};
use crate::error::{Result, StorefrontError};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// Route recorded for every rendered page.
pub const HOME_ROUTE: &str = "/home";

/// Order-side workflows: pricing, shipping, page rendering and checkout.
///
/// Holds no state of its own besides the ports, so one instance can serve any
/// number of concurrent calls.
pub struct OrderService {
    currency: CurrencyRatesBox,
    shipping: ShippingQuotesBox,
    analytics: AnalyticsBox,
    payments: PaymentGatewayBox,
}

impl OrderService {
    pub fn new(
        currency: CurrencyRatesBox,
        shipping: ShippingQuotesBox,
        analytics: AnalyticsBox,
        payments: PaymentGatewayBox,
    ) -> Self {
        Self {
            currency,
            shipping,
            analytics,
            payments,
        }
    }

    /// Converts `price` into `target_currency` using a freshly fetched rate.
    pub async fn get_price_in_currency(&self, price: Decimal, target_currency: &str) -> Result<Decimal> {
        let rate = self.currency.exchange_rate(target_currency).await?;
        debug!(currency = target_currency, %rate, "fetched exchange rate");
        price
            .checked_mul(rate)
            .ok_or_else(|| StorefrontError::service("currency", "converted price overflows"))
    }

    pub async fn get_shipping_info(&self, destination: &str) -> Result<String> {
        let Some(quote) = self.shipping.quote(destination).await? else {
            debug!(destination, "no shipping quote available");
            return Ok("Shipping Unavailable".to_string());
        };

        Ok(format!(
            "Shipping Cost: ${} ({} Days)",
            quote.cost, quote.estimated_days
        ))
    }

    /// Renders the home page, recording one page view for it.
    pub async fn render_page(&self) -> Result<String> {
        self.analytics.track_page_view(HOME_ROUTE).await?;
        Ok("<div>content</div>".to_string())
    }

    /// Charges the order total to `payment_method`.
    ///
    /// A declined payment is a normal outcome and is reported in the returned
    /// [`OrderOutcome`]; only gateway failures surface as errors.
    pub async fn submit_order(&self, order: &Order, payment_method: &PaymentMethod) -> Result<OrderOutcome> {
        let result = self.payments.charge(payment_method, order.total_amount).await?;
        let outcome = OrderOutcome::from(result);

        if outcome.success {
            info!(amount = %order.total_amount, "order accepted");
        } else {
            warn!(amount = %order.total_amount, status = ?result.status, "payment declined");
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{OrderFailure, PaymentResult, PaymentStatus, ShippingQuote};
    use crate::domain::ports::{
        MockAnalytics, MockCurrencyRates, MockPaymentGateway, MockShippingQuotes,
    };
    use rust_decimal_macros::dec;

    struct Mocks {
        currency: MockCurrencyRates,
        shipping: MockShippingQuotes,
        analytics: MockAnalytics,
        payments: MockPaymentGateway,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                currency: MockCurrencyRates::new(),
                shipping: MockShippingQuotes::new(),
                analytics: MockAnalytics::new(),
                payments: MockPaymentGateway::new(),
            }
        }

        fn into_service(self) -> OrderService {
            OrderService::new(
                Box::new(self.currency),
                Box::new(self.shipping),
                Box::new(self.analytics),
                Box::new(self.payments),
            )
        }
    }

    #[tokio::test]
    async fn test_price_in_currency_uses_rate() {
        let mut mocks = Mocks::new();
        mocks
            .currency
            .expect_exchange_rate()
            .withf(|currency| currency == "AUD")
            .times(1)
            .returning(|_| Ok(dec!(1.5)));

        let service = mocks.into_service();
        let price = service.get_price_in_currency(dec!(10), "AUD").await.unwrap();
        assert_eq!(price, dec!(15));
    }

    #[tokio::test]
    async fn test_price_in_currency_fetches_rate_every_call() {
        let mut mocks = Mocks::new();
        mocks
            .currency
            .expect_exchange_rate()
            .times(2)
            .returning(|_| Ok(dec!(2)));

        let service = mocks.into_service();
        service.get_price_in_currency(dec!(1), "EUR").await.unwrap();
        service.get_price_in_currency(dec!(1), "EUR").await.unwrap();
    }

    #[tokio::test]
    async fn test_price_in_currency_overflow_is_an_error() {
        let mut mocks = Mocks::new();
        mocks
            .currency
            .expect_exchange_rate()
            .times(1)
            .returning(|_| Ok(dec!(2)));

        let service = mocks.into_service();
        let err = service
            .get_price_in_currency(Decimal::MAX, "XYZ")
            .await
            .unwrap_err();
        assert!(matches!(err, StorefrontError::ServiceError { service: "currency", .. }));
    }

    #[tokio::test]
    async fn test_price_in_currency_propagates_failure() {
        let mut mocks = Mocks::new();
        mocks
            .currency
            .expect_exchange_rate()
            .returning(|_| Err(StorefrontError::service("currency", "rates offline")));

        let service = mocks.into_service();
        let err = service.get_price_in_currency(dec!(10), "AUD").await.unwrap_err();
        assert!(matches!(err, StorefrontError::ServiceError { service: "currency", .. }));
    }

    #[tokio::test]
    async fn test_shipping_unavailable() {
        let mut mocks = Mocks::new();
        mocks.shipping.expect_quote().returning(|_| Ok(None));

        let service = mocks.into_service();
        let info = service.get_shipping_info("London").await.unwrap();
        assert!(info.to_lowercase().contains("unavailable"));
    }

    #[tokio::test]
    async fn test_shipping_info_formats_quote() {
        let mut mocks = Mocks::new();
        mocks
            .shipping
            .expect_quote()
            .withf(|destination| destination == "London")
            .returning(|_| {
                Ok(Some(ShippingQuote {
                    cost: dec!(10),
                    estimated_days: 2,
                }))
            });

        let service = mocks.into_service();
        let info = service.get_shipping_info("London").await.unwrap();
        assert_eq!(info, "Shipping Cost: $10 (2 Days)");
    }

    #[tokio::test]
    async fn test_render_page_tracks_home_once() {
        let mut mocks = Mocks::new();
        mocks
            .analytics
            .expect_track_page_view()
            .withf(|route| route == "/home")
            .times(1)
            .returning(|_| Ok(()));

        let service = mocks.into_service();
        let page = service.render_page().await.unwrap();
        assert!(page.contains("content"));
    }

    #[tokio::test]
    async fn test_render_page_surfaces_tracking_failure() {
        let mut mocks = Mocks::new();
        mocks
            .analytics
            .expect_track_page_view()
            .times(1)
            .returning(|_| Err(StorefrontError::service("analytics", "timeout")));

        let service = mocks.into_service();
        assert!(service.render_page().await.is_err());
    }

    #[tokio::test]
    async fn test_submit_order_charges_exact_arguments() {
        let mut mocks = Mocks::new();
        mocks
            .payments
            .expect_charge()
            .withf(|method, amount| method.credit_card_number == "1234" && *amount == dec!(10))
            .times(1)
            .returning(|_, _| {
                Ok(PaymentResult {
                    status: PaymentStatus::Success,
                })
            });

        let service = mocks.into_service();
        let outcome = service
            .submit_order(
                &Order {
                    total_amount: dec!(10),
                },
                &PaymentMethod::card("1234"),
            )
            .await
            .unwrap();

        assert_eq!(outcome, OrderOutcome::accepted());
    }

    #[tokio::test]
    async fn test_submit_order_payment_failure() {
        let mut mocks = Mocks::new();
        mocks.payments.expect_charge().times(1).returning(|_, _| {
            Ok(PaymentResult {
                status: PaymentStatus::Failed,
            })
        });

        let service = mocks.into_service();
        let outcome = service
            .submit_order(
                &Order {
                    total_amount: dec!(10),
                },
                &PaymentMethod::card("1234"),
            )
            .await
            .unwrap();

        assert!(!outcome.success);
        assert_eq!(outcome.error, Some(OrderFailure::PaymentError));
    }
}
