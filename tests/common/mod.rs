use storefront::application::accounts::AccountService;
use storefront::application::orders::OrderService;
use storefront::infrastructure::in_memory::{
    FixedRates, Outbox, PageViewLog, QuoteTable, ScriptedGateway, SequentialCodes,
};

/// Handles onto the in-memory adapters wired into an `OrderService`.
pub struct OrderHarness {
    pub service: OrderService,
    pub page_views: PageViewLog,
    pub gateway: ScriptedGateway,
}

pub fn order_harness(rates: FixedRates, quotes: QuoteTable, gateway: ScriptedGateway) -> OrderHarness {
    let page_views = PageViewLog::new();
    let service = OrderService::new(
        Box::new(rates),
        Box::new(quotes),
        Box::new(page_views.clone()),
        Box::new(gateway.clone()),
    );
    OrderHarness {
        service,
        page_views,
        gateway,
    }
}

pub fn account_harness(first_code: u32) -> (AccountService, Outbox) {
    let outbox = Outbox::new();
    let service = AccountService::new(
        Box::new(outbox.clone()),
        Box::new(SequentialCodes::starting_at(first_code)),
    );
    (service, outbox)
}
