use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, miette};
use rust_decimal::Decimal;
use serde_json::Value;
use std::path::PathBuf;
use storefront::application::accounts::AccountService;
use storefront::application::orders::OrderService;
use storefront::config::RulesConfig;
use storefront::domain::order::{Order, PaymentMethod, ShippingQuote};
use storefront::domain::rules::can_drive;
use storefront::domain::validation::validate_user_input_value;
use storefront::infrastructure::in_memory::{
    FixedRates, Outbox, PageViewLog, QuoteTable, ScriptedGateway, SequentialCodes,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Cli {
    /// Coupon catalog CSV (`code,discount`). Defaults to the built-in catalog.
    #[arg(long, global = true)]
    coupons: Option<PathBuf>,

    #[arg(long, global = true)]
    min_username_len: Option<usize>,

    #[arg(long, global = true)]
    max_username_len: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the coupon catalog
    Coupons,
    /// Apply a coupon code to a price
    Discount { price: Decimal, code: String },
    /// Check driving eligibility by age and country
    CanDrive { age: u32, country: String },
    /// Validate a username/age pair
    ValidateUser { username: String, age: String },
    /// Convert a price into another currency
    Convert {
        price: Decimal,
        currency: String,
        /// Exchange rate as CUR=RATE; repeatable
        #[arg(long = "rate", value_parser = parse_rate)]
        rates: Vec<(String, Decimal)>,
    },
    /// Look up shipping for a destination
    Shipping {
        destination: String,
        /// Known quote as DEST=COST:DAYS; repeatable
        #[arg(long = "quote", value_parser = parse_quote)]
        quotes: Vec<(String, ShippingQuote)>,
    },
    /// Submit an order and charge the card
    Checkout {
        amount: Decimal,
        card: String,
        /// Have the payment gateway decline the charge
        #[arg(long)]
        decline: bool,
    },
    /// Sign up an email address
    Signup { email: String },
    /// Send a login code to an email address
    Login { email: String },
}

fn parse_rate(s: &str) -> std::result::Result<(String, Decimal), String> {
    let (currency, rate) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CUR=RATE, got {s:?}"))?;
    let rate = rate.parse::<Decimal>().map_err(|e| e.to_string())?;
    Ok((currency.to_string(), rate))
}

fn parse_quote(s: &str) -> std::result::Result<(String, ShippingQuote), String> {
    let (destination, quote) = s
        .split_once('=')
        .ok_or_else(|| format!("expected DEST=COST:DAYS, got {s:?}"))?;
    let (cost, days) = quote
        .split_once(':')
        .ok_or_else(|| format!("expected COST:DAYS, got {quote:?}"))?;
    Ok((
        destination.to_string(),
        ShippingQuote {
            cost: cost.parse::<Decimal>().map_err(|e| e.to_string())?,
            estimated_days: days.parse::<u32>().map_err(|e| e.to_string())?,
        },
    ))
}

fn order_service(rates: FixedRates, quotes: QuoteTable, gateway: ScriptedGateway) -> OrderService {
    OrderService::new(
        Box::new(rates),
        Box::new(quotes),
        Box::new(PageViewLog::new()),
        Box::new(gateway),
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = RulesConfig::load(
        cli.coupons.as_deref(),
        cli.min_username_len,
        cli.max_username_len,
    )
    .into_diagnostic()?;

    match cli.command {
        Command::Coupons => {
            println!("code,discount");
            for coupon in config.coupons.coupons() {
                println!("{},{}", coupon.code, coupon.discount);
            }
        }
        Command::Discount { price, code } => {
            match config.coupons.calculate_discount(price, &code) {
                Ok(discounted) => println!("{discounted}"),
                Err(invalid) => println!("{invalid}"),
            }
        }
        Command::CanDrive { age, country } => match can_drive(age, &country) {
            Ok(eligible) => println!("{eligible}"),
            Err(invalid) => println!("{invalid}"),
        },
        Command::ValidateUser { username, age } => {
            // Ages that do not parse as JSON numbers are passed on as strings,
            // which the validator rejects.
            let age = serde_json::from_str::<Value>(&age).unwrap_or(Value::String(age));
            match validate_user_input_value(&Value::String(username.clone()), &age) {
                Ok(input) => println!("{input}"),
                Err(invalid) => println!("{invalid}"),
            }
            println!("username policy: {}", config.username.is_valid(&username));
        }
        Command::Convert {
            price,
            currency,
            rates,
        } => {
            let service = order_service(
                FixedRates::new(rates),
                QuoteTable::default(),
                ScriptedGateway::approving(),
            );
            let converted = service
                .get_price_in_currency(price, &currency)
                .await
                .into_diagnostic()?;
            println!("{converted}");
        }
        Command::Shipping {
            destination,
            quotes,
        } => {
            let service = order_service(
                FixedRates::default(),
                QuoteTable::new(quotes),
                ScriptedGateway::approving(),
            );
            let info = service
                .get_shipping_info(&destination)
                .await
                .into_diagnostic()?;
            println!("{info}");
        }
        Command::Checkout {
            amount,
            card,
            decline,
        } => {
            let gateway = if decline {
                ScriptedGateway::declining()
            } else {
                ScriptedGateway::approving()
            };
            let service = order_service(FixedRates::default(), QuoteTable::default(), gateway);
            let outcome = service
                .submit_order(
                    &Order {
                        total_amount: amount,
                    },
                    &PaymentMethod::card(card),
                )
                .await
                .into_diagnostic()?;
            println!("{}", serde_json::to_string(&outcome).into_diagnostic()?);
        }
        Command::Signup { email } => {
            let outbox = Outbox::new();
            let service = AccountService::new(
                Box::new(outbox.clone()),
                Box::new(SequentialCodes::starting_at(100_000)),
            );
            let accepted = service.sign_up(&email).await.into_diagnostic()?;
            println!("{accepted}");
            for mail in outbox.sent().await {
                println!("sent to {}: {}", mail.to, mail.body);
            }
        }
        Command::Login { email } => {
            let outbox = Outbox::new();
            let service = AccountService::new(
                Box::new(outbox.clone()),
                Box::new(SequentialCodes::starting_at(100_000)),
            );
            service.login(&email).await.into_diagnostic()?;
            let sent = outbox.sent().await;
            let mail = sent
                .first()
                .ok_or_else(|| miette!("no login email was sent"))?;
            println!("sent to {}: {}", mail.to, mail.body);
        }
    }

    Ok(())
}
