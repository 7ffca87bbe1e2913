use crate::domain::validation::InvalidInput;
use crate::error::{Result, StorefrontError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::LazyLock;

/// A discount code and the fraction of the price it takes off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
    pub discount: Decimal,
}

impl Coupon {
    pub fn new(code: impl Into<String>, discount: Decimal) -> Self {
        Self {
            code: code.into(),
            discount,
        }
    }
}

static BUILTIN: LazyLock<CouponCatalog> = LazyLock::new(|| CouponCatalog {
    coupons: vec![
        Coupon::new("SAVE10", dec!(0.1)),
        Coupon::new("SAVE20", dec!(0.2)),
    ],
});

/// Read-only, ordered set of coupons.
///
/// A catalog is built once (either the built-in one or one loaded at startup)
/// and only ever handed out by shared reference afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponCatalog {
    coupons: Vec<Coupon>,
}

impl CouponCatalog {
    /// Builds a catalog, rejecting empty catalogs, blank codes and discounts
    /// outside `(0, 1]`.
    pub fn new(coupons: Vec<Coupon>) -> Result<Self> {
        if coupons.is_empty() {
            return Err(StorefrontError::CatalogError(
                "catalog must contain at least one coupon".to_string(),
            ));
        }

        for coupon in &coupons {
            if coupon.code.trim().is_empty() {
                return Err(StorefrontError::CatalogError(
                    "coupon code must not be empty".to_string(),
                ));
            }
            if coupon.discount <= Decimal::ZERO || coupon.discount > Decimal::ONE {
                return Err(StorefrontError::CatalogError(format!(
                    "discount for {} must be in (0, 1], got {}",
                    coupon.code, coupon.discount
                )));
            }
        }

        Ok(Self { coupons })
    }

    pub fn builtin() -> &'static CouponCatalog {
        &BUILTIN
    }

    pub fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }

    /// Exact, case-sensitive lookup.
    pub fn find(&self, code: &str) -> Option<&Coupon> {
        self.coupons.iter().find(|coupon| coupon.code == code)
    }

    /// Applies the coupon named by `code` to `price`.
    ///
    /// An unknown code is not an error: the price comes back unchanged.
    pub fn calculate_discount(
        &self,
        price: Decimal,
        code: &str,
    ) -> std::result::Result<Decimal, InvalidInput> {
        if price < Decimal::ZERO {
            return Err(InvalidInput::Price("must not be negative".to_string()));
        }

        Ok(match self.find(code) {
            Some(coupon) => price * (Decimal::ONE - coupon.discount),
            None => price,
        })
    }

    /// Boundary variant of [`CouponCatalog::calculate_discount`] for untyped
    /// input. Numeric strings such as `"10"` are not accepted as prices.
    pub fn calculate_discount_value(
        &self,
        price: &Value,
        code: &Value,
    ) -> std::result::Result<Decimal, InvalidInput> {
        let price = decimal_from_json(price)?;
        let code = code
            .as_str()
            .ok_or_else(|| InvalidInput::DiscountCode("must be a string".to_string()))?;

        self.calculate_discount(price, code)
    }
}

/// The built-in coupon catalog.
pub fn get_coupons() -> &'static [Coupon] {
    CouponCatalog::builtin().coupons()
}

/// [`CouponCatalog::calculate_discount`] against the built-in catalog.
pub fn calculate_discount(price: Decimal, code: &str) -> std::result::Result<Decimal, InvalidInput> {
    CouponCatalog::builtin().calculate_discount(price, code)
}

/// [`CouponCatalog::calculate_discount_value`] against the built-in catalog.
pub fn calculate_discount_value(
    price: &Value,
    code: &Value,
) -> std::result::Result<Decimal, InvalidInput> {
    CouponCatalog::builtin().calculate_discount_value(price, code)
}

/// Reads a JSON number as a price.
///
/// Numbers too large for `Decimal` are reported as out of range rather than
/// as non-numeric.
pub(crate) fn decimal_from_json(value: &Value) -> std::result::Result<Decimal, InvalidInput> {
    let Value::Number(number) = value else {
        return Err(InvalidInput::Price("must be a number".to_string()));
    };
    if let Some(int) = number.as_i64() {
        return Ok(Decimal::from(int));
    }
    if let Some(int) = number.as_u64() {
        return Ok(Decimal::from(int));
    }
    number
        .as_f64()
        .and_then(|f| Decimal::try_from(f).ok())
        .ok_or_else(|| InvalidInput::Price(format!("{number} is out of range")))
}
