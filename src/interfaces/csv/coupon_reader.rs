use crate::domain::coupon::{Coupon, CouponCatalog};
use crate::error::{Result, StorefrontError};
use std::io::Read;

/// Reads coupons from a CSV source with a `code,discount` header.
///
/// Whitespace around fields is trimmed, so hand-edited files with padded
/// columns load fine.
pub struct CouponReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CouponReader<R> {
    /// Creates a new `CouponReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes one coupon per record.
    pub fn coupons(self) -> impl Iterator<Item = Result<Coupon>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(StorefrontError::from))
    }

    /// Reads the whole source into a validated catalog.
    ///
    /// Fails on the first malformed record rather than skipping it: a
    /// half-loaded catalog would silently stop honouring some codes.
    pub fn into_catalog(self) -> Result<CouponCatalog> {
        let coupons = self.coupons().collect::<Result<Vec<_>>>()?;
        CouponCatalog::new(coupons)
    }
}
