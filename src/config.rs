use crate::domain::coupon::CouponCatalog;
use crate::domain::validation::UsernamePolicy;
use crate::error::{Result, StorefrontError};
use crate::interfaces::csv::coupon_reader::CouponReader;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Rule configuration, assembled once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RulesConfig {
    pub username: UsernamePolicy,
    pub coupons: CouponCatalog,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            username: UsernamePolicy::default(),
            coupons: CouponCatalog::builtin().clone(),
        }
    }
}

impl RulesConfig {
    /// Starts from the defaults and applies whichever overrides are given.
    pub fn load(
        coupons_path: Option<&Path>,
        min_username_len: Option<usize>,
        max_username_len: Option<usize>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(min) = min_username_len {
            config.username.min_length = min;
        }
        if let Some(max) = max_username_len {
            config.username.max_length = max;
        }
        if config.username.min_length > config.username.max_length {
            return Err(StorefrontError::ConfigError(format!(
                "minimum username length {} exceeds maximum {}",
                config.username.min_length, config.username.max_length
            )));
        }

        if let Some(path) = coupons_path {
            let file = File::open(path)?;
            config.coupons = CouponReader::new(file).into_catalog()?;
            info!(
                path = %path.display(),
                coupons = config.coupons.coupons().len(),
                "loaded coupon catalog"
            );
        }

        Ok(config)
    }
}
