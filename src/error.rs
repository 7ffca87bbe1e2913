use crate::domain::validation::InvalidInput;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("{service} service error: {message}")]
    ServiceError {
        service: &'static str,
        message: String,
    },
    #[error("Coupon catalog error: {0}")]
    CatalogError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
}

impl StorefrontError {
    pub fn service(service: &'static str, message: impl Into<String>) -> Self {
        Self::ServiceError {
            service,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
