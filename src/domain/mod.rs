//! Domain layer: value types, pure business rules and the ports through
//! which the workflows reach external services.

pub mod account;
pub mod coupon;
pub mod order;
pub mod ports;
pub mod rules;
pub mod validation;
