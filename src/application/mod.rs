//! Application layer orchestrating the business workflows.
//!
//! `OrderService` and `AccountService` combine the pure rules from the domain
//! layer with calls into the injected ports. Each call is a single pass: it
//! awaits its collaborators in order and keeps nothing between invocations.

pub mod accounts;
pub mod orders;
