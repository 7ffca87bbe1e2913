//! Adapters for data entering the crate from outside.

pub mod csv;
