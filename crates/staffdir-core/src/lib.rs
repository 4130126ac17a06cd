//! Core types for the staffdir employee-directory client.
//!
//! This crate is deliberately free of HTTP dependencies. The client and the
//! CLI both depend on it; it depends on nothing network-facing.

pub mod employee;
pub mod error;
pub mod status;

pub use error::{Error, Result};
