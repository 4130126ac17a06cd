//! Async HTTP client for the remote employee directory.
//!
//! Wraps one GET endpoint that serves the full employee collection, maps the
//! raw records into [`staffdir_core::employee::Employee`] entities, derives
//! single-record lookup from the collection fetch, and provides the URL
//! token codec used to embed identifiers in navigable paths.

mod client;
pub mod token;


pub use client::{ClientConfig, DirectoryClient};
