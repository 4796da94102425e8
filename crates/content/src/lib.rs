//! `shopfront-content` — read-only client for the headless content backend.
//!
//! One concern: issue the product projection query against the hosted query
//! endpoint and decode the response envelope. No write operations exist; the
//! backend's own query engine is an opaque collaborator.

pub mod client;
pub mod config;
pub mod error;
pub mod image;
pub mod query;

pub use client::ContentClient;
pub use config::ContentConfig;
pub use error::{ContentError, ContentResult};
