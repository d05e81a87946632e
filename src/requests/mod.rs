//! Requests Source
//!
//! Wire model and HTTP client for the CheckInn requests endpoint.

pub mod client;
pub mod model;

pub use client::{FetchError, HttpRequestSource, RequestSource};
pub use model::{Desk, Hotel, Request, RequestsEnvelope};
