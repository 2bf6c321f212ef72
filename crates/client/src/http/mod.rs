//! HTTP transport
//!
//! Wraps `reqwest` behind a small surface that maps network failures and
//! non-2xx responses into the domain error taxonomy.

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
