//! # Profiles Client
//!
//! HTTP client for the profile service API.
//!
//! This crate contains:
//! - A thin HTTP transport wrapper with uniform error normalization
//! - The profile / profile-agent service surface (`ProfileClient`)
//!
//! ## Architecture
//! - Depends on `profiles-domain` for types and errors
//! - Contains all "impure" code (network I/O)
//! - Holds no state beyond configuration; every call is one request

pub mod http;
pub mod profiles;

// Re-export commonly used items
pub use http::{HttpClient, HttpClientBuilder};
pub use profiles::{ProfileClient, ProfileClientConfig};
