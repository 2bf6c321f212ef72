//! Profile service integration
//!
//! Client surface for managing profiles and delegated profile agents
//! against the remote profile service HTTP API.
//!
//! # Architecture
//!
//! - **Client**: [`ProfileClient`] - one method per service operation,
//!   each issuing exactly one HTTP request
//! - **Types**: per-operation request structs with camelCase wire names
//! - **Error Handling**: normalized through `profiles_domain::ProfileError`
//!
//! # Usage
//!
//! ```no_run
//! use profiles_client::profiles::{CreateProfileRequest, ProfileClient, ProfileClientConfig};
//! use profiles_domain::DidMethod;
//!
//! # async fn example() -> profiles_domain::Result<()> {
//! let config = ProfileClientConfig {
//!     base_url: Some("https://bedrock.example".parse().expect("valid url")),
//!     ..Default::default()
//! };
//! let client = ProfileClient::new(config)?;
//!
//! let profile = client
//!     .create_profile(CreateProfileRequest {
//!         account: "account-1".to_string(),
//!         did_method: Some(DidMethod::Key),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! println!("created profile {}", profile.id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::{ProfileClient, ProfileClientConfig};
pub use types::{
    AgentByProfileRequest, ClaimAgentRequest, CreateAgentRequest, CreateProfileRequest,
    DelegateCapabilityRequest, DeleteAgentRequest, DeleteCapabilitySetRequest, GetAgentRequest,
    ListAgentsRequest, SetCapabilitySetRequest,
};
