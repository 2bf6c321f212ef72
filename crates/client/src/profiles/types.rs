//! Request types for the profile service API
//!
//! Fields serialized into a JSON body use their camelCase wire names;
//! fields routed into the URL path or query string carry `#[serde(skip)]`.
//! Every request accepts an optional `path` override, falling back to the
//! collection path configured on the client.

use profiles_domain::{CapabilitySet, DidMethod, Zcap};
use serde::Serialize;
use serde_json::Value;

/// Create a profile owned by an account. (POST profiles-path)
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    /// Owning account ID
    pub account: String,
    /// DID method backing the profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_method: Option<DidMethod>,
    /// DID method options, passed through to the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_options: Option<Value>,
    /// Path override
    #[serde(skip)]
    pub path: Option<String>,
}

/// Create a profile agent. (POST agents-path)
///
/// All body fields are optional: an agent created with only an application
/// `token` is claimed by an account later.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAgentRequest {
    /// Account ID the agent belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Profile ID the agent acts on behalf of
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// Application token carried at creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Path override
    #[serde(skip)]
    pub path: Option<String>,
}

/// Claim a profile agent for an account. (POST agents-path/{id}/claim)
#[derive(Debug, Clone, Serialize)]
pub struct ClaimAgentRequest {
    /// Profile agent ID to associate with the account
    #[serde(skip)]
    pub agent_id: String,
    /// Claiming account ID
    pub account: String,
    /// Path override
    #[serde(skip)]
    pub path: Option<String>,
}

/// List the profile agents of an account. (GET agents-path)
#[derive(Debug, Clone, Default)]
pub struct ListAgentsRequest {
    /// Account ID to list agents for
    pub account: String,
    /// Path override
    pub path: Option<String>,
}

/// Fetch a single profile agent. (GET agents-path/{id})
#[derive(Debug, Clone, Default)]
pub struct GetAgentRequest {
    /// Profile agent ID
    pub id: String,
    /// Account ID the agent belongs to
    pub account: String,
    /// Path override
    pub path: Option<String>,
}

/// Delete a profile agent. (DELETE agents-path/{id})
#[derive(Debug, Clone, Default)]
pub struct DeleteAgentRequest {
    /// Profile agent ID
    pub id: String,
    /// Account ID the agent belongs to
    pub account: String,
    /// Path override
    pub path: Option<String>,
}

/// Look up the agent bound to a profile. (GET agents-path?profile=&account=)
#[derive(Debug, Clone, Default)]
pub struct AgentByProfileRequest {
    /// Profile ID to look up by
    pub profile: String,
    /// Account ID the agent belongs to
    pub account: String,
    /// Path override
    pub path: Option<String>,
}

/// Delegate a capability to a profile agent.
/// (POST agents-path/{id}/capabilities/delegate)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegateCapabilityRequest {
    /// Profile agent ID the capability is delegated through
    #[serde(skip)]
    pub agent_id: String,
    /// Account ID the agent belongs to
    pub account: String,
    /// Controller to delegate the capability to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller: Option<String>,
    /// Invoker to delegate the capability to (older deployments)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoker: Option<String>,
    /// The capability to delegate
    pub zcap: Zcap,
    /// Path override
    #[serde(skip)]
    pub path: Option<String>,
}

/// Replace the capability set of a profile agent.
/// (POST agents-path/{id}/capability-set)
#[derive(Debug, Clone, Default)]
pub struct SetCapabilitySetRequest {
    /// Profile agent ID
    pub agent_id: String,
    /// Account ID, sent as a query parameter
    pub account: String,
    /// The full capability set to install
    pub capability_set: CapabilitySet,
    /// Path override
    pub path: Option<String>,
}

/// Delete the capability set of a profile agent.
/// (DELETE agents-path/{id}/capability-set)
#[derive(Debug, Clone, Default)]
pub struct DeleteCapabilitySetRequest {
    /// Profile agent ID
    pub agent_id: String,
    /// Account ID, sent as a query parameter
    pub account: String,
    /// Path override
    pub path: Option<String>,
}
