//! Domain data types for profiles and profile agents
//!
//! All resources are server-owned; beyond the identifiers this client
//! routes on, response shapes are passed through untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque authorization capability (zcap) in JSON-LD form.
///
/// Capabilities are minted and interpreted server-side; the client only
/// forwards them.
pub type Zcap = Value;

/// A server-managed identity resource, optionally backed by a DID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Profile identifier (typically a DID)
    pub id: String,
    /// Remaining server-defined fields, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A credentialed delegate acting on behalf of a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileAgent {
    /// Profile agent identifier
    pub id: String,
    /// Account the agent is bound to, once claimed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Profile the agent acts on behalf of
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// Remaining server-defined fields, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Named capability slots granted to one profile agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapabilitySet {
    /// Capability slot name -> zcap
    pub zcaps: BTreeMap<String, Zcap>,
}

/// DID method used when creating a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DidMethod {
    /// `did:key`
    Key,
    /// `did:v1` (Veres One)
    V1,
}

/// Result of a delete operation.
///
/// Deleting a resource the server no longer knows about is idempotent
/// success, not an error; the variants keep the two cases distinguishable
/// for callers that care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum DeleteOutcome {
    /// The server removed the resource (204 No Content)
    Deleted,
    /// The server reported the resource missing (404)
    AlreadyGone,
}

impl DeleteOutcome {
    /// Whether the resource existed before the call.
    pub fn was_present(self) -> bool {
        matches!(self, Self::Deleted)
    }
}
