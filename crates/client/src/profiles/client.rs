//! Profile service client
//!
//! CRUD-style operations for profiles and delegated profile agents. Each
//! method maps one-to-one onto a single HTTP request and passes the
//! decoded response body through; the client holds no state beyond its
//! configuration.

use std::time::Duration;

use profiles_domain::constants::{DEFAULT_AGENTS_PATH, DEFAULT_PROFILES_PATH};
use profiles_domain::{
    DeleteOutcome, Profile, ProfileAgent, ProfileError, Result, Zcap,
};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use crate::http::HttpClient;

use super::types::{
    AgentByProfileRequest, ClaimAgentRequest, CreateAgentRequest, CreateProfileRequest,
    DelegateCapabilityRequest, DeleteAgentRequest, DeleteCapabilitySetRequest, GetAgentRequest,
    ListAgentsRequest, SetCapabilitySetRequest,
};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`ProfileClient`].
///
/// Passed explicitly at construction; there is no shared mutable default.
#[derive(Debug, Clone)]
pub struct ProfileClientConfig {
    /// Absolute endpoint (protocol, host, port) that operation paths are
    /// resolved against, e.g. `https://bedrock.example`. When absent,
    /// per-operation paths must themselves be absolute URLs.
    pub base_url: Option<Url>,
    /// Collection path for profile resources
    pub profiles_path: String,
    /// Collection path for profile agent resources
    pub agents_path: String,
    /// Timeout applied to every request
    pub timeout: Duration,
}

impl Default for ProfileClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            profiles_path: DEFAULT_PROFILES_PATH.to_string(),
            agents_path: DEFAULT_AGENTS_PATH.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Client for the profiles / profile-agents HTTP API.
///
/// All entities are server-owned; responses are decoded and passed through.
/// Errors are normalized into [`ProfileError`], with one deliberate
/// exception: deleting a resource the server already reports missing is
/// idempotent success ([`DeleteOutcome::AlreadyGone`]), not an error.
///
/// Calls are independent requests. Callers that need ordering (claim
/// before delegation, for example) serialize themselves.
#[derive(Clone)]
pub struct ProfileClient {
    http_client: HttpClient,
    config: ProfileClientConfig,
}

impl ProfileClient {
    /// Create a client, building its HTTP transport from the configured
    /// timeout.
    ///
    /// # Errors
    /// Returns [`ProfileError::Config`] if the transport cannot be built.
    pub fn new(config: ProfileClientConfig) -> Result<Self> {
        let http_client = HttpClient::builder().timeout(config.timeout).build()?;
        Ok(Self { http_client, config })
    }

    /// Create a client with an injected transport (custom TLS roots,
    /// default headers).
    pub fn with_http_client(config: ProfileClientConfig, http_client: HttpClient) -> Self {
        Self { http_client, config }
    }

    /// Create a new profile owned by `account`.
    pub async fn create_profile(&self, request: CreateProfileRequest) -> Result<Profile> {
        let url = self.endpoint(request.path.as_deref(), &self.config.profiles_path, &[])?;
        let builder = self.http_client.request(Method::POST, url).json(&request);

        let response = self.http_client.send(builder).await?;
        let profile: Profile = decode(response).await?;

        info!(profile = %profile.id, "profile created");
        Ok(profile)
    }

    /// Create a new profile agent.
    pub async fn create_agent(&self, request: CreateAgentRequest) -> Result<ProfileAgent> {
        let url = self.endpoint(request.path.as_deref(), &self.config.agents_path, &[])?;
        let builder = self.http_client.request(Method::POST, url).json(&request);

        let response = self.http_client.send(builder).await?;
        let agent: ProfileAgent = decode(response).await?;

        info!(agent = %agent.id, "profile agent created");
        Ok(agent)
    }

    /// Claim a profile agent by associating an account with it.
    ///
    /// The service acknowledges with 204 No Content; there is no body to
    /// decode.
    pub async fn claim_agent(&self, request: ClaimAgentRequest) -> Result<()> {
        let url = self.endpoint(
            request.path.as_deref(),
            &self.config.agents_path,
            &[&request.agent_id, "claim"],
        )?;
        let builder = self.http_client.request(Method::POST, url).json(&request);

        self.http_client.send(builder).await?;

        info!(agent = %request.agent_id, "profile agent claimed");
        Ok(())
    }

    /// List all profile agents of an account.
    pub async fn list_agents(&self, request: ListAgentsRequest) -> Result<Vec<ProfileAgent>> {
        let url = self.endpoint(request.path.as_deref(), &self.config.agents_path, &[])?;
        let builder = self
            .http_client
            .request(Method::GET, url)
            .query(&[("account", request.account.as_str())]);

        let response = self.http_client.send(builder).await?;
        let agents: Vec<ProfileAgent> = decode(response).await?;

        debug!(count = agents.len(), "profile agents listed");
        Ok(agents)
    }

    /// Fetch a single profile agent by id.
    pub async fn get_agent(&self, request: GetAgentRequest) -> Result<ProfileAgent> {
        let url =
            self.endpoint(request.path.as_deref(), &self.config.agents_path, &[&request.id])?;
        let builder = self
            .http_client
            .request(Method::GET, url)
            .query(&[("account", request.account.as_str())]);

        let response = self.http_client.send(builder).await?;
        decode(response).await
    }

    /// Delete a profile agent.
    ///
    /// A server-side 404 is treated as idempotent success and reported as
    /// [`DeleteOutcome::AlreadyGone`].
    pub async fn delete_agent(&self, request: DeleteAgentRequest) -> Result<DeleteOutcome> {
        let url =
            self.endpoint(request.path.as_deref(), &self.config.agents_path, &[&request.id])?;
        let builder = self
            .http_client
            .request(Method::DELETE, url)
            .query(&[("account", request.account.as_str())]);

        match self.http_client.send(builder).await {
            Ok(_) => {
                info!(agent = %request.id, "profile agent deleted");
                Ok(DeleteOutcome::Deleted)
            }
            Err(ProfileError::Remote(err)) if err.is_not_found() => {
                warn!(agent = %request.id, "profile agent already gone");
                Ok(DeleteOutcome::AlreadyGone)
            }
            Err(err) => Err(err),
        }
    }

    /// Look up the profile agent bound to a profile.
    ///
    /// The service answers with an array; only the first element is
    /// returned. An empty result is surfaced as
    /// [`ProfileError::NotFound`], never as a silent absence.
    pub async fn get_agent_by_profile(
        &self,
        request: AgentByProfileRequest,
    ) -> Result<ProfileAgent> {
        let url = self.endpoint(request.path.as_deref(), &self.config.agents_path, &[])?;
        let builder = self.http_client.request(Method::GET, url).query(&[
            ("profile", request.profile.as_str()),
            ("account", request.account.as_str()),
        ]);

        let response = self.http_client.send(builder).await?;
        let mut agents: Vec<ProfileAgent> = decode(response).await?;

        if agents.is_empty() {
            return Err(ProfileError::NotFound(format!(
                "no profile agent for profile \"{}\"",
                request.profile
            )));
        }
        Ok(agents.remove(0))
    }

    /// Delegate a capability through a profile agent, returning the
    /// delegated zcap.
    pub async fn delegate_agent_capability(
        &self,
        request: DelegateCapabilityRequest,
    ) -> Result<Zcap> {
        let url = self.endpoint(
            request.path.as_deref(),
            &self.config.agents_path,
            &[&request.agent_id, "capabilities", "delegate"],
        )?;
        let builder = self.http_client.request(Method::POST, url).json(&request);

        let response = self.http_client.send(builder).await?;
        let zcap: Zcap = decode(response).await?;

        info!(agent = %request.agent_id, "capability delegated");
        Ok(zcap)
    }

    /// Replace the capability set of a profile agent.
    ///
    /// Returns `true` when the server acknowledged the update with
    /// 204 No Content.
    pub async fn set_capability_set(&self, request: SetCapabilitySetRequest) -> Result<bool> {
        let url = self.endpoint(
            request.path.as_deref(),
            &self.config.agents_path,
            &[&request.agent_id, "capability-set"],
        )?;
        let builder = self
            .http_client
            .request(Method::POST, url)
            .query(&[("account", request.account.as_str())])
            .json(&request.capability_set);

        let response = self.http_client.send(builder).await?;
        let updated = response.status() == StatusCode::NO_CONTENT;

        info!(agent = %request.agent_id, updated, "capability set updated");
        Ok(updated)
    }

    /// Delete the capability set of a profile agent.
    ///
    /// Follows the same idempotence rule as [`Self::delete_agent`]: a 404
    /// reports [`DeleteOutcome::AlreadyGone`].
    pub async fn delete_capability_set(
        &self,
        request: DeleteCapabilitySetRequest,
    ) -> Result<DeleteOutcome> {
        let url = self.endpoint(
            request.path.as_deref(),
            &self.config.agents_path,
            &[&request.agent_id, "capability-set"],
        )?;
        let builder = self
            .http_client
            .request(Method::DELETE, url)
            .query(&[("account", request.account.as_str())]);

        match self.http_client.send(builder).await {
            Ok(_) => {
                info!(agent = %request.agent_id, "capability set deleted");
                Ok(DeleteOutcome::Deleted)
            }
            Err(ProfileError::Remote(err)) if err.is_not_found() => {
                warn!(agent = %request.agent_id, "capability set already gone");
                Ok(DeleteOutcome::AlreadyGone)
            }
            Err(err) => Err(err),
        }
    }

    /// Build the request URL for an operation.
    ///
    /// Caller-supplied identifiers are inserted as percent-encoded path
    /// segments so reserved characters cannot change the request path.
    /// With a configured base URL the path is resolved against it; without
    /// one the path must itself be absolute.
    fn endpoint(
        &self,
        path_override: Option<&str>,
        default_path: &str,
        segments: &[&str],
    ) -> Result<Url> {
        let mut path = path_override.unwrap_or(default_path).to_string();
        for segment in segments {
            path.push('/');
            path.push_str(&urlencoding::encode(segment));
        }

        match &self.config.base_url {
            Some(base) => base
                .join(&path)
                .map_err(|err| ProfileError::Config(format!("Invalid request path {path:?}: {err}"))),
            None => Url::parse(&path).map_err(|_| {
                ProfileError::Config(format!(
                    "Relative path {path:?} requires a configured base URL"
                ))
            }),
        }
    }
}

/// Decode a JSON response body.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json()
        .await
        .map_err(|err| ProfileError::Transport(format!("Failed to parse response: {err}")))
}
