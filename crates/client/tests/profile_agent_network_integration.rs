//! Integration tests for ProfileClient against a mock profile service
//!
//! **Purpose**: Test the critical path from typed request → HTTP wire
//! format → response decoding across a full profile-agent lifecycle
//!
//! **Coverage:**
//! - Happy path: create profile → create agent → claim → lookup →
//!   delegate → capability set → deletes
//! - Idempotent deletes: repeated delete resolves without error
//! - Error surface: structured server errors keep type and message
//! - Concurrent calls on one cloned client
//!
//! **Infrastructure:**
//! - WireMock HTTP server (simulates the profile service)
//! - Real ProfileClient with its default transport

use std::sync::OnceLock;

use profiles_client::profiles::{
    AgentByProfileRequest, ClaimAgentRequest, CreateAgentRequest, CreateProfileRequest,
    DelegateCapabilityRequest, DeleteAgentRequest, DeleteCapabilitySetRequest, ListAgentsRequest,
    ProfileClient, ProfileClientConfig, SetCapabilitySetRequest,
};
use profiles_domain::{CapabilitySet, DeleteOutcome, DidMethod, ProfileError};
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_tracing() {
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

fn client_for(server: &MockServer) -> ProfileClient {
    let config = ProfileClientConfig {
        base_url: Some(server.uri().parse().expect("mock server uri")),
        ..Default::default()
    };
    ProfileClient::new(config).expect("profile client")
}

#[tokio::test]
async fn full_profile_agent_lifecycle() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/profiles"))
        .and(body_json(json!({"account": "acct-1", "didMethod": "key"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "did:key:z6MkProfile"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/profile-agents"))
        .and(body_json(json!({"profile": "did:key:z6MkProfile", "token": "app-token"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "agent-1",
            "profile": "did:key:z6MkProfile",
            "sequence": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/profile-agents/agent-1/claim"))
        .and(body_json(json!({"account": "acct-1"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/profile-agents"))
        .and(query_param("profile", "did:key:z6MkProfile"))
        .and(query_param("account", "acct-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "agent-1",
            "account": "acct-1",
            "profile": "did:key:z6MkProfile"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/profile-agents/agent-1/capabilities/delegate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "urn:zcap:delegated",
            "controller": "did:key:z6MkApp"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/profile-agents/agent-1/capability-set"))
        .and(query_param("account", "acct-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/profile-agents/agent-1/capability-set"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    // First agent delete succeeds with 204; the repeat reports 404.
    Mock::given(method("DELETE"))
        .and(path("/profile-agents/agent-1"))
        .respond_with(ResponseTemplate::new(204))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/profile-agents/agent-1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "type": "NotFoundError",
            "message": "Profile agent not found."
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let profile = assert_ok!(
        client
            .create_profile(CreateProfileRequest {
                account: "acct-1".to_string(),
                did_method: Some(DidMethod::Key),
                ..Default::default()
            })
            .await
    );
    assert_eq!(profile.id, "did:key:z6MkProfile");

    let agent = assert_ok!(
        client
            .create_agent(CreateAgentRequest {
                profile: Some(profile.id.clone()),
                token: Some("app-token".to_string()),
                ..Default::default()
            })
            .await
    );
    assert_eq!(agent.id, "agent-1");

    assert_ok!(
        client
            .claim_agent(ClaimAgentRequest {
                agent_id: agent.id.clone(),
                account: "acct-1".to_string(),
                path: None,
            })
            .await
    );

    let looked_up = assert_ok!(
        client
            .get_agent_by_profile(AgentByProfileRequest {
                profile: profile.id.clone(),
                account: "acct-1".to_string(),
                path: None,
            })
            .await
    );
    assert_eq!(looked_up.account.as_deref(), Some("acct-1"));

    let zcap = assert_ok!(
        client
            .delegate_agent_capability(DelegateCapabilityRequest {
                agent_id: agent.id.clone(),
                account: "acct-1".to_string(),
                controller: Some("did:key:z6MkApp".to_string()),
                invoker: None,
                zcap: json!({"id": "urn:zcap:parent"}),
                path: None,
            })
            .await
    );
    assert_eq!(zcap["id"], json!("urn:zcap:delegated"));

    let mut capability_set = CapabilitySet::default();
    capability_set.zcaps.insert("userDocs".to_string(), zcap);
    let updated = assert_ok!(
        client
            .set_capability_set(SetCapabilitySetRequest {
                agent_id: agent.id.clone(),
                account: "acct-1".to_string(),
                capability_set,
                path: None,
            })
            .await
    );
    assert!(updated);

    let outcome = assert_ok!(
        client
            .delete_capability_set(DeleteCapabilitySetRequest {
                agent_id: agent.id.clone(),
                account: "acct-1".to_string(),
                path: None,
            })
            .await
    );
    assert_eq!(outcome, DeleteOutcome::Deleted);

    let first = assert_ok!(
        client
            .delete_agent(DeleteAgentRequest {
                id: agent.id.clone(),
                account: "acct-1".to_string(),
                path: None,
            })
            .await
    );
    assert_eq!(first, DeleteOutcome::Deleted);

    let second = assert_ok!(
        client
            .delete_agent(DeleteAgentRequest {
                id: agent.id,
                account: "acct-1".to_string(),
                path: None,
            })
            .await
    );
    assert_eq!(second, DeleteOutcome::AlreadyGone);
}

#[tokio::test]
async fn structured_server_error_keeps_type_and_message() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/profile-agents/agent-1/claim"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "type": "NotAllowedError",
            "message": "Account is not allowed to claim this agent."
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .claim_agent(ClaimAgentRequest {
            agent_id: "agent-1".to_string(),
            account: "acct-2".to_string(),
            path: None,
        })
        .await
        .expect_err("403 must surface");

    assert_eq!(err.status(), Some(403));
    let rendered = err.to_string();
    assert!(rendered.contains("NotAllowedError"));
    assert!(rendered.contains("not allowed to claim"));
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profile-agents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "agent-1"}])))
        .expect(3)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let second = client.clone();
    let third = client.clone();
    let request = || ListAgentsRequest { account: "acct-1".to_string(), path: None };

    let (a, b, c) = tokio::join!(
        client.list_agents(request()),
        second.list_agents(request()),
        third.list_agents(request()),
    );

    for result in [a, b, c] {
        let agents = result.expect("list should succeed");
        assert_eq!(agents.len(), 1);
    }
}

#[tokio::test]
async fn lookup_miss_is_an_error_not_a_silent_absence() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profile-agents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_agent_by_profile(AgentByProfileRequest {
            profile: "did:key:z6MkMissing".to_string(),
            account: "acct-1".to_string(),
            path: None,
        })
        .await
        .expect_err("empty lookup must error");

    assert!(matches!(err, ProfileError::NotFound(_)));
}
