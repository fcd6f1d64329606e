//! Team client against a mock Concourse server

use concourse_team_broker::domain::team::{
    AdminCredentials, PlatformAuth, TeamClient, TeamClientError,
};
use concourse_team_broker::domain::TenantDetails;
use concourse_team_broker::infrastructure::concourse::{ConcourseHttpClient, ConcourseTeamClient};
use serde_json::json;
use wiremock::matchers::{basic_auth, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn platform_auth() -> PlatformAuth {
    PlatformAuth {
        client_id: "concourse".to_string(),
        client_secret: "uaa-secret".to_string(),
        auth_url: "https://login.example.com/oauth/authorize".to_string(),
        token_url: "https://uaa.example.com/oauth/token".to_string(),
        cf_url: "https://api.example.com".to_string(),
        cf_ca_cert: String::new(),
    }
}

fn team_client(server: &MockServer) -> ConcourseTeamClient<ConcourseHttpClient> {
    let http = ConcourseHttpClient::new(&server.uri()).unwrap();
    ConcourseTeamClient::new(http, AdminCredentials::new("admin", "password"), platform_auth())
}

fn acme() -> TenantDetails {
    TenantDetails::new("acme", "org-guid", "space-guid")
}

async fn mount_token(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/teams/main/auth/token"))
        .and(basic_auth("admin", "password"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"type": "Bearer", "value": "tok"})),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_create_team() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/acme/auth/methods"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/teams/acme"))
        .and(header("authorization", "Bearer tok"))
        .and(body_partial_json(json!({
            "name": "acme",
            "uaa_auth": {
                "client_id": "concourse",
                "client_secret": "uaa-secret",
                "cf_spaces": ["space-guid"],
                "cf_url": "https://api.example.com"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 7, "name": "acme"})))
        .expect(1)
        .mount(&server)
        .await;

    team_client(&server).create_team(&acme()).await.unwrap();
}

#[tokio::test]
async fn test_create_existing_team_conflicts() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/acme/auth/methods"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"type": "oauth", "display_name": "UAA", "auth_url": "https://ci.example.com/auth/uaa"}
        ])))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/teams/acme"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let err = team_client(&server).create_team(&acme()).await.unwrap_err();

    assert_eq!(err, TeamClientError::already_exists("acme"));
}

#[tokio::test]
async fn test_create_reported_as_update() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/acme/auth/methods"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/teams/acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7, "name": "acme"})))
        .mount(&server)
        .await;

    let err = team_client(&server).create_team(&acme()).await.unwrap_err();

    assert_eq!(err, TeamClientError::unexpected_state("acme", false, true));
}

#[tokio::test]
async fn test_token_failure_stops_provisioning() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/main/auth/token"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/acme/auth/methods"))
        .respond_with(ResponseTemplate::new(404))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/teams/acme"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let err = team_client(&server).create_team(&acme()).await.unwrap_err();

    assert!(matches!(err, TeamClientError::Auth { .. }));
    assert!(err.to_string().contains("boom"));
}

#[tokio::test]
async fn test_existence_check_server_error() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/acme/auth/methods"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/teams/acme"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let err = team_client(&server).create_team(&acme()).await.unwrap_err();

    assert!(matches!(
        err,
        TeamClientError::Server {
            status: Some(503),
            ..
        }
    ));
}

#[tokio::test]
async fn test_delete_team() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/teams/acme"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    team_client(&server).delete_team(&acme()).await.unwrap();
}

#[tokio::test]
async fn test_delete_missing_team() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/teams/acme"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = team_client(&server).delete_team(&acme()).await.unwrap_err();

    assert_eq!(err, TeamClientError::server(Some(404), "team not found"));
}

#[tokio::test]
async fn test_delete_token_failure_skips_destroy() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/main/auth/token"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/teams/acme"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let err = team_client(&server).delete_team(&acme()).await.unwrap_err();

    assert!(matches!(err, TeamClientError::Auth { .. }));
}

#[tokio::test]
async fn test_unreachable_server_fails_authentication() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let http = ConcourseHttpClient::new(&uri).unwrap();
    let client =
        ConcourseTeamClient::new(http, AdminCredentials::new("admin", "password"), platform_auth());

    let err = client.delete_team(&acme()).await.unwrap_err();

    // The token request is the first call made
    assert!(matches!(err, TeamClientError::Auth { .. }));
}

#[tokio::test]
async fn test_dot_segment_organization_never_reaches_other_endpoints() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    // Where `.` and `..` would land once resolved as dot-segments
    Mock::given(method("GET"))
        .and(path("/api/v1/teams/auth/methods"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/teams"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/teams"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let client = team_client(&server);

    for name in [".", ".."] {
        let details = TenantDetails::new(name, "org-guid", "space-guid");

        let create = client.create_team(&details).await.unwrap_err();
        let delete = client.delete_team(&details).await.unwrap_err();

        assert!(matches!(create, TeamClientError::Validation(_)), "{name}: {create}");
        assert!(matches!(delete, TeamClientError::Validation(_)), "{name}: {delete}");
    }
}
