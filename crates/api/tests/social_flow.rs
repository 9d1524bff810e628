//! End-to-end LINE Login flow against a simulated platform.

use line_sdk_api::{ChannelTokenClient, HttpClient, SocialClient, SocialClientConfig, TokenEndpoints};
use line_sdk_common::ChannelCredentials;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Validates the full login lifecycle: code exchange, profile fetch,
/// revocation.
///
/// Assertions:
/// - Confirms the authorization code is exchanged for a user token.
/// - Confirms the installed token authenticates the profile fetch.
/// - Ensures revocation clears the held token.
#[tokio::test]
async fn login_profile_revoke_lifecycle() {
    let server = MockServer::start().await;
    let base = format!("{}/", server.uri());
    let credentials = ChannelCredentials::new("1350031035", "login-secret");

    Mock::given(method("POST"))
        .and(path("/oauth2/v2.1/token"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=auth-code-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "user-token",
            "refresh_token": "refresh-1",
            "token_type": "Bearer",
            "expires_in": 2592000,
            "scope": "profile"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/profile"))
        .and(wiremock::matchers::header("authorization", "Bearer user-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "displayName": "Alex",
            "userId": "U1234",
            "statusMessage": "hello"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/oauth2/v2.1/revoke"))
        .and(body_string_contains("access_token=user-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let token_client = ChannelTokenClient::new(
        credentials.clone(),
        TokenEndpoints::social(&base),
        HttpClient::new().expect("http client"),
    );
    let token = token_client
        .exchange_authorization_code("auth-code-1", "https://example.com/cb")
        .await
        .expect("token exchange");
    assert_eq!(token.access_token, "user-token");

    let client = SocialClient::with_config(
        credentials,
        SocialClientConfig {
            base_url: base,
            ..Default::default()
        },
    )
    .expect("client");
    client.set_access_token(token).await;

    let profile = client.get_profile().await.expect("profile");
    assert_eq!(profile.display_name, "Alex");
    assert_eq!(profile.status_message, "hello");

    client.revoke_access_token().await.expect("revocation");
    assert!(client.access_token().await.is_none());
}

/// Validates that user operations never fall back to a channel grant.
///
/// Assertions:
/// - Ensures a tokenless client reports `Unauthenticated` for profile and
///   friendship lookups.
/// - Ensures zero requests reach the platform.
#[tokio::test]
async fn user_operations_require_installed_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = SocialClient::with_config(
        ChannelCredentials::new("1350031035", "login-secret"),
        SocialClientConfig {
            base_url: format!("{}/", server.uri()),
            ..Default::default()
        },
    )
    .expect("client");

    assert!(matches!(
        client.get_profile().await,
        Err(line_sdk_domain::LineError::Unauthenticated(_))
    ));
    assert!(matches!(
        client.has_friendship().await,
        Err(line_sdk_domain::LineError::Unauthenticated(_))
    ));
}
