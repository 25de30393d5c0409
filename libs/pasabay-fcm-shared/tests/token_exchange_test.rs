//! Token exchange and dispatch tests against fake upstream endpoints.

use pasabay_fcm_shared::{FcmClient, FcmError, FirebaseCredentials};
use rsa::pkcs8::{EncodePrivateKey, LineEnding};
use rsa::RsaPrivateKey;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_key_pem() -> String {
    let mut rng = rand::thread_rng();
    let key = RsaPrivateKey::new(&mut rng, 2048).expect("generate test key");
    key.to_pkcs8_pem(LineEnding::LF)
        .expect("encode test key")
        .to_string()
}

fn credentials(server: &MockServer) -> FirebaseCredentials {
    FirebaseCredentials {
        project_id: "pasabay-test".to_string(),
        client_email: "push@pasabay-test.iam.gserviceaccount.com".to_string(),
        private_key: test_key_pem(),
        token_uri: format!("{}/token", server.uri()),
        api_base: server.uri(),
    }
}

#[tokio::test]
async fn exchange_returns_access_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains(
            "grant_type=urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Ajwt-bearer",
        ))
        .and(body_string_contains("assertion="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "test-access-token",
            "expires_in": 3599,
            "token_type": "Bearer"
        })))
        .mount(&server)
        .await;

    let client = FcmClient::new(credentials(&server));
    let token = client.fetch_access_token().await.unwrap();
    assert_eq!(token, "test-access-token");
}

#[tokio::test]
async fn exchange_prefers_error_description() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid JWT signature."
        })))
        .mount(&server)
        .await;

    let client = FcmClient::new(credentials(&server));
    let err = client.fetch_access_token().await.unwrap_err();
    assert!(matches!(err, FcmError::TokenExchange(_)));
    assert_eq!(err.to_string(), "Invalid JWT signature.");
}

#[tokio::test]
async fn exchange_falls_back_to_error_code() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "error": "invalid_grant" })),
        )
        .mount(&server)
        .await;

    let client = FcmClient::new(credentials(&server));
    let err = client.fetch_access_token().await.unwrap_err();
    assert_eq!(err.to_string(), "invalid_grant");
}

#[tokio::test]
async fn rejected_exchange_never_reaches_send_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "invalid_grant" })),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/projects/pasabay-test/messages:send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "unreachable" })))
        .expect(0)
        .mount(&server)
        .await;

    let client = FcmClient::new(credentials(&server));
    let err = client
        .send_push(Some("abc".to_string()), None, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, FcmError::TokenExchange(_)));

    server.verify().await;
}

#[tokio::test]
async fn send_attaches_bearer_token_and_empty_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "test-access-token",
            "expires_in": 3599,
            "token_type": "Bearer"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/projects/pasabay-test/messages:send"))
        .and(header("Authorization", "Bearer test-access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "projects/pasabay-test/messages/0:123"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = FcmClient::new(credentials(&server));
    let result = client
        .send_push(
            Some("abc".to_string()),
            Some("Hi".to_string()),
            Some("There".to_string()),
            None,
        )
        .await
        .unwrap();
    assert_eq!(result["name"], json!("projects/pasabay-test/messages/0:123"));

    let requests = server.received_requests().await.unwrap();
    let send_request = requests
        .iter()
        .find(|r| r.url.path().ends_with("messages:send"))
        .expect("send request recorded");
    let body: serde_json::Value = serde_json::from_slice(&send_request.body).unwrap();
    assert_eq!(body["message"]["data"], json!({}));

    server.verify().await;
}

#[tokio::test]
async fn send_relays_provider_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "test-access-token",
            "expires_in": 3599,
            "token_type": "Bearer"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/projects/pasabay-test/messages:send"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": 404, "message": "Requested entity was not found." }
        })))
        .mount(&server)
        .await;

    let client = FcmClient::new(credentials(&server));
    let err = client
        .send_push(Some("gone".to_string()), None, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, FcmError::Send(_)));
    assert_eq!(err.to_string(), "Requested entity was not found.");
}
