use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::collections::HashMap;
use tracing::{debug, error};

use crate::errors::FcmError;
use crate::models::*;

/// OAuth2 scope required for FCM v1 sends
pub const MESSAGING_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";

/// Google OAuth2 token endpoint
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// FCM API host
pub const DEFAULT_API_BASE: &str = "https://fcm.googleapis.com";

/// Assertion lifetime, fixed by the service-account flow
const ASSERTION_TTL_SECS: i64 = 3600;

/// Firebase Cloud Messaging Client
///
/// Handles OAuth2 access-token acquisition and message delivery for a single
/// Firebase project. Stateless across calls: every send signs a fresh
/// assertion and exchanges it for a fresh access token.
pub struct FcmClient {
    credentials: FirebaseCredentials,
    http_client: reqwest::Client,
}

impl FcmClient {
    /// Create new FCM client
    ///
    /// # Arguments
    /// * `credentials` - Service account credentials with OAuth2 endpoints
    pub fn new(credentials: FirebaseCredentials) -> Self {
        Self {
            credentials,
            http_client: reqwest::Client::new(),
        }
    }

    /// Build the signed RS256 assertion for the JWT-bearer grant
    ///
    /// Claims are issued for exactly one hour from now, per the
    /// service-account flow.
    pub fn build_assertion(&self) -> Result<String, FcmError> {
        let iat = Utc::now().timestamp();

        let claims = OauthClaims {
            iss: self.credentials.client_email.clone(),
            scope: MESSAGING_SCOPE.to_string(),
            aud: self.credentials.token_uri.clone(),
            iat,
            exp: iat + ASSERTION_TTL_SECS,
        };

        let encoding_key = EncodingKey::from_rsa_pem(self.credentials.private_key.as_bytes())
            .map_err(|e| FcmError::Key(e.to_string()))?;

        encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)
            .map_err(|e| FcmError::Jwt(e.to_string()))
    }

    /// Exchange the signed assertion for a short-lived access token
    ///
    /// One attempt, no retry. An `error` field in the response body fails
    /// the exchange even on a 200, preferring `error_description`.
    pub async fn fetch_access_token(&self) -> Result<String, FcmError> {
        let assertion = self.build_assertion()?;

        let params = [
            ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
            ("assertion", assertion.as_str()),
        ];

        let response = self
            .http_client
            .post(&self.credentials.token_uri)
            .form(&params)
            .send()
            .await?;

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|_| FcmError::MalformedResponse("token endpoint"))?;

        if let Some(code) = token.error {
            let message = token.error_description.unwrap_or(code);
            error!("OAuth2 token exchange rejected: {}", message);
            return Err(FcmError::TokenExchange(message));
        }

        token
            .access_token
            .ok_or(FcmError::MalformedResponse("token endpoint"))
    }

    /// Send notification via FCM to a single device
    ///
    /// Returns the provider's response body verbatim on success.
    pub async fn send_push(
        &self,
        fcm_token: Option<String>,
        title: Option<String>,
        body: Option<String>,
        data: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, FcmError> {
        let access_token = self.fetch_access_token().await?;

        let message = build_message(fcm_token, title, body, data);

        let url = format!(
            "{}/v1/projects/{}/messages:send",
            self.credentials.api_base, self.credentials.project_id
        );

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", access_token))
            .header("Content-Type", "application/json")
            .json(&message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<FcmErrorBody>(&body_text)
                .ok()
                .and_then(|b| b.error)
                .and_then(|e| e.message)
                .unwrap_or_else(|| "Failed to send notification".to_string());

            error!("FCM send failed ({}): {}", status, message);
            return Err(FcmError::Send(message));
        }

        let result: serde_json::Value = response
            .json()
            .await
            .map_err(|_| FcmError::MalformedResponse("send endpoint"))?;

        debug!("FCM send succeeded");
        Ok(result)
    }
}

/// Assemble the FCM v1 message envelope
///
/// `data` defaults to an empty mapping so the field is always present on
/// the wire.
fn build_message(
    fcm_token: Option<String>,
    title: Option<String>,
    body: Option<String>,
    data: Option<HashMap<String, String>>,
) -> FcmMessage {
    FcmMessage {
        message: FcmMessageContent {
            token: fcm_token,
            notification: FcmNotification { title, body },
            data: data.unwrap_or_default(),
            android: AndroidConfig::high_priority(),
        },
    }
}
