use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Android notification channel registered by the Pasabay app
pub const ANDROID_CHANNEL_ID: &str = "pasabay_notifications";

/// Firebase service-account credentials
///
/// Passed to `FcmClient::new` explicitly; the client never reads the
/// environment itself.
#[derive(Debug, Clone)]
pub struct FirebaseCredentials {
    pub project_id: String,
    pub client_email: String,
    /// PEM-encoded PKCS#8 private key, with real newlines
    pub private_key: String,
    pub token_uri: String,
    pub api_base: String,
}

/// JWT claims for the Google OAuth2 service-account assertion
#[derive(Debug, Serialize, Deserialize)]
pub struct OauthClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

/// Google OAuth2 token response
///
/// A 200 response may still carry an `error` body; both shapes land here.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// FCM v1 Message Request
#[derive(Debug, Serialize)]
pub struct FcmMessage {
    pub message: FcmMessageContent,
}

/// FCM Message Content
#[derive(Debug, Serialize)]
pub struct FcmMessageContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub notification: FcmNotification,
    /// Always serialized, defaulting to an empty mapping
    pub data: HashMap<String, String>,
    pub android: AndroidConfig,
}

/// FCM Notification Payload
///
/// Fields the caller omitted are dropped from the wire shape and left for
/// FCM to reject.
#[derive(Debug, Serialize)]
pub struct FcmNotification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Android delivery hints
#[derive(Debug, Serialize)]
pub struct AndroidConfig {
    pub priority: String,
    pub notification: AndroidNotification,
}

#[derive(Debug, Serialize)]
pub struct AndroidNotification {
    pub sound: String,
    pub channel_id: String,
}

impl AndroidConfig {
    /// Delivery hints attached to every Pasabay push
    pub fn high_priority() -> Self {
        Self {
            priority: "high".to_string(),
            notification: AndroidNotification {
                sound: "default".to_string(),
                channel_id: ANDROID_CHANNEL_ID.to_string(),
            },
        }
    }
}

/// FCM v1 error body
#[derive(Debug, Deserialize)]
pub struct FcmErrorBody {
    pub error: Option<FcmErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct FcmErrorDetail {
    pub code: Option<i64>,
    pub message: Option<String>,
}
