use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inbound send request
///
/// Deliberately permissive: no schema validation, absent fields stay absent
/// in the outbound message and are left for FCM to reject.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendPushRequest {
    pub fcm_token: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub data: Option<HashMap<String, String>>,
}

/// Response envelope returned to the caller
#[derive(Debug, Serialize)]
pub struct SendPushResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendPushResponse {
    pub fn ok(result: serde_json::Value) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error),
        }
    }
}
