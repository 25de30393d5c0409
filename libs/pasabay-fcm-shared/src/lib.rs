/// Pasabay FCM Shared Library
///
/// This library provides the Firebase Cloud Messaging (FCM) client used by
/// the push gateway for sending push notifications to Android devices.
///
/// It handles:
/// - OAuth2 access-token acquisition via the service-account JWT-bearer grant
/// - Single-message delivery through the FCM v1 send API
///
/// Each call re-derives its access token; there is deliberately no token
/// cache and no retry.

pub mod client;
pub mod errors;
pub mod models;

pub use client::{FcmClient, DEFAULT_API_BASE, DEFAULT_TOKEN_URI, MESSAGING_SCOPE};
pub use errors::FcmError;
pub use models::{FirebaseCredentials, ANDROID_CHANNEL_ID};
