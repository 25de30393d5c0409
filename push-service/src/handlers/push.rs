use crate::models::{SendPushRequest, SendPushResponse};
use actix_web::{web, HttpResponse, Result as ActixResult};
use pasabay_fcm_shared::FcmClient;
use std::sync::Arc;
use tracing::error;

/// Send a push notification to a single device
///
/// POST /api/v1/push/send
///
/// Runs the assertion-sign, token-exchange, dispatch sequence and collapses
/// any failure into the error envelope exactly once, here.
pub async fn send_push(
    client: web::Data<Arc<FcmClient>>,
    request: web::Json<SendPushRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();

    match client
        .send_push(request.fcm_token, request.title, request.body, request.data)
        .await
    {
        Ok(result) => Ok(HttpResponse::Ok().json(SendPushResponse::ok(result))),
        Err(e) => {
            error!("Failed to send push notification: {}", e);
            Ok(HttpResponse::InternalServerError().json(SendPushResponse::err(e.to_string())))
        }
    }
}

/// Register routes
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/push").route("/send", web::post().to(send_push)));
}
