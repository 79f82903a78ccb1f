use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::requests::SessionInfo;
use log::info;

use super::{authorize, bearer_token};
use crate::sessions::SessionsState;

/// Actix handler for `GET /api/auth/session`: echoes the session behind the
/// bearer token, or 401.
pub async fn process(req: HttpRequest, sessions: web::Data<SessionsState>) -> impl Responder {
    match authorize(&req, &sessions).await {
        Ok(role) => {
            // authorize already proved the token exists
            let token = bearer_token(&req).unwrap_or_default();
            HttpResponse::Ok().json(SessionInfo { token, role })
        }
        Err(resp) => resp,
    }
}

/// Actix handler for `DELETE /api/auth/session`: tears the session down.
pub async fn logout(req: HttpRequest, sessions: web::Data<SessionsState>) -> impl Responder {
    let Some(token) = bearer_token(&req) else {
        return HttpResponse::Unauthorized().body("Missing bearer token");
    };
    if sessions.revoke(&token).await {
        info!("session revoked");
        HttpResponse::Ok().body("Logged out")
    } else {
        HttpResponse::Unauthorized().body("Session expired or unknown")
    }
}
