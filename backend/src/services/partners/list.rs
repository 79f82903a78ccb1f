use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::requests::SessionRole;

use crate::services::auth::authorize;
use crate::sessions::SessionsState;
use crate::store::Store;

/// Actix handler for `GET /api/partners`.
pub async fn process(
    req: HttpRequest,
    store: web::Data<Store>,
    sessions: web::Data<SessionsState>,
) -> impl Responder {
    match authorize(&req, &sessions).await {
        Ok(SessionRole::Company) => {}
        Ok(_) => return HttpResponse::Forbidden().body("Company access required"),
        Err(resp) => return resp,
    }

    match store.partners() {
        Ok(partners) => HttpResponse::Ok().json(partners),
        Err(e) => {
            HttpResponse::ServiceUnavailable().body(format!("Error listing partners: {}", e))
        }
    }
}
