use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::requests::SessionRole;

use crate::services::auth::authorize;
use crate::sessions::SessionsState;
use crate::store::Store;

/// Actix handler for `GET /api/wedding`: the authenticated couple's record.
pub async fn process(
    req: HttpRequest,
    store: web::Data<Store>,
    sessions: web::Data<SessionsState>,
) -> impl Responder {
    let role = match authorize(&req, &sessions).await {
        Ok(role) => role,
        Err(resp) => return resp,
    };
    let SessionRole::Couple { user_id } = role else {
        return HttpResponse::Forbidden().body("Only couples have a wedding record");
    };

    match store.wedding_for_user(&user_id) {
        Ok(Some(record)) => HttpResponse::Ok().json(record),
        Ok(None) => HttpResponse::NotFound().body("No wedding record for this account"),
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("Error retrieving wedding record: {}", e)),
    }
}
