use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::model::wedding::WeddingRecord;
use common::requests::SessionRole;
use log::info;

use crate::services::auth::authorize;
use crate::sessions::SessionsState;
use crate::store::Store;

/// Actix handler for `POST /api/wedding`.
///
/// The payload is the full record-shaped overlay built by the editor;
/// unmodeled fields ride along in it and are stored verbatim. The saved
/// record is echoed back so the client can re-seed its draft from it.
pub async fn process(
    req: HttpRequest,
    payload: web::Json<WeddingRecord>,
    store: web::Data<Store>,
    sessions: web::Data<SessionsState>,
) -> impl Responder {
    let role = match authorize(&req, &sessions).await {
        Ok(role) => role,
        Err(resp) => return resp,
    };
    let SessionRole::Couple { user_id } = role else {
        return HttpResponse::Forbidden().body("Only couples can save a wedding record");
    };

    match store.upsert_wedding(&user_id, &payload) {
        Ok(()) => {
            info!(
                "wedding record saved for {} (template {})",
                user_id, payload.template
            );
            HttpResponse::Ok().json(payload.into_inner())
        }
        Err(e) => {
            HttpResponse::ServiceUnavailable().body(format!("Error saving wedding record: {}", e))
        }
    }
}
