use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::requests::SessionRole;

use crate::services::auth::authorize;
use crate::sessions::SessionsState;
use crate::store::Store;

/// Actix handler for `GET /api/purchases`. The company sees every purchase;
/// a partner sees only their own.
pub async fn process(
    req: HttpRequest,
    store: web::Data<Store>,
    sessions: web::Data<SessionsState>,
) -> impl Responder {
    let purchases = match authorize(&req, &sessions).await {
        Ok(SessionRole::Company) => store.purchases(),
        Ok(SessionRole::Partner { id, .. }) => store.purchases_for_partner(&id),
        Ok(SessionRole::Couple { .. }) => {
            return HttpResponse::Forbidden().body("Partner or company access required")
        }
        Err(resp) => return resp,
    };

    match purchases {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            HttpResponse::ServiceUnavailable().body(format!("Error listing purchases: {}", e))
        }
    }
}
