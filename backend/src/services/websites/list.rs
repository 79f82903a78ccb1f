use actix_web::{web, HttpResponse, Responder};

use crate::store::Store;

/// Actix handler for `GET /api/websites`: the public gallery rows. No auth;
/// the gallery is a marketing page.
pub async fn process(store: web::Data<Store>) -> impl Responder {
    match store.websites() {
        Ok(websites) => HttpResponse::Ok().json(websites),
        Err(e) => {
            HttpResponse::ServiceUnavailable().body(format!("Error listing websites: {}", e))
        }
    }
}
