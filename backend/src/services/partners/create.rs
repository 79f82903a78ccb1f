use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::model::partner::NewPartner;
use common::requests::SessionRole;
use log::info;

use crate::services::auth::authorize;
use crate::sessions::SessionsState;
use crate::store::Store;

/// Actix handler for `POST /api/partners`.
pub async fn process(
    req: HttpRequest,
    payload: web::Json<NewPartner>,
    store: web::Data<Store>,
    sessions: web::Data<SessionsState>,
) -> impl Responder {
    match authorize(&req, &sessions).await {
        Ok(SessionRole::Company) => {}
        Ok(_) => return HttpResponse::Forbidden().body("Company access required"),
        Err(resp) => return resp,
    }

    if let Err(field) = validate(&payload) {
        return HttpResponse::BadRequest().body(format!("{} is required", field));
    }

    match store.insert_partner(&payload) {
        Ok(partner) => {
            info!("partner created: {} <{}>", partner.name, partner.email);
            HttpResponse::Ok().json(partner)
        }
        Err(e) => {
            HttpResponse::ServiceUnavailable().body(format!("Error creating partner: {}", e))
        }
    }
}

fn validate(new: &NewPartner) -> Result<(), &'static str> {
    if new.name.trim().is_empty() {
        return Err("name");
    }
    if new.email.trim().is_empty() {
        return Err("email");
    }
    if new.password.trim().is_empty() {
        return Err("password");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_requires_the_credential_fields() {
        let mut partner = NewPartner {
            name: "Kerala Events".into(),
            email: "events@example.com".into(),
            password: "secret".into(),
            ..NewPartner::default()
        };
        assert!(validate(&partner).is_ok());

        partner.password = "  ".into();
        assert_eq!(validate(&partner), Err("password"));
    }
}
