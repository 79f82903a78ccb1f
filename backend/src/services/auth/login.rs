use actix_web::{web, HttpResponse, Responder};
use common::requests::{LoginRequest, SessionRole};
use log::{info, warn};

use crate::config;
use crate::sessions::SessionsState;
use crate::store::Store;

/// Actix handler for `POST /api/auth/login`.
pub async fn process(
    payload: web::Json<LoginRequest>,
    store: web::Data<Store>,
    sessions: web::Data<SessionsState>,
) -> impl Responder {
    match resolve_role(&store, &payload) {
        Ok(Some(role)) => {
            let session = sessions.create(role).await;
            info!("session established for {}", payload.email);
            HttpResponse::Ok().json(session)
        }
        Ok(None) => {
            warn!("rejected login for {}", payload.email);
            HttpResponse::Unauthorized().body("Invalid credentials")
        }
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Login failed: {}", e)),
    }
}

/// Checks the credentials against the company account, then the partners
/// table, then the couple accounts.
pub fn resolve_role(store: &Store, req: &LoginRequest) -> Result<Option<SessionRole>, String> {
    if req.email.is_empty() || req.password.is_empty() {
        return Ok(None);
    }

    if req.email == config::company_email() && req.password == config::company_password() {
        return Ok(Some(SessionRole::Company));
    }

    if let Some(partner) = store.partner_by_credentials(&req.email, &req.password)? {
        return Ok(Some(SessionRole::Partner {
            id: partner.id,
            name: partner.name,
        }));
    }

    if let Some(user_id) = store.couple_by_credentials(&req.email, &req.password)? {
        return Ok(Some(SessionRole::Couple { user_id }));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::partner::NewPartner;

    fn scratch_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::TempDir::new().unwrap();
        let store = Store::open(dir.path().join("test.sqlite")).unwrap();
        (dir, store)
    }

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn credentials_resolve_in_company_partner_couple_order() {
        let (_dir, store) = scratch_store();
        let partner = store
            .insert_partner(&NewPartner {
                name: "Kerala Events".into(),
                email: "events@example.com".into(),
                password: "secret".into(),
                ..NewPartner::default()
            })
            .unwrap();
        let user_id = store
            .create_couple("couple@example.com", "9876", "a-and-b")
            .unwrap();

        let company = request(&config::company_email(), &config::company_password());
        assert_eq!(
            resolve_role(&store, &company).unwrap(),
            Some(SessionRole::Company)
        );

        assert_eq!(
            resolve_role(&store, &request("events@example.com", "secret")).unwrap(),
            Some(SessionRole::Partner {
                id: partner.id,
                name: partner.name,
            })
        );

        assert_eq!(
            resolve_role(&store, &request("couple@example.com", "9876")).unwrap(),
            Some(SessionRole::Couple { user_id })
        );

        assert_eq!(
            resolve_role(&store, &request("events@example.com", "wrong")).unwrap(),
            None
        );
        assert_eq!(resolve_role(&store, &request("", "")).unwrap(), None);
    }
}
