use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::model::wedding::{ContactInfo, CoupleInfo, PartnerRef, WeddingRecord};
use common::requests::{IntakeRequest, IntakeResponse, SessionRole};
use log::info;

use crate::config;
use crate::services::auth::authorize;
use crate::sessions::SessionsState;
use crate::store::Store;

/// Actix handler for `POST /api/intake`.
pub async fn process(
    req: HttpRequest,
    payload: web::Json<IntakeRequest>,
    store: web::Data<Store>,
    sessions: web::Data<SessionsState>,
) -> impl Responder {
    let role = match authorize(&req, &sessions).await {
        Ok(role) => role,
        Err(resp) => return resp,
    };
    let SessionRole::Partner { id, name } = role else {
        return HttpResponse::Forbidden().body("Partner access required");
    };

    match create_intake(&store, &payload, &id, &name) {
        Ok(response) => {
            info!(
                "intake created by partner {}: site {}",
                id, response.website_name
            );
            HttpResponse::Ok().json(response)
        }
        Err(e) => HttpResponse::BadRequest().body(e),
    }
}

/// Creates the couple account, the seeded wedding record and the purchase
/// row. Validation is required-field only.
pub fn create_intake(
    store: &Store,
    intake: &IntakeRequest,
    partner_id: &str,
    partner_name: &str,
) -> Result<IntakeResponse, String> {
    validate(intake)?;

    let website_name = unique_website_name(store, &intake.bride_name, &intake.groom_name)?;
    let user_id = store.create_couple(&intake.email, &intake.whatsapp_number, &website_name)?;

    let record = WeddingRecord {
        couple: CoupleInfo {
            groom_name: intake.groom_name.clone(),
            bride_name: intake.bride_name.clone(),
            wedding_quote: String::new(),
        },
        contact: Some(ContactInfo {
            whatsapp_number: intake.whatsapp_number.clone(),
        }),
        partner: Some(PartnerRef {
            id: partner_id.to_string(),
            name: partner_name.to_string(),
        }),
        ..WeddingRecord::default()
    };
    store.upsert_wedding(&user_id, &record)?;

    store.insert_purchase(
        partner_id,
        &user_id,
        record.template.as_str(),
        "template",
        config::TEMPLATE_PRICE,
        "pending",
    )?;

    Ok(IntakeResponse {
        user_id,
        website_name,
    })
}

fn validate(intake: &IntakeRequest) -> Result<(), String> {
    let required = [
        ("groomName", &intake.groom_name),
        ("brideName", &intake.bride_name),
        ("whatsappNumber", &intake.whatsapp_number),
        ("email", &intake.email),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(format!("{} is required", field));
        }
    }
    Ok(())
}

/// Derives the site subdomain from the couple's names, suffixing a counter
/// when the slug is already taken.
fn unique_website_name(store: &Store, bride: &str, groom: &str) -> Result<String, String> {
    let base = slugify(bride, groom);
    if !store.website_name_taken(&base)? {
        return Ok(base);
    }
    for n in 2.. {
        let candidate = format!("{}-{}", base, n);
        if !store.website_name_taken(&candidate)? {
            return Ok(candidate);
        }
    }
    unreachable!()
}

fn slugify(bride: &str, groom: &str) -> String {
    let joined = format!("{}-and-{}", bride.trim(), groom.trim());
    let mut slug = String::with_capacity(joined.len());
    let mut last_dash = true;
    for c in joined.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    let slug = slug.trim_matches('-').to_string();
    if slug == "and" || slug.is_empty() {
        "wedding".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_joins_and_lowercases_names() {
        assert_eq!(slugify("Priya", "Arun"), "priya-and-arun");
        assert_eq!(slugify("  Mary Ann ", "John"), "mary-ann-and-john");
    }

    #[test]
    fn slugify_strips_non_ascii_punctuation() {
        assert_eq!(slugify("Zoë!", "O'Brien"), "zo-and-o-brien");
    }

    #[test]
    fn slugify_falls_back_when_names_are_empty() {
        assert_eq!(slugify("", ""), "wedding");
    }

    #[test]
    fn intake_creates_account_record_and_purchase() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = Store::open(dir.path().join("test.sqlite")).unwrap();
        let intake = IntakeRequest {
            groom_name: "Arun".into(),
            bride_name: "Priya".into(),
            whatsapp_number: "9876543210".into(),
            email: "couple@example.com".into(),
        };

        let response = create_intake(&store, &intake, "p-1", "Kerala Events").unwrap();
        assert_eq!(response.website_name, "priya-and-arun");

        let record = store.wedding_for_user(&response.user_id).unwrap().unwrap();
        assert_eq!(record.couple.groom_name, "Arun");
        assert_eq!(record.partner.as_ref().unwrap().id, "p-1");
        assert_eq!(
            record.contact.as_ref().unwrap().whatsapp_number,
            "9876543210"
        );
        assert_eq!(store.purchases_for_partner("p-1").unwrap().len(), 1);

        // the couple can log in with the WhatsApp number as password
        assert!(store
            .couple_by_credentials("couple@example.com", "9876543210")
            .unwrap()
            .is_some());

        // a second couple with the same names gets a suffixed slug
        let second = IntakeRequest {
            email: "other@example.com".into(),
            ..intake
        };
        let response = create_intake(&store, &second, "p-1", "Kerala Events").unwrap();
        assert_eq!(response.website_name, "priya-and-arun-2");
    }

    #[test]
    fn validate_rejects_blank_required_fields() {
        let intake = IntakeRequest {
            groom_name: "Arun".into(),
            bride_name: "Priya".into(),
            whatsapp_number: "".into(),
            email: "couple@example.com".into(),
        };
        assert_eq!(
            validate(&intake),
            Err("whatsappNumber is required".to_string())
        );
    }
}
