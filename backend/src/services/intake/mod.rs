//! Customer intake endpoint under `/api/intake`.
//!
//! A partner submits the couple's details; the service creates the couple
//! account (the WhatsApp number doubles as the initial password, which the
//! couple uses to log in and edit their site), seeds the wedding record and
//! records the template purchase.

mod create;

pub use create::create_intake;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/intake";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(create::process))
}
