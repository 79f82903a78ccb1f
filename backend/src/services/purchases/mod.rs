//! Purchase history endpoints under `/api/purchases`.

mod list;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/purchases";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(list::process))
}
