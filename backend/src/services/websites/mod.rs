//! Public gallery endpoint under `/api/websites`.

mod list;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/websites";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(list::process))
}
