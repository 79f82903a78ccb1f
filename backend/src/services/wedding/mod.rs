//! # Wedding Record Service Module
//!
//! Endpoints for the couple's own wedding record under `/api/wedding`. The
//! record is read and written whole: a save replaces the stored row with the
//! payload, so concurrent saves resolve to whichever write lands last.
//!
//! ## Sub-modules:
//! - `get`: Returns the authenticated couple's record.
//! - `save`: Replaces the record with the posted overlay payload.

mod get;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/wedding";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::process))
        .route("", post().to(save::process))
}
