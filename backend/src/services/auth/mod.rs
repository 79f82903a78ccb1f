//! # Authentication Service Module
//!
//! Groups the endpoints under `/api/auth` and provides the bearer-token
//! helpers the other services use to gate their routes.
//!
//! ## Sub-modules:
//! - `login`: Resolves credentials (company account, partners, couples) into
//!   a session.
//! - `session`: Reads back and tears down an established session.

mod login;
mod session;

use actix_web::web::{delete, get, post, scope};
use actix_web::{HttpRequest, HttpResponse, Scope};
use common::requests::SessionRole;

use crate::sessions::SessionsState;

const API_PATH: &str = "/api/auth";

/// Configures and returns the Actix `Scope` for the auth routes.
///
/// # Registered Routes:
///
/// *   **`POST /login`**:
///     - **Handler**: `login::process`
///     - **Description**: Exchanges credentials for a `SessionInfo`.
///
/// *   **`GET /session`**:
///     - **Handler**: `session::process`
///     - **Description**: Resolves the bearer token of the request.
///
/// *   **`DELETE /session`**:
///     - **Handler**: `session::logout`
///     - **Description**: Revokes the session (logout).
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/login", post().to(login::process))
        .route("/session", get().to(session::process))
        .route("/session", delete().to(session::logout))
}

/// Extracts the bearer token from the `Authorization` header.
pub fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
}

/// Resolves the request's session or produces the 401 response to return.
pub async fn authorize(
    req: &HttpRequest,
    sessions: &SessionsState,
) -> Result<SessionRole, HttpResponse> {
    let Some(token) = bearer_token(req) else {
        return Err(HttpResponse::Unauthorized().body("Missing bearer token"));
    };
    match sessions.resolve(&token).await {
        Some(role) => Ok(role),
        None => Err(HttpResponse::Unauthorized().body("Session expired or unknown")),
    }
}
