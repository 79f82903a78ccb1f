//! Data-access collaborator: typed REST client over the backend API.
//!
//! Every call resolves to `Result`; callers catch, log and surface failures
//! as toasts. No retry policy lives here.

use std::fmt;

use common::model::partner::{NewPartner, Partner};
use common::model::purchase::Purchase;
use common::model::website::WebsiteSummary;
use common::model::wedding::WeddingRecord;
use common::requests::{IntakeRequest, IntakeResponse, LoginRequest, SessionInfo};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The server answered with a non-success status; carries its body.
    Status(u16, String),
    /// The request never completed, or the payload could not be decoded.
    Network(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status(status, body) if body.is_empty() => {
                write!(f, "server responded with status {}", status)
            }
            ApiError::Status(_, body) => f.write_str(body),
            ApiError::Network(message) => f.write_str(message),
        }
    }
}

fn with_auth(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.status() == 200 {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status(status, body))
    }
}

async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    let response = with_auth(Request::get(path), token)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    let response = with_auth(Request::post(path), token)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

pub async fn login(request: &LoginRequest) -> Result<SessionInfo, ApiError> {
    post_json("/api/auth/login", None, request).await
}

pub async fn fetch_session(token: &str) -> Result<SessionInfo, ApiError> {
    get_json("/api/auth/session", Some(token)).await
}

pub async fn logout(token: &str) -> Result<(), ApiError> {
    let response = with_auth(Request::delete("/api/auth/session"), Some(token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if response.status() == 200 {
        Ok(())
    } else {
        let status = response.status();
        Err(ApiError::Status(
            status,
            response.text().await.unwrap_or_default(),
        ))
    }
}

pub async fn fetch_wedding(token: &str) -> Result<WeddingRecord, ApiError> {
    get_json("/api/wedding", Some(token)).await
}

/// Persists the record-shaped overlay; the response is the record as saved,
/// which re-seeds the editor's draft.
pub async fn save_wedding(
    token: &str,
    payload: &WeddingRecord,
) -> Result<WeddingRecord, ApiError> {
    post_json("/api/wedding", Some(token), payload).await
}

pub async fn list_partners(token: &str) -> Result<Vec<Partner>, ApiError> {
    get_json("/api/partners", Some(token)).await
}

pub async fn create_partner(token: &str, new: &NewPartner) -> Result<Partner, ApiError> {
    post_json("/api/partners", Some(token), new).await
}

pub async fn list_purchases(token: &str) -> Result<Vec<Purchase>, ApiError> {
    get_json("/api/purchases", Some(token)).await
}

pub async fn list_websites() -> Result<Vec<WebsiteSummary>, ApiError> {
    get_json("/api/websites", None).await
}

pub async fn submit_intake(
    token: &str,
    intake: &IntakeRequest,
) -> Result<IntakeResponse, ApiError> {
    post_json("/api/intake", Some(token), intake).await
}
