//! Request and response payloads shared between frontend and backend.

use serde::{Deserialize, Serialize};

/// Credentials submitted by the login form. The same endpoint serves the
/// company account, partners and couples.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Who a session token belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionRole {
    Company,
    Partner { id: String, name: String },
    Couple { user_id: String },
}

/// An established session: the opaque token plus the resolved role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub token: String,
    pub role: SessionRole,
}

/// Customer intake form submitted from the partner dashboard. All fields
/// are required; validation beyond non-emptiness is out of scope.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRequest {
    pub groom_name: String,
    pub bride_name: String,
    pub whatsapp_number: String,
    pub email: String,
}

/// Result of a successful intake: the created couple account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeResponse {
    pub user_id: String,
    pub website_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_role_wire_format_is_tagged() {
        let role = SessionRole::Partner {
            id: "p-1".into(),
            name: "Kerala Events".into(),
        };
        let json = serde_json::to_string(&role).unwrap();
        assert!(json.contains("\"kind\":\"partner\""));
        let back: SessionRole = serde_json::from_str(&json).unwrap();
        assert_eq!(back, role);
    }
}
