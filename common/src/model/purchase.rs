use serde::{Deserialize, Serialize};

/// A template purchase row, listed on the partner and company dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: String,
    #[serde(default)]
    pub partner_id: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    pub template_id: String,
    pub purchase_type: String,
    pub amount: f64,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}
