use serde::{Deserialize, Serialize};

/// One generated site in the public gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteSummary {
    pub bride_name: String,
    pub groom_name: String,
    pub website_name: String,
}

impl WebsiteSummary {
    /// Public URL of the generated site.
    pub fn url(&self) -> String {
        format!("https://{}.matson.app", self.website_name)
    }
}
