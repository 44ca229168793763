//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::{DEFAULT_DONATION_PART, DEFAULT_IDENTIFIER_FIELD};

/// Deployment configuration for one portal session.
#[derive(Clone, Debug, Deserialize)]
pub struct PortalConfig {
    /// Base URL of the portal backend.
    pub base_url: String,
    /// CSRF token issued by the server for this session.
    pub csrf_token: String,
    /// Fee type preselected when the page opens.
    pub fee_type: String,
    /// Part/category preselected when the page opens.
    pub part: String,
    /// Part that unmatched payment submissions are reclassified into.
    #[serde(default = "default_donation_part")]
    pub donation_part: String,
    /// Wire name of the identifier field; varies by deployment.
    #[serde(default = "default_identifier_field")]
    pub identifier_field: String,
}

fn default_donation_part() -> String {
    DEFAULT_DONATION_PART.to_string()
}

fn default_identifier_field() -> String {
    DEFAULT_IDENTIFIER_FIELD.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_the_optional_fields() {
        let config: PortalConfig = serde_json::from_str(
            r#"{
                "base_url": "http://localhost:5000",
                "csrf_token": "tok",
                "fee_type": "dues",
                "part": "2026 Dues"
            }"#,
        )
        .unwrap();
        assert_eq!(config.donation_part, "Donations");
        assert_eq!(config.identifier_field, "reg_no");
    }
}
