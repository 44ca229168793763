//! `reqwest`-backed implementation of the gateway ports.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;

use crate::domain::roster::RosterEntry;
use crate::dto::records::{PaymentRecord, RegistrationRecord};
use crate::gateway::errors::{GatewayError, GatewayResult};
use crate::gateway::{RecordWriter, RosterReader, TxRefIssuer};
use crate::models::config::PortalConfig;

/// Header carrying the server-issued CSRF token on every mutating request.
const CSRF_HEADER: &str = "X-CSRFToken";

/// Multipart field name of the optional roster file.
const FILE_FIELD: &str = "name-file";

#[derive(Deserialize)]
struct NamesResponse {
    names: Vec<(String, String)>,
}

#[derive(Deserialize)]
struct TxRefResponse {
    tx_ref: String,
}

/// Error body shape the backend returns on rejection.
#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the portal backend.
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
    csrf_token: String,
    identifier_field: String,
}

impl HttpGateway {
    pub fn new(config: &PortalConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            csrf_token: config.csrf_token.clone(),
            identifier_field: config.identifier_field.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Extracts the server-provided detail from a rejection body.
    async fn rejection(response: Response) -> GatewayError {
        let status = response.status().as_u16();
        let body: ErrorBody = response.json().await.unwrap_or_default();
        let detail = body
            .error
            .or(body.message)
            .unwrap_or_else(|| "no detail provided".to_string());
        GatewayError::Rejected { status, detail }
    }
}

#[async_trait]
impl RosterReader for HttpGateway {
    async fn fetch_names(&self, part: &str, fee_type: &str) -> GatewayResult<Vec<RosterEntry>> {
        let response = self
            .client
            .get(self.url("/names"))
            .query(&[("part", part), ("fee_type", fee_type)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let body: NamesResponse = response.json().await?;
        Ok(body
            .names
            .into_iter()
            .map(|(display_name, identifier)| RosterEntry::new(display_name, identifier))
            .collect())
    }
}

#[async_trait]
impl RecordWriter for HttpGateway {
    async fn add_name(&self, record: &RegistrationRecord) -> GatewayResult<()> {
        let mut form = Form::new()
            .text("fee_type", record.fee_type.clone())
            .text("part", record.part.clone())
            .text("name", record.name.clone())
            .text(self.identifier_field.clone(), record.identifier.clone());

        if let Some(attachment) = &record.attachment {
            let part = Part::bytes(attachment.bytes.clone()).file_name(attachment.file_name.clone());
            form = form.part(FILE_FIELD, part);
        }

        let response = self
            .client
            .post(self.url("/add-name"))
            .header(CSRF_HEADER, &self.csrf_token)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }

    async fn add_payment(&self, record: &PaymentRecord) -> GatewayResult<()> {
        let mut body = json!({
            "fee_type": record.fee_type,
            "part": record.part,
            "name": record.name,
            "amount": record.amount.get(),
            "donation": record.donation,
        });
        // The identifier field's wire name varies by deployment.
        body[self.identifier_field.as_str()] = json!(record.identifier);

        let response = self
            .client
            .post(self.url("/add-payment"))
            .header(CSRF_HEADER, &self.csrf_token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }
}

#[async_trait]
impl TxRefIssuer for HttpGateway {
    async fn issue_tx_ref(&self, part: &str, donation: bool) -> GatewayResult<String> {
        let response = self
            .client
            .post(self.url("/tx_ref"))
            .header(CSRF_HEADER, &self.csrf_token)
            .json(&json!({ "part": part, "donation": donation }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let body: TxRefResponse = response.json().await?;
        Ok(body.tx_ref)
    }
}
