//! Backend ports consumed by the services.
//!
//! The portal backend is external; these traits cover exactly the HTTP
//! contract the page consumes. Services take the capabilities they need as
//! generic bounds so tests can substitute scripted implementations.

use async_trait::async_trait;

use crate::domain::roster::RosterEntry;
use crate::dto::records::{PaymentRecord, RegistrationRecord};
use crate::gateway::errors::GatewayResult;

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use http::HttpGateway;

/// Read access to the roster for a (part, fee type) selection.
#[async_trait]
pub trait RosterReader: Send + Sync {
    async fn fetch_names(&self, part: &str, fee_type: &str) -> GatewayResult<Vec<RosterEntry>>;
}

/// State-mutating writes; every call carries the CSRF token.
#[async_trait]
pub trait RecordWriter: Send + Sync {
    async fn add_name(&self, record: &RegistrationRecord) -> GatewayResult<()>;
    async fn add_payment(&self, record: &PaymentRecord) -> GatewayResult<()>;
}

/// Transaction reference issuance for the checkout hand-off.
#[async_trait]
pub trait TxRefIssuer: Send + Sync {
    async fn issue_tx_ref(&self, part: &str, donation: bool) -> GatewayResult<String>;
}
