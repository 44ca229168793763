//! Mock gateway for isolating services in downstream tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::roster::RosterEntry;
use crate::dto::records::{PaymentRecord, RegistrationRecord};
use crate::gateway::errors::GatewayResult;
use crate::gateway::{RecordWriter, RosterReader, TxRefIssuer};

mock! {
    pub Gateway {}

    #[async_trait]
    impl RosterReader for Gateway {
        async fn fetch_names(&self, part: &str, fee_type: &str) -> GatewayResult<Vec<RosterEntry>>;
    }

    #[async_trait]
    impl RecordWriter for Gateway {
        async fn add_name(&self, record: &RegistrationRecord) -> GatewayResult<()>;
        async fn add_payment(&self, record: &PaymentRecord) -> GatewayResult<()>;
    }

    #[async_trait]
    impl TxRefIssuer for Gateway {
        async fn issue_tx_ref(&self, part: &str, donation: bool) -> GatewayResult<String>;
    }
}
