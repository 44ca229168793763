//! Form-controller services: one module per component of the portal page.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::gateway::errors::GatewayError;

pub mod autocomplete;
pub mod checkout;
pub mod mode;
pub mod roster;
pub mod submission;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// A client-side rule rejected the form before any network call.
    #[error("form validation failed: {0}")]
    Form(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

/// What a submission attempt amounted to. Aborts cover every client-side
/// short circuit: no roster match on checkout, a declined overwrite
/// confirmation, a declined redirect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Submitted,
    Aborted,
}
