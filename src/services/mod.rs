pub mod evaluate;
pub mod metrics;

use thiserror::Error;

use crate::dto::DtoError;

/// Errors surfaced by the service layer to the HTTP routes.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DtoError> for ServiceError {
    fn from(val: DtoError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
