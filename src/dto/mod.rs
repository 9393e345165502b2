//! Wire types exchanged with GA clients over HTTP.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::schedule::ScheduleError;
use crate::domain::types::TypeConstraintError;

pub mod evaluate;
pub mod status;

#[derive(Debug, Error)]
/// Errors that can occur when converting a request payload into domain values.
pub enum DtoError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(
        "individual has {individual} entries but execution_times has {execution_times}"
    )]
    LengthMismatch {
        individual: usize,
        execution_times: usize,
    },

    #[error("execution_times[{index}]: {source}")]
    InvalidExecutionTime {
        index: usize,
        source: TypeConstraintError,
    },

    #[error("{field}: {source}")]
    InvalidValue {
        field: &'static str,
        source: TypeConstraintError,
    },

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}
