//! Business logic behind the HTTP routes.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::forms::{FieldErrors, FormError};

pub mod sample;
pub mod webhook;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid input: {0}")]
    Validation(FieldErrors),

    #[error("malformed request: {0}")]
    Malformed(String),

    #[error("type constraint violated: {0}")]
    TypeConstraint(#[from] TypeConstraintError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Validation(errors) => ServiceError::Validation(errors),
            FormError::Malformed(message) => ServiceError::Malformed(message),
        }
    }
}
