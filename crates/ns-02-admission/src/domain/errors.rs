//! Admission error types.

use thiserror::Error;

use super::entities::SecretId;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AdmissionError {
    /// Submitted value was empty or whitespace only.
    #[error("value is required")]
    EmptyValue,

    #[error("secret not found: {0}")]
    SecretNotFound(SecretId),
}
